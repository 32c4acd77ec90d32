// File: tests/logging_setup.rs
// Single test: the logger is process-global.
use tabnote::context::{AppContext, TestContext};
use tabnote::logging::init_logging;
use tabnote::store::StateStore;

#[test]
fn test_logs_go_to_data_dir_once() {
    let ctx = TestContext::new();
    let path = init_logging(&ctx, log::LevelFilter::Debug).unwrap();
    assert_eq!(path, ctx.get_log_file_path().unwrap());

    let mut store = StateStore::new();
    store.add_task("logged");
    assert!(store.toggle_task(3, true).is_err());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("started"));
    assert!(contents.contains("Added task"));

    assert!(init_logging(&ctx, log::LevelFilter::Info).is_err());
}
