use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tabnote::config::Config;
use tabnote::context::StandardContext;
use tabnote::logging;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h" || arg == "help") {
        print_help();
        return Ok(());
    }

    let mut override_root: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 < args.len() {
                    override_root = Some(args[i + 1].clone().into());
                    i += 1; // Also consumed the value
                } else {
                    eprintln!("--root expects a directory");
                    std::process::exit(2);
                }
            }
            other => eprintln!("Ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    let ctx = StandardContext::new(override_root);

    // A broken config aborts; a missing one is created with defaults.
    let cfg = match Config::load_or_init(&ctx) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&ctx, cfg.log_level_filter()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    logging::install_panic_hook(&ctx);

    tabnote::tui::run(&cfg)
}

fn print_help() {
    println!(
        "Tabnote v{} - Notes, tasks and a calendar in three tabs (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    tabnote [--root <path>]");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("KEYBINDINGS:");
    println!("    1 / 2 / 3         Notes / Tasks / Calendar");
    println!("    Tab, Shift-Tab    Next / previous tab");
    println!("    Esc               Back to the previous tab");
    println!("    a                 Type into the input field, Enter adds, Esc leaves it");
    println!("    Space             Check / uncheck the selected task");
    println!("    ?                 Toggle help");
    println!("    q                 Quit");
    println!();
    println!("Notes and tasks live in memory only and are gone when you quit.");
}
