// File: tests/tui_scenario.rs
// Drives the TUI state through key presses, then renders it off-screen.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::Buffer,
    style::{Color, Modifier},
};
use tabnote::config::Config;
use tabnote::navigation::Screen;
use tabnote::tui::action::Action;
use tabnote::tui::handlers::{apply_action, handle_key_event};
use tabnote::tui::state::{AppState, InputMode};
use tabnote::tui::view::draw;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feeds one key through the same path as the event loop. Returns `false` on quit.
fn press(state: &mut AppState, code: KeyCode) -> bool {
    match handle_key_event(key(code), state) {
        Some(action) => apply_action(state, action),
        None => true,
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

fn render_buffer(state: &mut AppState) -> Buffer {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw(f, state)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(state: &mut AppState) -> String {
    render_buffer(state)
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Position of the first cell of `word` on row `y`.
fn find_in_row(buffer: &Buffer, y: u16, word: &str) -> Option<u16> {
    let width = buffer.area.width;
    let letters: Vec<String> = word.chars().map(|c| c.to_string()).collect();
    (0..width.saturating_sub(letters.len() as u16)).find(|&x| {
        letters
            .iter()
            .enumerate()
            .all(|(i, l)| buffer[(x + i as u16, y)].symbol() == l)
    })
}

#[test]
fn test_full_scenario_via_keys() {
    let mut state = AppState::new(&Config::default());
    assert_eq!(state.active_screen(), Screen::Notes);

    press(&mut state, KeyCode::Char('a'));
    assert_eq!(state.mode, InputMode::Editing);
    type_text(&mut state, "buy milk");
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.store.notes(), &["buy milk"]);
    assert!(state.page(Screen::Notes).input_buffer.is_empty());
    press(&mut state, KeyCode::Esc);

    press(&mut state, KeyCode::Char('2'));
    assert_eq!(state.active_screen(), Screen::Tasks);
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "call mom");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.store.tasks().len(), 1);
    assert!(!state.store.tasks()[0].is_checked);

    press(&mut state, KeyCode::Char(' '));
    assert!(state.store.tasks()[0].is_checked);
    assert_eq!(state.message, "Task checked.");

    press(&mut state, KeyCode::Char('3'));
    assert_eq!(state.active_screen(), Screen::Calendar);
    press(&mut state, KeyCode::Char('2'));
    assert_eq!(state.active_screen(), Screen::Tasks);

    assert_eq!(state.store.tasks().len(), 1);
    assert_eq!(state.store.tasks()[0].label, "call mom");
    assert!(state.store.tasks()[0].is_checked);
    assert_eq!(state.store.notes(), &["buy milk"]);
}

#[test]
fn test_empty_input_is_accepted() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('a'));
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.store.notes(), &["", ""]);
}

#[test]
fn test_drafts_are_kept_per_tab() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "half a note");
    press(&mut state, KeyCode::Esc);

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.active_screen(), Screen::Tasks);
    assert!(state.page(Screen::Tasks).input_buffer.is_empty());

    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.active_screen(), Screen::Notes);
    assert_eq!(state.page(Screen::Notes).input_buffer, "half a note");
    assert!(state.store.notes().is_empty());
}

#[test]
fn test_editing_keys_move_cursor_over_unicode() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "café");
    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Home);
    press(&mut state, KeyCode::Char('>'));
    press(&mut state, KeyCode::End);
    press(&mut state, KeyCode::Char('!'));
    assert_eq!(state.page(Screen::Notes).input_buffer, ">caé!");
}

#[test]
fn test_editing_swallows_tab_switch_keys() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "q2");
    assert_eq!(state.active_screen(), Screen::Notes);
    assert_eq!(state.page(Screen::Notes).input_buffer, "q2");
}

#[test]
fn test_escape_walks_back_stack() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('3'));
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.active_screen(), Screen::Notes);

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.active_screen(), Screen::Notes);
    assert_eq!(state.message, "Press q to quit.");
}

#[test]
fn test_quit_keys() {
    let mut state = AppState::default();
    assert_eq!(
        handle_key_event(key(KeyCode::Char('q')), &mut state),
        Some(Action::Quit)
    );
    assert!(!press(&mut state, KeyCode::Char('q')));

    press(&mut state, KeyCode::Char('a'));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(handle_key_event(ctrl_c, &mut state), Some(Action::Quit));
}

#[test]
fn test_calendar_has_no_input() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('3'));
    press(&mut state, KeyCode::Char('a'));
    assert_eq!(state.mode, InputMode::Normal);
    assert!(state.message.contains("Nothing to add"));
}

#[test]
fn test_toggle_with_nothing_selected() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.message, "No task selected.");
}

#[test]
fn test_stale_task_id_is_reported_not_applied() {
    let mut state = AppState::default();
    let mut other = tabnote::store::StateStore::new();
    let foreign = other.add_task("elsewhere");

    assert!(apply_action(&mut state, Action::SetTaskChecked(foreign, true)));
    assert!(state.message.starts_with("Error:"));
    assert!(state.store.tasks().is_empty());
}

#[test]
fn test_selection_moves_and_wraps() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('2'));
    for label in ["one", "two", "three"] {
        apply_action(&mut state, Action::AddTask(label.to_string()));
    }
    // The newest task is selected after adding.
    assert_eq!(state.selected_task().unwrap().label, "three");

    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.selected_task().unwrap().label, "one");
    press(&mut state, KeyCode::Char('k'));
    assert_eq!(state.selected_task().unwrap().label, "three");
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Char('x'));
    assert!(state.store.tasks()[1].is_checked);
}

#[test]
fn test_render_shows_lists_per_tab() {
    let mut state = AppState::default();
    apply_action(&mut state, Action::AddNote("buy milk".to_string()));
    apply_action(&mut state, Action::AddTask("call mom".to_string()));

    let screen = render(&mut state);
    assert!(screen.contains("Notes"));
    assert!(screen.contains("Tasks"));
    assert!(screen.contains("Calendar"));
    assert!(screen.contains("buy milk"));
    assert!(screen.contains("Add a note"));

    apply_action(&mut state, Action::Select(Screen::Tasks));
    let screen = render(&mut state);
    assert!(screen.contains("[ ] call mom"));
    assert!(screen.contains("Add a task"));

    apply_action(&mut state, Action::Select(Screen::Calendar));
    let screen = render(&mut state);
    assert!(!screen.contains("call mom"));
    assert!(screen.contains("Week"));
}

#[test]
fn test_config_drives_initial_state() {
    let cfg = Config {
        start_screen: Screen::Calendar,
        show_help_on_start: true,
        ..Config::default()
    };
    let mut state = AppState::new(&cfg);
    assert_eq!(state.active_screen(), Screen::Calendar);
    assert!(state.show_full_help);

    let screen = render(&mut state);
    assert!(screen.contains("Help"));
}

#[test]
fn test_active_tab_label_is_highlighted() {
    let mut state = AppState::default();
    apply_action(&mut state, Action::Select(Screen::Tasks));
    let buffer = render_buffer(&mut state);

    // The tab bar is the bottom three rows; labels sit on the middle one.
    let label_row = buffer.area.height - 2;
    let tasks_x = find_in_row(&buffer, label_row, "Tasks").unwrap();
    let notes_x = find_in_row(&buffer, label_row, "Notes").unwrap();

    let active = &buffer[(tasks_x, label_row)];
    assert_eq!(active.fg, Color::Yellow);
    assert!(active.modifier.contains(Modifier::BOLD));

    let inactive = &buffer[(notes_x, label_row)];
    assert_eq!(inactive.fg, Color::Gray);
    assert!(!inactive.modifier.contains(Modifier::BOLD));
}

#[test]
fn test_long_draft_scrolls_to_cursor() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, &"x".repeat(150));
    type_text(&mut state, "END");

    let screen = render(&mut state);
    assert!(screen.contains("xEND"));
}

#[test]
fn test_enter_opens_input_on_empty_task_list() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.mode, InputMode::Editing);

    type_text(&mut state, "first");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.store.tasks().len(), 1);

    // Once a task is selected, Enter toggles it again.
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.mode, InputMode::Normal);
    assert!(state.store.tasks()[0].is_checked);
}
