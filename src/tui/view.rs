// File: src/tui/view.rs
use crate::navigation::Screen;
use crate::tui::state::{AppState, InputMode};

use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" 1-3:Jump to tab  Tab/Shift-Tab:Next/Prev tab  Esc:Back  ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " LISTS ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Down/Up  a:Add  Space:Check/Uncheck task"),
        ]),
        Line::from(vec![
            Span::styled(
                " INPUT ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Enter:Add  Esc:Leave field (draft is kept)  Home/End:Jump"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height, Constraint::Length(3)])
        .split(f.area());

    let screen = state.active_screen();
    match screen {
        Screen::Notes | Screen::Tasks => draw_list_page(f, state, screen, v_chunks[0]),
        Screen::Calendar => draw_calendar_page(f, v_chunks[0]),
    }

    // Footer
    let footer_area = v_chunks[1];
    f.render_widget(Clear, footer_area);
    if state.show_full_help {
        let p = Paragraph::new(full_help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "))
            .wrap(Wrap { trim: false });
        f.render_widget(p, footer_area);
    } else {
        let status = Paragraph::new(state.message.clone())
            .style(Style::default().fg(Color::Cyan))
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                    .title(" Status "),
            );
        let help_str = match (state.mode, screen) {
            (InputMode::Editing, _) => "Enter:Add Esc:Done",
            (InputMode::Normal, Screen::Tasks) => "?:Help q:Quit Tab:Next a:Add Spc:Check",
            (InputMode::Normal, Screen::Notes) => "?:Help q:Quit Tab:Next a:Add",
            (InputMode::Normal, Screen::Calendar) => "?:Help q:Quit Tab:Next Esc:Back",
        };
        let help = Paragraph::new(help_str).alignment(Alignment::Right).block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(footer_area);
        f.render_widget(status, chunks[0]);
        f.render_widget(help, chunks[1]);
    }

    draw_tab_bar(f, state, v_chunks[2]);
}

fn draw_list_page(f: &mut Frame, state: &mut AppState, screen: Screen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let title = format!(" {} {} ", screen.icon(), screen.title());
    let list_block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = match screen {
        Screen::Tasks => state
            .store
            .tasks()
            .iter()
            .map(|t| {
                let style = if t.is_checked {
                    let s = Style::default().fg(Color::DarkGray);
                    if state.strikethrough_checked {
                        s.add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        s
                    }
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", t.checkbox())),
                    Span::styled(t.label.clone(), style),
                ]))
            })
            .collect(),
        _ => state
            .store
            .notes()
            .iter()
            .map(|n| ListItem::new(Line::from(n.clone())))
            .collect(),
    };

    if items.is_empty() {
        let hint = match screen {
            Screen::Tasks => "No tasks yet. Press 'a' to add one.",
            _ => "No notes yet. Press 'a' to add one.",
        };
        let p = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(list_block);
        f.render_widget(p, chunks[0]);
    } else {
        let list = List::new(items)
            .block(list_block)
            .highlight_style(Style::default().bg(Color::Blue))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], &mut state.page_mut(screen).list_state);
    }

    // Input field
    let editing = state.mode == InputMode::Editing;
    let label = match screen {
        Screen::Tasks => " Add a task ",
        _ => " Add a note ",
    };
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let page = state.page(screen);
    let input_area = chunks[1];
    let (scroll_x, cursor_offset) = input_viewport(
        &page.input_buffer,
        page.cursor_position,
        input_area.width.saturating_sub(2),
    );
    let input = Paragraph::new(page.input_buffer.as_str())
        .scroll((0, scroll_x))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label),
        );
    f.render_widget(input, input_area);

    if editing {
        f.set_cursor_position((
            input_area.x.saturating_add(1).saturating_add(cursor_offset),
            input_area.y.saturating_add(1),
        ));
    }
}

/// Horizontal scroll and cursor column for a single-line field `inner_width`
/// cells wide. The cursor always stays inside the field.
pub fn input_viewport(text: &str, cursor_position: usize, inner_width: u16) -> (u16, u16) {
    let before_cursor: String = text.chars().take(cursor_position).collect();
    let cursor_col = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
    let last_col = inner_width.saturating_sub(1);
    let scroll_x = cursor_col.saturating_sub(last_col);
    (scroll_x, cursor_col - scroll_x)
}

fn draw_calendar_page(f: &mut Frame, area: Rect) {
    let today = Local::now().date_naive();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Calendar",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(today.format("%A, %B %-d %Y").to_string()),
        Line::from(Span::styled(
            format!("Week {} of {}", today.iso_week().week(), today.year()),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let title = format!(" {} {} ", Screen::Calendar.icon(), Screen::Calendar.title());
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(p, area);
}

fn draw_tab_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let screens = Screen::all();
    let constraints: Vec<Constraint> = screens
        .iter()
        .map(|_| Constraint::Ratio(1, screens.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, screen) in screens.iter().enumerate() {
        let selected = state.nav.is_active(*screen);
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label = Line::from(vec![
            Span::styled(format!("{} ", screen.icon()), style),
            Span::styled(screen.title(), style),
            Span::styled(format!(" [{}]", i + 1), Style::default().fg(Color::DarkGray)),
        ]);
        let tab = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(tab, chunks[i]);
    }
}
