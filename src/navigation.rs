// File: ./src/navigation.rs
// Screens, routes and the tab back stack.
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, EnumCount,
)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Notes,
    Tasks,
    Calendar,
}

impl Screen {
    pub fn route(self) -> &'static str {
        match self {
            Screen::Notes => "notes",
            Screen::Tasks => "tasks",
            Screen::Calendar => "calendar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Notes => "Notes",
            Screen::Tasks => "Tasks",
            Screen::Calendar => "Calendar",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Notes => "☰",
            Screen::Tasks => "✓",
            Screen::Calendar => "▦",
        }
    }

    /// Resolves a route, ignoring any `?query` suffix and nested segments.
    pub fn from_route(route: &str) -> Option<Screen> {
        Screen::iter().find(|s| route_matches(route, s.route()))
    }

    /// Tab bar order.
    pub fn all() -> Vec<Screen> {
        Screen::iter().collect()
    }

    pub fn next(self) -> Screen {
        let all = Self::all();
        let pos = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    pub fn previous(self) -> Screen {
        let all = Self::all();
        let pos = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Strips a `?query` suffix: `"tasks?x=1"` -> `"tasks"`.
pub fn normalize_route(route: &str) -> &str {
    route.split_once('?').map_or(route, |(path, _)| path)
}

/// True when `current` is `declared` or nested below it (`"tasks/detail"`).
pub fn route_matches(current: &str, declared: &str) -> bool {
    let current = normalize_route(current);
    match current.strip_prefix(declared) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Tracks the active tab as a back stack of raw routes.
///
/// The start destination always sits at the bottom. Selecting a tab pops back
/// to it and pushes the target on top, unless the target is already there.
#[derive(Debug, Clone)]
pub struct NavController {
    start: Screen,
    back_stack: Vec<String>,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(Screen::Notes)
    }
}

impl NavController {
    pub fn new(start: Screen) -> Self {
        Self {
            start,
            back_stack: vec![start.route().to_string()],
        }
    }

    pub fn start_destination(&self) -> Screen {
        self.start
    }

    /// The raw route on top of the stack, query included.
    pub fn current_route(&self) -> &str {
        self.back_stack
            .last()
            .map(String::as_str)
            .unwrap_or(self.start.route())
    }

    pub fn current(&self) -> Screen {
        Screen::from_route(self.current_route()).unwrap_or(self.start)
    }

    pub fn back_stack(&self) -> &[String] {
        &self.back_stack
    }

    pub fn select(&mut self, screen: Screen) {
        self.push_route(screen, screen.route().to_string());
    }

    /// Navigates by route string. Unknown routes are rejected.
    pub fn navigate_route(&mut self, route: &str) -> Result<Screen> {
        let screen =
            Screen::from_route(route).ok_or_else(|| anyhow!("Unknown route '{}'", route))?;
        self.push_route(screen, route.to_string());
        Ok(screen)
    }

    /// Single-top is decided per screen, not per raw route: re-entering the
    /// screen on top only swaps its route (new query), the start entry is never
    /// duplicated.
    fn push_route(&mut self, screen: Screen, route: String) {
        if screen == self.start {
            self.back_stack.truncate(1);
        } else if screen == self.current() {
            if let Some(top) = self.back_stack.last_mut() {
                *top = route;
            }
        } else {
            self.back_stack.truncate(1);
            self.back_stack.push(route);
        }
        log::debug!("Navigated to '{}'", self.current_route());
    }

    /// Pops one entry. Returns `false` when already at the start destination.
    pub fn back(&mut self) -> bool {
        if self.back_stack.len() > 1 {
            self.back_stack.pop();
            true
        } else {
            false
        }
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        route_matches(self.current_route(), screen.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_query() {
        assert_eq!(normalize_route("tasks?x=1"), "tasks");
        assert_eq!(normalize_route("tasks"), "tasks");
        assert_eq!(normalize_route("?"), "");
    }

    #[test]
    fn route_prefix_is_not_a_match() {
        assert!(!route_matches("tasksx", "tasks"));
        assert!(route_matches("tasks/detail?id=3", "tasks"));
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(Screen::Calendar.next(), Screen::Notes);
        assert_eq!(Screen::Notes.previous(), Screen::Calendar);
    }
}
