//! Root application state

use crate::state::{HistoryState, InputState, SearchState};
use crate::theme::Theme;
use gh_search_config::AppConfig;

/// Terminal geometry and the derived layout mode
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub width: u16,
    pub height: u16,
    /// Minimum width for the wide list+detail layout
    pub wide_min_width: u16,
    /// Config override for the end-of-results presentation
    pub eol_as_error_override: Option<bool>,
}

impl LayoutState {
    /// Wide terminals get a list+detail split, narrow ones a plain list.
    pub fn is_wide(&self) -> bool {
        self.width >= self.wide_min_width
    }

    /// Whether the end-of-results condition is presented as an error
    /// banner (wide layout) or a sentinel list row (narrow layout),
    /// unless the config says otherwise.
    pub fn eol_as_error(&self) -> bool {
        self.eol_as_error_override.unwrap_or_else(|| self.is_wide())
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            wide_min_width: 110,
            eol_as_error_override: None,
        }
    }
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub running: bool,
    pub layout: LayoutState,
    pub search: SearchState,
    pub input: InputState,
    pub history: HistoryState,
    pub theme: Theme,
    /// Animation frame counter, advanced by ticks
    pub tick: usize,
}

impl AppState {
    /// Initial state for the given config and terminal size
    pub fn new(config: &AppConfig, width: u16, height: u16) -> Self {
        Self {
            running: true,
            layout: LayoutState {
                width,
                height,
                wide_min_width: config.wide_layout_min_width,
                eol_as_error_override: config.end_of_list_as_error,
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wide_threshold() {
        let mut layout = LayoutState {
            width: 109,
            ..LayoutState::default()
        };
        assert!(!layout.is_wide());

        layout.width = 110;
        assert!(layout.is_wide());
    }

    #[test]
    fn test_eol_presentation_follows_layout() {
        let layout = LayoutState {
            width: 140,
            ..LayoutState::default()
        };
        assert!(layout.eol_as_error());

        let narrow = LayoutState {
            width: 80,
            ..LayoutState::default()
        };
        assert!(!narrow.eol_as_error());
    }

    #[test]
    fn test_eol_presentation_config_override() {
        let layout = LayoutState {
            width: 140,
            eol_as_error_override: Some(false),
            ..LayoutState::default()
        };
        assert!(!layout.eol_as_error());
    }

    #[test]
    fn test_new_applies_config() {
        let config = AppConfig {
            wide_layout_min_width: 95,
            ..AppConfig::default()
        };
        let state = AppState::new(&config, 100, 30);
        assert!(state.running);
        assert!(state.layout.is_wide());
    }
}
