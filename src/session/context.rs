//! Dashboard-wide UI state, passed explicitly to whoever renders

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Shell state shared by the sidebar, header and right panel
///
/// Created when the dashboard mounts and handed to rendering code by
/// reference; there is no global instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardContext {
    pub theme: Theme,
    pub sidebar_open: bool,
    pub right_panel_open: bool,
    /// Keys of expanded sidebar menu groups
    pub expanded_menus: IndexSet<String>,
    /// Header search box text
    pub search_text: String,
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sidebar_open: true,
            right_panel_open: true,
            expanded_menus: IndexSet::new(),
            search_text: String::new(),
        }
    }
}

impl DashboardContext {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = ?self.theme, "Theme toggled");
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_right_panel(&mut self) {
        self.right_panel_open = !self.right_panel_open;
    }

    /// Expand or collapse a sidebar menu group; returns whether it is now expanded
    pub fn toggle_menu(&mut self, key: &str) -> bool {
        if self.expanded_menus.shift_remove(key) {
            false
        } else {
            self.expanded_menus.insert(key.to_string());
            true
        }
    }

    pub fn is_menu_expanded(&self, key: &str) -> bool {
        self.expanded_menus.contains(key)
    }

    /// Collapse menus and clear the search box when the user navigates away
    ///
    /// Theme and panel visibility survive navigation.
    pub fn reset_on_navigation(&mut self) {
        self.expanded_menus.clear();
        self.search_text.clear();
    }
}
