//! Top-level screens reachable from the navigation bar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Tasks,
    Directory,
    Settings,
    Help,
}

impl Screen {
    /// Navigation order.
    pub const ALL: [Screen; 4] = [
        Screen::Tasks,
        Screen::Directory,
        Screen::Settings,
        Screen::Help,
    ];

    /// Header title shown while this screen is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Tasks => "My Tasks",
            Self::Directory => "Directory",
            Self::Settings => "Settings",
            Self::Help => "Help",
        }
    }
}
