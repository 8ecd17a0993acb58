//! The fixed set of applications the shell can launch.
use super::Size;
use crate::errors::DeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Chatbot,
    Creator,
    FileExplorer,
    Browser,
    Settings,
    Writer,
    Converter,
    Calculator,
    Monitor,
    RecycleBin,
    Memory,
}

impl AppId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AppId::Chatbot => "chatbot",
            AppId::Creator => "creator",
            AppId::FileExplorer => "file_explorer",
            AppId::Browser => "browser",
            AppId::Settings => "settings",
            AppId::Writer => "writer",
            AppId::Converter => "converter",
            AppId::Calculator => "calculator",
            AppId::Monitor => "monitor",
            AppId::RecycleBin => "recycle_bin",
            AppId::Memory => "memory",
        }
    }

    /// Static configuration for this application.
    #[must_use]
    pub fn config(self) -> &'static AppConfig {
        APPS.iter()
            .find(|app| app.id == self)
            .expect("every AppId has an entry in APPS; qed")
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        APPS.iter()
            .map(|app| app.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DeskError::UnknownApp(s.to_owned()))
    }
}

/// Display name, icon and default geometry of an application.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    pub id: AppId,
    pub name: &'static str,
    /// Icon key understood by the renderer.
    pub icon: &'static str,
    pub default_size: Size,
    pub description: &'static str,
}

/// All applications in taskbar order.
pub static APPS: [AppConfig; 11] = [
    AppConfig {
        id: AppId::Chatbot,
        name: "AI powered chatbot",
        icon: "bot",
        default_size: Size::new(500.0, 650.0),
        description: "AI Assistant",
    },
    AppConfig {
        id: AppId::Creator,
        name: "Creator.app",
        icon: "pen-tool",
        default_size: Size::new(900.0, 700.0),
        description: "About the studio",
    },
    AppConfig {
        id: AppId::FileExplorer,
        name: "File Explorer",
        icon: "folder-open",
        default_size: Size::new(800.0, 550.0),
        description: "Browse local files",
    },
    AppConfig {
        id: AppId::Browser,
        name: "Browser",
        icon: "globe",
        default_size: Size::new(900.0, 650.0),
        description: "Web Browser",
    },
    AppConfig {
        id: AppId::Settings,
        name: "Settings",
        icon: "settings",
        default_size: Size::new(800.0, 600.0),
        description: "System Preferences",
    },
    AppConfig {
        id: AppId::Writer,
        name: "Writer.app",
        icon: "file-text",
        default_size: Size::new(800.0, 600.0),
        description: "Text Editor",
    },
    AppConfig {
        id: AppId::Converter,
        name: "Converter.app",
        icon: "image",
        default_size: Size::new(700.0, 500.0),
        description: "Image to PDF Utility",
    },
    AppConfig {
        id: AppId::Calculator,
        name: "Calculator",
        icon: "calculator",
        default_size: Size::new(320.0, 480.0),
        description: "Standard Calculator",
    },
    AppConfig {
        id: AppId::Monitor,
        name: "Monitor.app",
        icon: "activity",
        default_size: Size::new(500.0, 400.0),
        description: "System Resources",
    },
    AppConfig {
        id: AppId::RecycleBin,
        name: "Recycle Bin",
        icon: "trash",
        default_size: Size::new(600.0, 400.0),
        description: "Deleted Files",
    },
    AppConfig {
        id: AppId::Memory,
        name: "Memory.app",
        icon: "hard-drive",
        default_size: Size::new(300.0, 200.0),
        description: "State Persistence",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_id_round_trips_through_its_name() {
        for app in &APPS {
            assert_eq!(AppId::from_str(app.id.as_str()).unwrap(), app.id);
            assert_eq!(app.id.config().id, app.id);
        }
    }

    #[test]
    fn unknown_app_names_are_rejected() {
        assert!(matches!(
            AppId::from_str("solitaire"),
            Err(DeskError::UnknownApp(name)) if name == "solitaire"
        ));
    }

    #[test]
    fn serde_names_match_display_names() {
        let json = serde_json::to_string(&AppId::FileExplorer).unwrap();
        assert_eq!(json, format!("\"{}\"", AppId::FileExplorer));
    }
}
