//! Items listed in the right panel
//!
//! Notifications, activities and contacts share one list component. The kind
//! is an explicit discriminant fixed when the item is built, so renderers
//! match on it instead of probing for fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`PanelItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelItemKind {
    Notification,
    Activity,
    Contact,
}

impl fmt::Display for PanelItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelItemKind::Notification => write!(f, "notification"),
            PanelItemKind::Activity => write!(f, "activity"),
            PanelItemKind::Contact => write!(f, "contact"),
        }
    }
}

/// One entry of the right panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelItem {
    /// A system notification with an icon badge
    Notification {
        id: u32,
        icon: String,
        icon_bg: String,
        title: String,
        time: String,
        #[serde(default)]
        is_read: bool,
    },
    /// Something a teammate did
    Activity {
        id: u32,
        avatar: String,
        title: String,
        time: String,
    },
    /// A person in the contact list
    Contact { id: u32, avatar: String, name: String },
}

impl PanelItem {
    pub fn notification(
        id: u32,
        icon: impl Into<String>,
        icon_bg: impl Into<String>,
        title: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        PanelItem::Notification {
            id,
            icon: icon.into(),
            icon_bg: icon_bg.into(),
            title: title.into(),
            time: time.into(),
            is_read: false,
        }
    }

    pub fn activity(
        id: u32,
        avatar: impl Into<String>,
        title: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        PanelItem::Activity {
            id,
            avatar: avatar.into(),
            title: title.into(),
            time: time.into(),
        }
    }

    pub fn contact(id: u32, avatar: impl Into<String>, name: impl Into<String>) -> Self {
        PanelItem::Contact {
            id,
            avatar: avatar.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            PanelItem::Notification { id, .. }
            | PanelItem::Activity { id, .. }
            | PanelItem::Contact { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> PanelItemKind {
        match self {
            PanelItem::Notification { .. } => PanelItemKind::Notification,
            PanelItem::Activity { .. } => PanelItemKind::Activity,
            PanelItem::Contact { .. } => PanelItemKind::Contact,
        }
    }

    /// Main line of text: the title, or the contact's name
    pub fn primary_text(&self) -> &str {
        match self {
            PanelItem::Notification { title, .. } | PanelItem::Activity { title, .. } => title,
            PanelItem::Contact { name, .. } => name,
        }
    }

    /// Icon or avatar reference
    pub fn image(&self) -> &str {
        match self {
            PanelItem::Notification { icon, .. } => icon,
            PanelItem::Activity { avatar, .. } | PanelItem::Contact { avatar, .. } => avatar,
        }
    }

    /// Timestamp line; contacts have none
    pub fn time(&self) -> Option<&str> {
        match self {
            PanelItem::Notification { time, .. } | PanelItem::Activity { time, .. } => Some(time),
            PanelItem::Contact { .. } => None,
        }
    }

    /// Unread notifications only; other kinds are never unread
    pub fn is_unread(&self) -> bool {
        matches!(self, PanelItem::Notification { is_read: false, .. })
    }
}
