//! Right panel feed: notifications, activities and contacts

pub mod feed;
pub mod item;

pub use feed::PanelFeed;
pub use item::{PanelItem, PanelItemKind};
