//! Right panel contents and their read/online state

use crate::panel::item::{PanelItem, PanelItemKind};
use indexmap::IndexSet;

/// Everything the right panel lists, plus which contacts are online
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelFeed {
    items: Vec<PanelItem>,
    online_contacts: IndexSet<u32>,
}

impl PanelFeed {
    pub fn new(items: Vec<PanelItem>) -> Self {
        Self {
            items,
            online_contacts: IndexSet::new(),
        }
    }

    pub fn with_online_contacts(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.online_contacts = ids.into_iter().collect();
        self
    }

    /// Items of one kind, in feed order
    pub fn items_of(&self, kind: PanelItemKind) -> impl Iterator<Item = &PanelItem> {
        self.items.iter().filter(move |item| item.kind() == kind)
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_unread()).count()
    }

    /// Mark one notification read; returns false if no such notification exists
    pub fn mark_read(&mut self, id: u32) -> bool {
        let found = self.items.iter_mut().find_map(|item| match item {
            PanelItem::Notification {
                id: item_id,
                is_read,
                ..
            } if *item_id == id => Some(is_read),
            _ => None,
        });
        match found {
            Some(is_read) => {
                *is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            if let PanelItem::Notification { is_read, .. } = item {
                *is_read = true;
            }
        }
    }

    pub fn is_online(&self, contact_id: u32) -> bool {
        self.online_contacts.contains(&contact_id)
    }

    pub fn set_online(&mut self, contact_id: u32, online: bool) {
        if online {
            self.online_contacts.insert(contact_id);
        } else {
            self.online_contacts.shift_remove(&contact_id);
        }
    }

    /// Contacts currently online, in feed order
    pub fn online_contacts(&self) -> impl Iterator<Item = &PanelItem> {
        self.items_of(PanelItemKind::Contact)
            .filter(|item| self.online_contacts.contains(&item.id()))
    }
}
