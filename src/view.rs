//! Render step: turns a user collection into the list shown to the user.

use crate::types::{Layout, User};

/// One rendered line, keyed by the record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub key: String,
    pub text: String,
}

/// The whole display area. Always rebuilt from scratch, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    items: Vec<ListItem>,
}

impl ListView {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ListItem> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|item| item.text.as_str())
    }
}

/// Build the next view from `users`. The previous view is consumed; nothing
/// from it survives into the result.
pub fn render(_previous: ListView, users: &[User], layout: Layout) -> ListView {
    ListView {
        items: users.iter().map(|user| item(user, layout)).collect(),
    }
}

fn item(user: &User, layout: Layout) -> ListItem {
    let key = user.id.to_string();
    let extra = match layout {
        Layout::Age => user.edad.as_ref(),
        Layout::City => user.ciudad.as_ref(),
    }
    .map(|value| value.to_string());

    let mut text = format!("{key} {}", user.nombre);
    if let Some(extra) = extra.filter(|s| !s.is_empty()) {
        text.push(' ');
        text.push_str(&extra);
    }

    ListItem { key, text }
}
