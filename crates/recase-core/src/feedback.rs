// Recase Feedback
// Launcher-facing result items for interactive selection

use serde::Serialize;

use crate::Transformation;

/// Icon shown next to every result item unless configured otherwise
pub const DEFAULT_ICON_PATH: &str = "icon.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub path: String,
}

/// One transformation's output paired with its display metadata.
///
/// `title` and `arg` both carry the transformed text: `title` is what the
/// launcher shows, `arg` is what it passes on when the item is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
    pub valid: bool,
    pub uid: String,
    pub icon: Icon,
    pub arg: String,
}

impl ResultItem {
    pub fn new(transformation: Transformation, text: String, icon_path: &str) -> Self {
        let label = transformation.label();
        Self {
            title: text.clone(),
            subtitle: label.to_string(),
            valid: true,
            uid: uid_for_label(label),
            icon: Icon {
                path: icon_path.to_string(),
            },
            arg: text,
        }
    }
}

/// Ordered result items, serialized as `{"items": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Stable item identifier: the label lowercased with spaces replaced by `_`.
///
/// ```
/// use recase_core::feedback::uid_for_label;
/// assert_eq!(uid_for_label("Add Line Breaks to List"), "add_line_breaks_to_list");
/// ```
pub fn uid_for_label(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}
