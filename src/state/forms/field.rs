//! Form field value objects

/// How a field accepts input and how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text area; Enter inserts a newline
    MultiLine,
    /// Single choice drawn from the product catalog
    Select,
}

/// Identifies one of the entry form's inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    CommunityName,
    Product,
    Reason,
}

impl FieldId {
    /// Fields in display and focus order
    pub const ALL: [FieldId; 4] = [
        FieldId::Email,
        FieldId::CommunityName,
        FieldId::Product,
        FieldId::Reason,
    ];

    pub fn index(self) -> usize {
        match self {
            FieldId::Email => 0,
            FieldId::CommunityName => 1,
            FieldId::Product => 2,
            FieldId::Reason => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub placeholder: String,
    /// Hint drawn under the field
    pub help: Option<String>,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    pub fn new(id: FieldId, label: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            help: None,
            kind,
            value: String::new(),
        }
    }

    /// Attach a help line
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::MultiLine
    }

    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }

    /// Value with one more character, as it would look after a keystroke.
    /// Select fields do not take typed characters.
    pub fn with_char(&self, c: char) -> Option<String> {
        if self.is_select() {
            return None;
        }
        let mut next = self.value.clone();
        next.push(c);
        Some(next)
    }

    /// Value with the last character removed; select fields go back to
    /// the unselected state
    pub fn without_last_char(&self) -> String {
        if self.is_select() {
            return String::new();
        }
        let mut next = self.value.clone();
        next.pop();
        next
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Text drawn inside the field box
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}
