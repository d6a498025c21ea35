use crate::types::PlayerId;

/// A participant: identity plus the label presentation shows for them.
///
/// The label is typically a colour name (`"yellow"`, `"#ff8800"`); the engine
/// never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    id: PlayerId,
    label: String,
}

impl Player {
    pub fn new(id: PlayerId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Player name for display, e.g. "Player 1 (yellow)"
    pub fn display_name(&self) -> String {
        if self.label.is_empty() {
            format!("Player {}", self.id.number())
        } else {
            format!("Player {} ({})", self.id.number(), self.label)
        }
    }
}
