//! Category domain entity

/// A named grouping of questions (e.g. "Science")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    /// Display name, stored in the `type` column
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}
