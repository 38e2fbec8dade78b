use serde::Serialize;

/// Result of one collaborator call inside a snapshot.
///
/// Keeps "the provider had nothing" apart from "the request failed", so a
/// renderer can print a placeholder for one and the cause for the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Available(T),
    Empty,
    Failed(String),
}

impl<T> Section<T> {
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Available)
    }

    pub fn failed(reason: impl ToString) -> Self {
        Self::Failed(reason.to_string())
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Self::Available(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> Section<Vec<T>> {
    /// An empty vector becomes [`Section::Empty`].
    pub fn from_vec(values: Vec<T>) -> Self {
        if values.is_empty() {
            Self::Empty
        } else {
            Self::Available(values)
        }
    }
}
