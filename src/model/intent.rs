use std::fmt;

use super::task::{Filter, TaskId};

/// A recognized user action, the unit of dispatch into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the draft text
    SetDraft(String),
    /// Turn the draft into a new task
    Submit,
    Toggle(TaskId),
    Delete(TaskId),
    ClearCompleted,
    SelectFilter(Filter),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::SetDraft(text) => write!(f, "draft {:?}", text),
            Intent::Submit => write!(f, "submit"),
            Intent::Toggle(id) => write!(f, "toggle {}", id),
            Intent::Delete(id) => write!(f, "delete {}", id),
            Intent::ClearCompleted => write!(f, "clear"),
            Intent::SelectFilter(filter) => write!(f, "filter {}", filter),
        }
    }
}
