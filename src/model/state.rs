use super::task::{Filter, Task, TaskId};

/// In-memory state of the task list.
///
/// Fields are only writable inside the crate; all mutation goes through the
/// handlers in `ops::task_ops`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub(crate) tasks: Vec<Task>,
    pub(crate) draft: String,
    pub(crate) filter: Filter,
    /// Last id handed out; ids start at 1 and are never reused
    last_id: u64,
}

impl TodoState {
    /// Empty list, empty draft, `Filter::All`
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(crate) fn next_task_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId(self.last_id)
    }
}
