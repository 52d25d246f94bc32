use crate::model::{Filter, Task, TodoState};

// ---------------------------------------------------------------------------
// Derived values. Recomputed on every render, never stored.
// ---------------------------------------------------------------------------

/// Tasks passing the current filter, in list order
pub fn visible_tasks(state: &TodoState) -> Vec<&Task> {
    let filter = state.filter();
    state.tasks().iter().filter(|t| filter.matches(t)).collect()
}

/// Number of uncompleted tasks in the full list (ignores the filter)
pub fn active_count(state: &TodoState) -> usize {
    state.tasks().iter().filter(|t| !t.completed).count()
}

/// Whether any task is completed; gates "Clear completed"
pub fn has_completed(state: &TodoState) -> bool {
    state.tasks().iter().any(|t| t.completed)
}

/// Label shown in place of an empty visible list
pub fn empty_state_label(state: &TodoState) -> Option<String> {
    if !visible_tasks(state).is_empty() {
        return None;
    }
    Some(empty_label_for(state.filter()))
}

fn empty_label_for(filter: Filter) -> String {
    match filter {
        Filter::All => "No tasks yet".to_string(),
        other => format!("No tasks {}", other.name()),
    }
}

/// "1 item left", "3 items left"
pub fn items_left_label(active_count: usize) -> String {
    let noun = if active_count == 1 { "item" } else { "items" };
    format!("{} {} left", active_count, noun)
}

/// Everything a renderer needs, derived from one state snapshot
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    pub visible: Vec<&'a Task>,
    pub filter: Filter,
    pub draft: &'a str,
    pub total: usize,
    pub active_count: usize,
    pub has_completed: bool,
    pub empty_label: Option<String>,
}

impl<'a> Projection<'a> {
    pub fn new(state: &'a TodoState) -> Self {
        let visible = visible_tasks(state);
        let empty_label = visible
            .is_empty()
            .then(|| empty_label_for(state.filter()));
        Projection {
            visible,
            filter: state.filter(),
            draft: state.draft(),
            total: state.tasks().len(),
            active_count: active_count(state),
            has_completed: has_completed(state),
            empty_label,
        }
    }

    /// The footer is hidden while the list is empty
    pub fn show_footer(&self) -> bool {
        self.total > 0
    }

    pub fn items_left(&self) -> String {
        items_left_label(self.active_count)
    }
}
