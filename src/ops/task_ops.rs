use crate::model::{Filter, Intent, Task, TaskId, TodoState};

// ---------------------------------------------------------------------------
// Command handlers
//
// Every handler is total: unknown ids and blank drafts are no-ops.
// ---------------------------------------------------------------------------

/// Replace the draft verbatim (whitespace included)
pub fn set_draft(state: &mut TodoState, text: String) {
    state.draft = text;
}

/// Append the draft as a new task and clear the draft.
/// Returns the new task's ID, or `None` if the trimmed draft is empty.
pub fn add_task(state: &mut TodoState) -> Option<TaskId> {
    if state.draft.trim().is_empty() {
        return None;
    }
    let id = state.next_task_id();
    let text = std::mem::take(&mut state.draft);
    state.tasks.push(Task::new(id, text));
    Some(id)
}

/// Replace the task with a copy whose `completed` is negated.
/// Returns false if no task has this ID.
pub fn toggle_task(state: &mut TodoState, id: TaskId) -> bool {
    match state.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            *task = task.toggled();
            true
        }
        None => false,
    }
}

/// Remove the task with this ID. Returns false if there was none.
pub fn delete_task(state: &mut TodoState, id: TaskId) -> bool {
    match state.tasks.iter().position(|t| t.id == id) {
        Some(idx) => {
            state.tasks.remove(idx);
            true
        }
        None => false,
    }
}

/// Remove every completed task, keeping the order of the rest.
/// Returns the number of tasks removed.
pub fn clear_completed(state: &mut TodoState) -> usize {
    let before = state.tasks.len();
    state.tasks.retain(|t| !t.completed);
    before - state.tasks.len()
}

pub fn set_filter(state: &mut TodoState, filter: Filter) {
    state.filter = filter;
}

/// Run the handler for `intent`. Returns whether the state changed.
pub fn apply(state: &mut TodoState, intent: &Intent) -> bool {
    match intent {
        Intent::SetDraft(text) => {
            let changed = state.draft != *text;
            set_draft(state, text.clone());
            changed
        }
        Intent::Submit => add_task(state).is_some(),
        Intent::Toggle(id) => toggle_task(state, *id),
        Intent::Delete(id) => delete_task(state, *id),
        Intent::ClearCompleted => clear_completed(state) > 0,
        Intent::SelectFilter(filter) => {
            let changed = state.filter != *filter;
            set_filter(state, *filter);
            changed
        }
    }
}
