use serde::Serialize;

use crate::model::{Filter, Task, TaskId};
use crate::ops::Projection;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ViewJson {
    pub filter: Filter,
    pub draft: String,
    pub tasks: Vec<TaskJson>,
    pub total: usize,
    pub active_count: usize,
    pub items_left: String,
    pub has_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_label: Option<String>,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        completed: task.completed,
    }
}

pub fn view_to_json(view: &Projection) -> ViewJson {
    ViewJson {
        filter: view.filter,
        draft: view.draft.to_string(),
        tasks: view.visible.iter().map(|t| task_to_json(t)).collect(),
        total: view.total,
        active_count: view.active_count,
        items_left: view.items_left(),
        has_completed: view.has_completed,
        empty_label: view.empty_label.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary: `[x] 3 Buy milk`
pub fn format_task_line(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    format!("[{}] {} {}", check, task.id, task.text)
}

/// Format the whole projected view, one line per entry
pub fn format_view(view: &Projection) -> Vec<String> {
    let mut lines = vec![format!("filter: {}", view.filter)];
    if !view.draft.is_empty() {
        lines.push(format!("draft: {:?}", view.draft));
    }

    match &view.empty_label {
        Some(label) => lines.push(label.clone()),
        None => lines.extend(view.visible.iter().map(|t| format_task_line(t))),
    }

    if view.show_footer() {
        let mut footer = view.items_left();
        if view.has_completed {
            footer.push_str("  (clear completed)");
        }
        lines.push(footer);
    }
    lines
}
