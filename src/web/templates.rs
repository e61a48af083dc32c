//! Askama template definitions for the HTML pages.
//!
//! Template files live in `templates/` at the crate root; `.html` templates
//! are HTML-escaped automatically.

use askama::Template;

use crate::tasks::Task;

/// Task list page for the task service
#[derive(Template, Debug)]
#[template(path = "tasks/index.html")]
pub struct TaskListTemplate<'a> {
    pub tasks: &'a [Task],
    pub completed_count: usize,
}

impl<'a> TaskListTemplate<'a> {
    pub fn new(tasks: &'a [Task]) -> Self {
        Self {
            tasks,
            completed_count: tasks.iter().filter(|task| task.completed).count(),
        }
    }
}

/// Landing page for the hello service
#[derive(Template, Debug)]
#[template(path = "hello/index.html")]
pub struct HelloTemplate<'a> {
    pub hostname: &'a str,
    pub version: &'a str,
}
