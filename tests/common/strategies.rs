//! Proptest strategies for task list operation sequences.

use proptest::prelude::*;

/// One user action against the task list
///
/// Toggle and delete address an existing task by position (modulo the list
/// length at the time) or a task id that was never issued.
#[derive(Debug, Clone)]
pub enum TaskOp {
    Add(String),
    Toggle(usize),
    Delete(usize),
    ToggleMissing,
    DeleteMissing,
}

pub fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,23}"
}

pub fn blank_title_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

pub fn task_op_strategy() -> impl Strategy<Value = TaskOp> {
    prop_oneof![
        3 => title_strategy().prop_map(TaskOp::Add),
        2 => any::<usize>().prop_map(TaskOp::Toggle),
        2 => any::<usize>().prop_map(TaskOp::Delete),
        1 => Just(TaskOp::ToggleMissing),
        1 => Just(TaskOp::DeleteMissing),
    ]
}

pub fn task_ops_strategy() -> impl Strategy<Value = Vec<TaskOp>> {
    prop::collection::vec(task_op_strategy(), 0..24)
}
