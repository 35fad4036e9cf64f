pub mod column;
pub mod task;

pub use column::Column;
pub use task::{NewTask, Task, TaskId, TaskStatus};
