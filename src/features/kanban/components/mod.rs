pub mod header;
pub mod column;
pub mod task_card;

pub use header::KanbanHeader;
pub use column::KanbanColumn;
pub use task_card::TaskCard;
