pub mod kanban;
pub mod list;

pub use kanban::BoardPage;
pub use list::ListPage;
