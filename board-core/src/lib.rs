//! Core of the task board: the column store and everything the views derive
//! from it.

pub mod config;
pub mod draft;
pub mod drag;
pub mod due;
pub mod error;
pub mod list;
pub mod models;
mod seed;
pub mod store;

pub use config::BoardConfig;
pub use draft::{format_date_input, parse_date_input, TaskDraft};
pub use drag::{DragState, DRAG_MIME};
pub use due::DueUrgency;
pub use error::BoardError;
pub use list::{flatten, ListRow, StatusBadge};
pub use models::{Column, NewTask, Task, TaskId, TaskStatus};
pub use store::BoardStore;

pub use mockable::{Clock, DefaultClock};
