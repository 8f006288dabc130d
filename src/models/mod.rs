pub mod list;
pub mod task;
pub mod user;

pub use list::{CompletionResponse, ListInput, TaskList};
pub use task::{
    StatusUpdate, Task, TaskFilter, TaskInput, TaskPriority, TaskProgress, TaskStatus,
};
pub use user::{User, UserInput};
