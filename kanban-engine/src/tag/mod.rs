//! Tag registry commands

mod add;
mod delete;
mod update;

pub use add::AddTag;
pub use delete::DeleteTag;
pub use update::UpdateTag;
