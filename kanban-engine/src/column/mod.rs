//! Column commands

mod update;

pub use update::UpdateColumn;
