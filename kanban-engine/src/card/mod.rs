//! Card lifecycle commands

mod add;
mod archive;
mod delete;
mod flag;
mod purge;
mod unarchive;
mod update;

pub use add::AddCard;
pub use archive::ArchiveCard;
pub use delete::DeleteCard;
pub use flag::FlagCard;
pub use purge::PurgeArchivedCards;
pub use unarchive::UnarchiveCards;
pub use update::UpdateCard;
