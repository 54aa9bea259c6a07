//! CLI commands

mod blocks;
mod check;
mod format;
mod init;
mod input;

pub use blocks::BlocksCommand;
pub use check::CheckCommand;
pub use format::FormatCommand;
pub use init::InitCommand;
