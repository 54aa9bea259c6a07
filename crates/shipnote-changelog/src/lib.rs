//! Shipnote Changelog - deployment notes from promotion pull request bodies
//!
//! This crate parses the "# Changes" list of a bot-generated promotion body,
//! resolves issue tracker links and renders either a flat text summary or a
//! chat block payload.

pub mod formatter;
pub mod generator;
pub mod normalize;
pub mod outcome;
pub mod parser;
pub mod repository;
pub mod resolver;
pub mod structure;
pub mod types;

pub use formatter::{
    Block, BlocksRenderer, Field, FlatRenderer, MessageRenderer, RenderedMessage, RendererRegistry,
};
pub use generator::NotesGenerator;
pub use outcome::{FormatError, Outcome, Severity};
pub use parser::{EntryParser, GrammarParser};
pub use repository::resolve_repository;
pub use resolver::{LinkTable, ReferenceResolver};
pub use types::{ChangeRecord, Counts, MessageContext, Report, ResolvedRecord};
