#![allow(clippy::module_name_repetitions)]

//! Core engine for writeme: heading-structured note insertion.
//!
//! The pipeline is `outline::parse` -> `placement::select_placement` ->
//! (optional `reword`) -> `insert::insert_note` -> `preview` session. Every
//! stage takes the current document text and returns new values; nothing here
//! touches the notes file itself.

pub mod config;
pub mod insert;
pub mod lines;
pub mod notes;
pub mod outline;
pub mod placement;
pub mod preview;
pub mod reword;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
