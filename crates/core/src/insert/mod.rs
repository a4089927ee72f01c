pub mod inserter;
pub mod note;
pub mod types;
pub mod window;

// Re-export primary API
pub use inserter::{InsertPoint, Section, commit, insert_note, locate_section, plan_insertion};
pub use note::normalize_note;
pub use types::{BulletMarker, InsertResult};
pub use window::{CONTEXT_LINES, PreviewWindow};
