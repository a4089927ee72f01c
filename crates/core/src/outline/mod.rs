pub mod scan;
pub mod tree;
pub mod types;

// Re-export primary API
pub use scan::{HeadingScan, ScannedHeading, scan_headings};
pub use tree::parse;
pub use types::{HeadingLine, HeadingNode, ROOT_TITLE, is_heading_line};
