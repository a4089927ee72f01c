pub mod config;
pub mod create;
pub mod note;
