//! Academy catalog library exports

pub mod breadcrumb;
pub mod catalog;
pub mod config;
pub mod error;
pub mod slug;
pub mod source;

pub use error::ParseError;
