//! HTTP protocol layer module
//!
//! Query-string and response-building helpers, decoupled from the scripted
//! scenario logic.

pub mod query;
pub mod response;
