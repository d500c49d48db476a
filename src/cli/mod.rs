//! CLI command implementations

pub mod catalog;
pub mod listen;
pub mod resolve;
pub mod suggest;
