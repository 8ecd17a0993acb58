//! Various shared functions that glassdesk uses.
pub mod command_pipe;
