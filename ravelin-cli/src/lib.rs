//! Library surface of the ravelin CLI, split out so integration tests can
//! drive command execution without spawning a process.

pub mod cli;
pub mod logging;
