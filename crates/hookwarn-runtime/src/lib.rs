//! hookwarn runtime: CLI, bootstrap, and daemon lifecycle for the
//! warning-banner poller.

pub mod bootstrap;
pub mod cli;
pub mod cmd_check;
pub mod daemon;
