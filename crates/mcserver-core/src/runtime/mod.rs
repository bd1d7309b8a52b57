//! External programs
//!
//! This module provides:
//! - Detection of java and curl
//! - The process port used by workflows, and its tokio implementation

pub mod check;
pub mod process;

pub use check::{check_curl, check_java, check_tools, RuntimeInfo};
pub use process::{CommandRunner, CommandSpec, OutputMode, SystemRunner};
