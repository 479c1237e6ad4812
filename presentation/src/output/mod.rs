//! Output formatting for tool results

pub mod console;
