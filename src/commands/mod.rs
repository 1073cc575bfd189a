//! CLI commands for graphws

pub mod analyze;
pub mod dispatch;
pub mod dump;
pub mod inspect;
pub mod render;
pub mod shell;
