//! SQL for the carbrands table.

mod statements;
pub use statements::*;
