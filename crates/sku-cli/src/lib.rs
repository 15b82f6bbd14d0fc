//! Library side of the `skufmt` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod types;
