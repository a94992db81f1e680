//! Library components of the roster import CLI.

pub mod logging;
pub mod pipeline;
