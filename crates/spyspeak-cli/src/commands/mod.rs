//! Command handlers.
//!
//! Each submodule implements one subcommand: translate CLI arguments into
//! core calls, then display results.  No business logic lives here.

pub mod completions;
pub mod favorites;
pub mod generate;
#[cfg(feature = "interactive")]
pub mod interactive;
pub mod serve;
pub mod themes;
