//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod convert;
mod deref;
mod resolve;
mod utils;

pub use completions::handle_completions;
pub use convert::handle_convert;
pub use deref::handle_deref;
pub use resolve::handle_resolve;
