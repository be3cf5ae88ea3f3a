//! The command-line front end for the nanopack build engine.
//!
//! An unordered argument list is turned into exactly one of three typed
//! configurations (build, transform, serve), then the engine is invoked with
//! it. Binding is a single left-to-right pass; the first invalid flag aborts
//! the whole parse and nothing reaches the engine.

mod flags;
mod hints;
mod logger;
mod parse;
mod run;
mod serve;
mod targets;

pub use crate::parse::{Mode, parse_build_options, parse_transform_options, select_mode};
pub use crate::run::run;
pub use crate::serve::parse_serve_options;
