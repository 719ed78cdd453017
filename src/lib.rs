//! imgedit: edit images from the command line
//!
//! The interesting part is everything that happens before a pixel is touched:
//!
//! - [`cli`] - permutes raw arguments into flags-then-positionals order, parses them
//! - [`domain`] - option and subcommand registries, per-subcommand validity rules
//! - [`application`] - the dispatcher: arity, lookup, validation, file check, engine call
//! - [`infrastructure`] - filesystem check and the `image`-backed edit engine
//! - [`config`] - layered settings for the engine

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
