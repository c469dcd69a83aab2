//!
//! # ASS drawing engine
//!
//! Maintains an editable vector path described by the ASS drawing command language (`m`, `l`,
//! `b`, `s`, `p`, `c` and the `n` line hint). Text is parsed into a `CommandSequence`, which
//! can be edited (points moved, commands inserted or deleted, the whole path translated or
//! transformed) and then turned back into canonical drawing text.
//!
//! Commands in a sequence are threaded together: every command knows the command before it,
//! and the main point of every command knows the command that follows it. Every structural
//! edit goes through a single connection operation so these two links never disagree.
//!
#![warn(bare_trait_objects)]

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

mod coordinate_system;
mod point;
mod command;
mod sequence;
mod error;
mod parser;
mod generator;
mod path_target;

pub use self::coordinate_system::*;
pub use self::point::*;
pub use self::command::*;
pub use self::sequence::*;
pub use self::error::*;
pub use self::parser::*;
pub use self::generator::*;
pub use self::path_target::*;
