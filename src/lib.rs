//! Command-line argument parsing for bootstrapping a native game client.
//!
//! The client receives its entire command line as one raw string. This crate
//! turns that string into an ordered, queryable [`ArgumentTable`] in two passes
//! (a count-only sizing pass, then an extract pass over the same owned buffer)
//! and exposes the flag lookup that startup code branches on. The [`startup`]
//! module maps the recognized flags onto typed [`StartupOptions`].
//!
//! Quoting and escaping follow the client's own rules rather than any shell's:
//! double quotes group spaces into one token, a backslash escapes exactly the
//! next character, and malformed input degrades to fixed tie-breaks instead of
//! failing.

pub mod startup;
pub mod table;
mod tokenizer;

pub use startup::{StartupOptions, VideoMode};
pub use table::{ArgumentMatch, ArgumentTable};
