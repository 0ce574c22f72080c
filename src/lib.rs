//! Doxygen comment synthesis — parse an existing comment block, derive the
//! missing pieces from the function signature, and re-render one
//! consistently formatted block.
//!
//! The core is editor-agnostic: the host supplies the current indentation, a
//! [`model::FunctionSignature`] view and the raw existing comment text (empty
//! if none), and receives the full block as a string with `\r\n` separators.
//! See [`render::render`] for the entry point and [`sig::parse`] for the
//! host-side declaration extractor used by the CLI.

pub mod abbrev;
pub mod config;
pub mod generator;
pub mod model;
pub mod parser;
pub mod render;
pub mod sig;
pub mod words;
