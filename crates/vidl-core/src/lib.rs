// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core of vidl: turn annotated C++ declarations into command structs and
//! dispatch code.
//!
//! A declaration preceded by the directive marker
//!
//! ```cpp
//! // VIDL_GENERATE
//! void vhBeginMarker(const std::string& name);
//! ```
//!
//! becomes a message struct tagged with a deterministic magic identifier,
//! plus a handler that routes a message to a per-command method by that tag.
//!
//! # Overview
//!
//! | Stage | Entry point | Module |
//! |-------|-------------|--------|
//! | Find directives | [`scan()`] | [`scan`] |
//! | Parse one declaration | [`parse_declaration`] | [`parse`] |
//! | Keyword-safe names | [`sanitize()`] | [`sanitize`] |
//! | Wire tags | [`magic_for`] | [`magic`] |
//! | C++ header | [`CppEmitter`] | [`emit`] |
//! | Rust items | [`RustEmitter`] | [`emit`] |
//! | Whole source | [`generate`], [`generate_cpp`] | [`pipeline`] |
//!
//! # Usage
//!
//! ```rust
//! use vidl_core::{GeneratorConfig, generate_cpp};
//!
//! let source = "\
//! // VIDL_GENERATE
//! void CmdA(int x);
//! // VIDL_GENERATE
//! void CmdB();
//! ";
//! let header = generate_cpp(source, &GeneratorConfig::default()).unwrap();
//! assert!(header.contains("class VIDLHandler"));
//! assert!(header.contains("Handle_CmdB( (VIDL_CmdB*) cmd );"));
//! ```
//!
//! Most Rust users want the `commands!` macro from the `vidl` crate, which
//! runs this pipeline at compile time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod emit;
pub mod error;
pub mod magic;
pub mod parse;
pub mod pipeline;
pub mod sanitize;
pub mod scan;

pub use config::{DEFAULT_MARKER, GeneratorConfig};
pub use emit::{CppEmitter, Emitter, RustEmitter};
pub use error::{BatchError, EmitError, Error, ParseError, ParseErrorKind};
pub use magic::{hex_literal, magic_for};
pub use parse::{CommandDef, ParamDef, parse_declaration};
pub use pipeline::{Batch, collect, generate, generate_cpp};
pub use sanitize::{is_reserved, sanitize};
pub use scan::{Declaration, scan};
