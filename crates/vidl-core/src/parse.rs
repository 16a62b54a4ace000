// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Signature parsing.
//!
//! Turns the text of one C++ function declaration into a [`CommandDef`].
//! This is not a C++ parser: types are never resolved, only split off from
//! their names.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── lex.rs       : comment stripping, literal-aware char iteration
//! ├── split.rs     : parameter list location, depth-aware comma split
//! ├── signature.rs : parse_declaration()
//! ├── types.rs     : CommandDef, ParamDef
//! └── tests.rs     : Unit tests
//! ```
//!
//! # Pipeline
//!
//! 1. strip `/* */` and `//` comments
//! 2. find the outermost `( ... )`
//! 3. split its contents on top-level commas
//! 4. per parameter: drop `= default`, split type from name
//! 5. split the head into return type and name

pub(crate) mod lex;
mod signature;
mod split;
mod types;

pub use signature::parse_declaration;
pub use types::{CommandDef, ParamDef};
