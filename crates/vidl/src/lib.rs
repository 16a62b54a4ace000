// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # vidl
//!
//! One crate, both halves. Re-exports:
//! - [`commands!`] from `vidl-macros`
//! - everything from `vidl-core` ([`generate_cpp`], [`parse_declaration`],
//!   [`magic_for`], [`GeneratorConfig`], ...)

pub use vidl_core::*;
pub use vidl_macros::commands;
