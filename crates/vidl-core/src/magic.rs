// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Deterministic per-command wire tags.
//!
//! A magic identifier is the first four bytes (big-endian) of the SHA-256
//! digest of the command name. It depends on nothing but the name, so the
//! same declaration yields the same tag in every build.
//!
//! Uniqueness is a property of a *batch*, not of the hash: [`assign`] walks
//! the commands of one emission in order and, on a clash, re-hashes
//! `"{name}#{attempt}"` until a free value turns up.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::{error::EmitError, parse::CommandDef};

/// Default number of derivations tried per command before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Derive the unperturbed magic for `name`.
#[must_use]
pub fn magic_for(name: &str) -> u32 {
    digest_u32(name.as_bytes())
}

/// Derive the magic for `name` at perturbation `attempt`.
///
/// Attempt `0` is [`magic_for`] itself.
#[must_use]
pub fn perturbed(name: &str, attempt: u32) -> u32 {
    if attempt == 0 {
        magic_for(name)
    } else {
        digest_u32(format!("{name}#{attempt}").as_bytes())
    }
}

/// Render a magic as the fixed-width hex literal used in generated code.
#[must_use]
pub fn hex_literal(magic: u32) -> String {
    format!("0x{magic:08X}")
}

fn digest_u32(bytes: &[u8]) -> u32 {
    let digest = Sha256::digest(bytes);
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// A command paired with the magic it received in its batch.
#[derive(Debug, Clone, Copy)]
pub struct Tagged<'a> {
    /// The parsed declaration.
    pub command: &'a CommandDef,
    /// Batch-unique wire tag.
    pub magic:   u32
}

/// Assign batch-unique magics to `commands`, preserving order.
///
/// `0` is treated as taken so an all-zero header never matches a command.
///
/// # Errors
///
/// [`EmitError::MagicExhausted`] when `max_attempts` derivations all clash.
pub fn assign(commands: &[CommandDef], max_attempts: u32) -> Result<Vec<Tagged<'_>>, EmitError> {
    let mut taken: HashSet<u32> = HashSet::from([0]);
    let mut tagged = Vec::with_capacity(commands.len());

    for command in commands {
        let name = command.name.as_str();
        let magic = (0..max_attempts)
            .map(|attempt| (attempt, perturbed(name, attempt)))
            .find(|(_, magic)| !taken.contains(magic))
            .map(|(attempt, magic)| {
                if attempt > 0 {
                    tracing::debug!(command = name, attempt, magic = %hex_literal(magic), "perturbed colliding magic");
                }
                magic
            })
            .ok_or_else(|| EmitError::MagicExhausted {
                name:     name.to_string(),
                attempts: max_attempts
            })?;

        taken.insert(magic);
        tagged.push(Tagged { command, magic });
    }

    Ok(tagged)
}
