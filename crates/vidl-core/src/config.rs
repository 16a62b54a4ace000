// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Every naming convention used by the scanner and the emitters lives here.
//!
//! # Options
//!
//! | Option | Default | Used by |
//! |--------|---------|---------|
//! | `marker` | `// VIDL_GENERATE` | scanner |
//! | `struct_prefix` | `VIDL_` | C++ structs |
//! | `handler_class` | `VIDLHandler` | C++ dispatcher |
//! | `handler_prefix` | `Handle_` | C++ handler methods |
//! | `ctor_param_prefix` | `_` | C++ constructor parameters |
//! | `header_struct` | `VIDLCmdHeader` | C++ tag header |
//! | `rust_prefix` | `Vidl` | Rust structs, enum, trait |
//! | `max_magic_attempts` | `16` | magic assignment |

use crate::magic::DEFAULT_MAX_ATTEMPTS;

/// Directive marker recognized by default.
pub const DEFAULT_MARKER: &str = "// VIDL_GENERATE";

/// Naming conventions and limits for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Comment line that marks the next declaration for generation.
    pub marker:             String,
    /// Prefix of generated C++ struct names.
    pub struct_prefix:      String,
    /// Name of the generated C++ handler class.
    pub handler_class:      String,
    /// Prefix of per-command C++ handler methods.
    pub handler_prefix:     String,
    /// Prefix distinguishing constructor parameters from members.
    pub ctor_param_prefix:  String,
    /// Name of the C++ struct that exposes the magic of any command.
    pub header_struct:      String,
    /// Prefix of generated Rust types.
    pub rust_prefix:        String,
    /// Magic derivations tried per command before giving up.
    pub max_magic_attempts: u32
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker:             DEFAULT_MARKER.to_string(),
            struct_prefix:      "VIDL_".to_string(),
            handler_class:      "VIDLHandler".to_string(),
            handler_prefix:     "Handle_".to_string(),
            ctor_param_prefix:  "_".to_string(),
            header_struct:      "VIDLCmdHeader".to_string(),
            rust_prefix:        "Vidl".to_string(),
            max_magic_attempts: DEFAULT_MAX_ATTEMPTS
        }
    }
}

impl GeneratorConfig {
    /// Set the directive marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the C++ struct prefix.
    #[must_use]
    pub fn with_struct_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.struct_prefix = prefix.into();
        self
    }

    /// Set the C++ handler class name.
    #[must_use]
    pub fn with_handler_class(mut self, name: impl Into<String>) -> Self {
        self.handler_class = name.into();
        self
    }

    /// Set the C++ handler method prefix.
    #[must_use]
    pub fn with_handler_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.handler_prefix = prefix.into();
        self
    }

    /// Set the Rust type prefix.
    #[must_use]
    pub fn with_rust_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.rust_prefix = prefix.into();
        self
    }

    /// Set the magic perturbation bound.
    #[must_use]
    pub fn with_max_magic_attempts(mut self, attempts: u32) -> Self {
        self.max_magic_attempts = attempts;
        self
    }

    /// C++ struct name for a sanitized command name.
    #[must_use]
    pub fn struct_name(&self, command: &str) -> String {
        format!("{}{}", self.struct_prefix, command)
    }

    /// C++ handler method name for a sanitized command name.
    #[must_use]
    pub fn handler_name(&self, command: &str) -> String {
        format!("{}{}", self.handler_prefix, command)
    }

    /// Name of the generated Rust command enum.
    #[must_use]
    pub fn rust_command_enum(&self) -> String {
        format!("{}Command", self.rust_prefix)
    }

    /// Name of the generated Rust handler trait.
    #[must_use]
    pub fn rust_handler_trait(&self) -> String {
        format!("{}Handler", self.rust_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.marker, "// VIDL_GENERATE");
        assert_eq!(config.struct_name("CmdA"), "VIDL_CmdA");
        assert_eq!(config.handler_name("CmdA"), "Handle_CmdA");
        assert_eq!(config.rust_command_enum(), "VidlCommand");
        assert_eq!(config.rust_handler_trait(), "VidlHandler");
        assert_eq!(config.max_magic_attempts, 16);
    }

    #[test]
    fn builder_overrides() {
        let config = GeneratorConfig::default()
            .with_marker("// @rpc")
            .with_struct_prefix("Rpc")
            .with_handler_prefix("On")
            .with_rust_prefix("Rpc")
            .with_max_magic_attempts(4);
        assert_eq!(config.marker, "// @rpc");
        assert_eq!(config.struct_name("Ping"), "RpcPing");
        assert_eq!(config.handler_name("Ping"), "OnPing");
        assert_eq!(config.rust_handler_trait(), "RpcHandler");
        assert_eq!(config.max_magic_attempts, 4);
    }
}
