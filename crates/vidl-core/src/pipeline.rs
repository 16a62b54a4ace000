// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Whole-source pipeline: scan → parse → emit.

use crate::{
    config::GeneratorConfig,
    emit::{CppEmitter, Emitter},
    error::{BatchError, Error},
    parse::{CommandDef, parse_declaration},
    scan::scan
};

/// Commands and failures gathered from one source.
#[derive(Debug, Default)]
pub struct Batch {
    /// Commands that parsed, in source order.
    pub commands: Vec<CommandDef>,
    /// Declarations that did not, in source order.
    pub errors:   Vec<Error>
}

impl Batch {
    /// Append the results of another source.
    pub fn extend(&mut self, other: Batch) {
        self.commands.extend(other.commands);
        self.errors.extend(other.errors);
    }

    /// `true` when no declaration failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Emit the commands, or fail with every error gathered so far.
    ///
    /// # Errors
    ///
    /// [`BatchError`] when any declaration failed or the emitter rejects
    /// the batch.
    pub fn emit<E: Emitter>(self, emitter: &E) -> Result<E::Output, BatchError> {
        if !self.is_clean() {
            return Err(BatchError {
                errors:   self.errors,
                commands: self.commands
            });
        }
        emitter.emit(&self.commands).map_err(|err| BatchError {
            errors:   vec![err.into()],
            commands: self.commands
        })
    }
}

/// Scan `source` and parse every marked declaration.
///
/// A malformed declaration is logged and recorded; the rest still parse.
#[must_use]
pub fn collect(source: &str, config: &GeneratorConfig) -> Batch {
    let mut batch = Batch::default();

    for found in scan(source, &config.marker) {
        let parsed = found.and_then(|decl| {
            parse_declaration(&decl.text).map_err(|err| err.at_line(decl.line))
        });
        match parsed {
            Ok(command) => batch.commands.push(command),
            Err(err) => {
                tracing::warn!(line = ?err.line, kind = %err.kind, "skipping malformed declaration");
                batch.errors.push(err.into());
            }
        }
    }

    tracing::debug!(
        commands = batch.commands.len(),
        errors = batch.errors.len(),
        "collected declarations"
    );
    batch
}

/// Run the full pipeline over `source` with `emitter`.
///
/// # Errors
///
/// [`BatchError`] with every failure in source order when any declaration
/// is malformed, or with the emitter's error.
///
/// # Example
///
/// ```rust
/// use vidl_core::{CppEmitter, GeneratorConfig, generate};
///
/// let source = "// VIDL_GENERATE\nvoid CmdA(int x);\n";
/// let config = GeneratorConfig::default();
/// let header = generate(source, &config, &CppEmitter::new(&config)).unwrap();
/// assert!(header.contains("struct VIDL_CmdA"));
/// ```
pub fn generate<E: Emitter>(
    source: &str,
    config: &GeneratorConfig,
    emitter: &E
) -> Result<E::Output, BatchError> {
    collect(source, config).emit(emitter)
}

/// [`generate`] with the C++ back end.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_cpp(source: &str, config: &GeneratorConfig) -> Result<String, BatchError> {
    generate(source, config, &CppEmitter::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, ParseErrorKind};

    #[test]
    fn collects_in_order() {
        let source = "\
// VIDL_GENERATE
void CmdA(int x);
// VIDL_GENERATE
void CmdB();
";
        let batch = collect(source, &GeneratorConfig::default());
        assert!(batch.is_clean());
        let names: Vec<_> = batch.commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["CmdA", "CmdB"]);
    }

    #[test]
    fn bad_declaration_does_not_stop_the_batch() {
        let source = "\
// VIDL_GENERATE
void Good(int x);
// VIDL_GENERATE
void Bad(int, float y);
// VIDL_GENERATE
void AlsoGood();
";
        let batch = collect(source, &GeneratorConfig::default());
        assert_eq!(batch.commands.len(), 2);
        assert_eq!(batch.errors.len(), 1);
        let Error::Parse(ParseError { kind, line, .. }) = &batch.errors[0] else {
            panic!("expected parse error");
        };
        assert_eq!(*kind, ParseErrorKind::UnsplittableParameter);
        assert_eq!(*line, Some(3));
    }

    #[test]
    fn generate_fails_with_every_error() {
        let source = "\
// VIDL_GENERATE
void A(int);
// VIDL_GENERATE
void B(float y);
// VIDL_GENERATE
";
        let err = generate_cpp(source, &GeneratorConfig::default()).unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.commands.len(), 1);
        assert!(err.to_string().starts_with("2 declaration(s) failed"));
    }

    #[test]
    fn emitter_errors_become_batch_errors() {
        let source = "\
// VIDL_GENERATE
void Twin();
// VIDL_GENERATE
void Twin(int a);
";
        let err = generate_cpp(source, &GeneratorConfig::default()).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert!(matches!(err.errors[0], Error::Emit(_)));
        assert_eq!(err.commands.len(), 2);
    }

    #[test]
    fn merged_batches_share_magic_space() {
        let config = GeneratorConfig::default();
        let mut batch = collect("// VIDL_GENERATE\nvoid A();\n", &config);
        batch.extend(collect("// VIDL_GENERATE\nvoid B();\n", &config));
        let header = batch.emit(&CppEmitter::new(&config)).unwrap();
        assert!(header.contains("struct VIDL_A"));
        assert!(header.contains("struct VIDL_B"));
    }
}
