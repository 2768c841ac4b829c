//! Template substitution honoring anonymous and ordinal placeholders.

use thiserror::Error;

use crate::synthesize::Mode;

/// Errors raised while substituting arguments into a template.
///
/// Translators edit templates by hand, so both kinds surface with enough
/// detail to point at the offending token. Substitution never produces
/// partial output: either it fully succeeds or it fails with one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstituteError {
    /// A placeholder referenced an argument that was not supplied.
    #[error("placeholder {index} has no matching argument ({available} supplied)")]
    ArityMismatch {
        /// 1-based ordinal of the offending placeholder.
        index: usize,
        /// Number of arguments supplied by the caller.
        available: usize,
    },
    /// The template contains a token the active mode cannot interpret.
    #[error("malformed template: {detail}")]
    Malformed {
        /// Description of the offending token.
        detail: String,
    },
}

/// One parsed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    /// Literal text copied through unchanged.
    Text(&'a str),
    /// An anonymous `%@` token.
    Anonymous,
    /// An ordinal `%N$@` token, 1-based.
    Indexed(usize),
}

/// A placeholder token recognized at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `%@`
    Anonymous,
    /// `%N$@`
    Indexed(usize),
}

/// Try to read a placeholder token at byte offset `at`, which is known to
/// hold a `%`.
///
/// Returns the token and its byte length. A `%` that does not begin a
/// recognized token yields `None` and is later emitted verbatim. A
/// token-shaped ordinal that is zero or does not fit in `usize` is
/// rejected.
fn token_at(template: &str, at: usize) -> Result<Option<(Token, usize)>, SubstituteError> {
    let bytes = template.as_bytes();
    match bytes.get(at + 1) {
        Some(b'@') => Ok(Some((Token::Anonymous, 2))),
        Some(first) if first.is_ascii_digit() => {
            let mut end = at + 1;
            while bytes.get(end).is_some_and(u8::is_ascii_digit) {
                end += 1;
            }
            if bytes.get(end) != Some(&b'$') || bytes.get(end + 1) != Some(&b'@') {
                return Ok(None);
            }
            let digits = template.get(at + 1..end).unwrap_or_default();
            let ordinal: usize = digits.parse().map_err(|_| SubstituteError::Malformed {
                detail: format!("placeholder ordinal '{digits}' is out of range"),
            })?;
            if ordinal == 0 {
                return Err(SubstituteError::Malformed {
                    detail: "placeholder ordinal must be 1 or greater".to_string(),
                });
            }
            Ok(Some((Token::Indexed(ordinal), end + 2 - at)))
        }
        _ => Ok(None),
    }
}

/// Split `template` into literal runs and placeholder tokens.
fn parse(template: &str) -> Result<Vec<Piece<'_>>, SubstituteError> {
    let mut pieces = Vec::new();
    let mut run_start = 0;
    let mut pos = 0;

    while pos < template.len() {
        if template.as_bytes().get(pos) != Some(&b'%') {
            pos += 1;
            continue;
        }
        match token_at(template, pos)? {
            Some((token, len)) => {
                if run_start < pos
                    && let Some(text) = template.get(run_start..pos)
                {
                    pieces.push(Piece::Text(text));
                }
                pieces.push(match token {
                    Token::Anonymous => Piece::Anonymous,
                    Token::Indexed(ordinal) => Piece::Indexed(ordinal),
                });
                pos += len;
                run_start = pos;
            }
            None => pos += 1,
        }
    }
    if run_start < template.len()
        && let Some(text) = template.get(run_start..)
    {
        pieces.push(Piece::Text(text));
    }
    Ok(pieces)
}

/// Substitute `args` into `template` under `mode`.
///
/// Sequential mode consumes the arguments strictly in the order the
/// anonymous tokens appear in the template. Positional mode replaces each
/// `%N$@` with the N-th argument wherever the token appears, so a
/// translation may reorder placeholders relative to the source key.
///
/// Pure in `(template, args, mode)`: each argument is inserted as its
/// already-rendered text, with no locale-sensitive formatting applied.
///
/// # Errors
/// - [`SubstituteError::ArityMismatch`] when a placeholder has no
///   corresponding argument.
/// - [`SubstituteError::Malformed`] for a non-positive ordinal or a token
///   of the other dialect; the two dialects are never silently mixed.
pub fn substitute(template: &str, args: &[String], mode: Mode) -> Result<String, SubstituteError> {
    let pieces = parse(template)?;
    let mut output = String::with_capacity(template.len());
    // Next argument consumed by an anonymous token.
    let mut cursor = 0;

    for piece in pieces {
        match (piece, mode) {
            (Piece::Text(text), _) => output.push_str(text),
            (Piece::Anonymous, Mode::Sequential) => {
                let Some(arg) = args.get(cursor) else {
                    return Err(SubstituteError::ArityMismatch {
                        index: cursor + 1,
                        available: args.len(),
                    });
                };
                output.push_str(arg);
                cursor += 1;
            }
            (Piece::Indexed(ordinal), Mode::Positional) => {
                let Some(arg) = args.get(ordinal - 1) else {
                    return Err(SubstituteError::ArityMismatch {
                        index: ordinal,
                        available: args.len(),
                    });
                };
                output.push_str(arg);
            }
            (Piece::Indexed(ordinal), Mode::Sequential) => {
                return Err(SubstituteError::Malformed {
                    detail: format!("ordinal placeholder %{ordinal}$@ in a sequential template"),
                });
            }
            (Piece::Anonymous, Mode::Positional) => {
                return Err(SubstituteError::Malformed {
                    detail: "anonymous placeholder %@ in a positional template".to_string(),
                });
            }
        }
    }
    Ok(output)
}
