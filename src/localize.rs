//! Call-surface adapter: the builder and the four localization call forms.
//!
//! Everything here is glue around one pipeline: synthesize a key from the
//! segments, resolve it through a [`TranslationLookup`] (falling back to
//! the key itself on a miss), and substitute the rendered values into the
//! resolved template.

use std::fmt::Display;

use thiserror::Error;

use crate::bundle::{
    Bundle,
    TranslationLookup,
    default_bundle,
};
use crate::segment::Segment;
use crate::synthesize::{
    Mode,
    SynthesizedKey,
    synthesize,
};
use crate::template::{
    SubstituteError,
    substitute,
};

/// Errors surfaced by a formatting call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Substituting the arguments into the resolved template failed.
    ///
    /// Carries the synthesized key so the diagnostic identifies which
    /// translation entry (or call site, on fallback) is at fault.
    #[error("failed to format '{key}': {source}")]
    Substitution {
        /// The synthesized lookup key.
        key: String,
        /// The underlying substitution failure.
        source: SubstituteError,
    },
}

/// Lookup used when no default bundle has been installed: every key
/// misses, so formatting reduces to fallback-to-key.
#[derive(Debug, Clone, Copy)]
struct NoTranslations;

impl TranslationLookup for NoTranslations {
    fn lookup(&self, _key: &str, _table: Option<&str>) -> Option<&str> {
        None
    }
}

/// Core pipeline: synthesize → look up → substitute.
///
/// A lookup miss is not an error; the synthesized key doubles as the
/// template, which reproduces the source text with the values in place.
///
/// A sequence without value segments is a plain localized lookup: the
/// resolved text (or the key, on a miss) is returned verbatim, without
/// running the substitutor. Literal text is never scanned for placeholder
/// tokens, so a literal containing `%@` survives unchanged.
///
/// # Errors
/// Returns [`FormatError::Substitution`] when the resolved template cannot
/// be substituted (arity mismatch or malformed token).
pub fn format_with<L>(
    segments: &[Segment],
    mode: Mode,
    table: Option<&str>,
    lookup: &L,
) -> Result<String, FormatError>
where
    L: TranslationLookup + ?Sized,
{
    let SynthesizedKey { key, args } = synthesize(segments, mode);
    let resolved = lookup.lookup(&key, table);
    if resolved.is_none() {
        tracing::debug!(%key, ?table, "No translation entry; using key as template");
    }
    let template = resolved.unwrap_or(key.as_str());
    // `args` is empty exactly when no segment is a value.
    if args.is_empty() {
        return Ok(template.to_string());
    }
    substitute(template, &args, mode)
        .map_err(|source| FormatError::Substitution { key, source })
}

/// An interpolated string under construction.
///
/// Built literal-by-value via [`literal`](Self::literal) and
/// [`value`](Self::value) (or wrapped around a ready-made segment
/// sequence), then localized through one of the four call forms:
///
/// | form | table | bundle |
/// |------|-------|--------|
/// | [`localize`](Self::localize) | default | process default |
/// | [`localize_in`](Self::localize_in) | default | override |
/// | [`localize_table`](Self::localize_table) | override | process default |
/// | [`localize_with`](Self::localize_with) | override | override |
#[derive(Debug, Clone, Default)]
pub struct LocalizedString {
    /// Segments in source order.
    segments: Vec<Segment>,
    /// Placeholder dialect for synthesis, lookup, and substitution.
    mode: Mode,
}

impl LocalizedString {
    /// Start an empty sequential-mode string.
    #[must_use]
    pub fn sequential() -> Self {
        Self { segments: Vec::new(), mode: Mode::Sequential }
    }

    /// Start an empty positional-mode string.
    #[must_use]
    pub fn positional() -> Self {
        Self { segments: Vec::new(), mode: Mode::Positional }
    }

    /// Wrap an existing segment sequence.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>, mode: Mode) -> Self {
        Self { segments, mode }
    }

    /// Append a literal fragment.
    #[must_use]
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::literal(text));
        self
    }

    /// Append a value fragment, rendered to text now.
    #[must_use]
    pub fn value(mut self, value: impl Display) -> Self {
        self.segments.push(Segment::value(value));
        self
    }

    /// The segments accumulated so far.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The placeholder dialect of this string.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Localize with the default table in the process default bundle.
    ///
    /// # Errors
    /// See [`format_with`].
    pub fn localize(&self) -> Result<String, FormatError> {
        self.resolve(None, default_bundle())
    }

    /// Localize with the default table in `bundle`.
    ///
    /// # Errors
    /// See [`format_with`].
    pub fn localize_in(&self, bundle: &Bundle) -> Result<String, FormatError> {
        self.resolve(None, Some(bundle))
    }

    /// Localize with a table override in the process default bundle.
    ///
    /// # Errors
    /// See [`format_with`].
    pub fn localize_table(&self, table: &str) -> Result<String, FormatError> {
        self.resolve(Some(table), default_bundle())
    }

    /// Localize with both a table and a bundle override.
    ///
    /// # Errors
    /// See [`format_with`].
    pub fn localize_with(&self, table: &str, bundle: &Bundle) -> Result<String, FormatError> {
        self.resolve(Some(table), Some(bundle))
    }

    /// Dispatch to the pipeline, substituting the missing-bundle lookup
    /// when no default bundle is installed.
    fn resolve(&self, table: Option<&str>, bundle: Option<&Bundle>) -> Result<String, FormatError> {
        match bundle {
            Some(bundle) => format_with(&self.segments, self.mode, table, bundle),
            None => format_with(&self.segments, self.mode, table, &NoTranslations),
        }
    }
}
