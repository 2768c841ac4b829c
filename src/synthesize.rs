//! Key synthesis: turns a segment sequence into a lookup key and an
//! ordered argument list.

use serde::{
    Deserialize,
    Serialize,
};

use crate::segment::Segment;

/// Placeholder dialect shared by keys and templates.
///
/// A translation table is authored for exactly one mode. The same segment
/// sequence yields a different key under each mode, so entries written for
/// one dialect are never resolved by the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Anonymous `%@` tokens, consumed in template order.
    #[default]
    Sequential,
    /// Ordinal `%N$@` tokens, substituted by 1-based argument index.
    ///
    /// Lets a translated template reorder placeholders relative to the
    /// source.
    Positional,
}

/// The output of [`synthesize`]: a lookup key plus the arguments to
/// substitute into whatever template the key resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedKey {
    /// The literal skeleton with a placeholder token at each value
    /// position.
    pub key: String,
    /// Rendered value texts in source left-to-right order, independent of
    /// mode.
    pub args: Vec<String>,
}

/// Walk `segments` in order and build the lookup key and argument list.
///
/// Literal text goes into the key verbatim. Each value segment appends a
/// placeholder token to the key (`%@`, or `%N$@` with the value's 1-based
/// ordinal) and its rendered text to the argument list.
///
/// A sequence without value segments yields an empty argument list and a
/// key equal to the concatenated literal text.
#[must_use]
pub fn synthesize(segments: &[Segment], mode: Mode) -> SynthesizedKey {
    let mut key = String::new();
    let mut args = Vec::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => key.push_str(text),
            Segment::Value(rendered) => {
                args.push(rendered.clone());
                match mode {
                    Mode::Sequential => key.push_str("%@"),
                    Mode::Positional => {
                        let ordinal = args.len();
                        key.push_str(&format!("%{ordinal}$@"));
                    }
                }
            }
        }
    }

    tracing::debug!(%key, arg_count = args.len(), ?mode, "Synthesized lookup key");
    SynthesizedKey { key, args }
}
