//! i18n-format
//!
//! Localized string interpolation: builds a translation lookup key from an
//! ordered sequence of literal/value segments, resolves it against a
//! translation table, and substitutes the rendered values into the
//! translated template — correctly even when the translation reorders the
//! placeholders relative to the source.
//!
//! ```
//! use i18n_format::{Bundle, DEFAULT_TABLE, LocalizedString, StringTable};
//!
//! let mut table = StringTable::new();
//! table.insert("Hello, %@!", "Hallo, %@!");
//! let mut bundle = Bundle::new();
//! bundle.add_table(DEFAULT_TABLE, table);
//!
//! let greeting = LocalizedString::sequential()
//!     .literal("Hello, ")
//!     .value("Alice")
//!     .literal("!")
//!     .localize_in(&bundle)?;
//! assert_eq!(greeting, "Hallo, Alice!");
//! # Ok::<(), i18n_format::FormatError>(())
//! ```

pub mod bundle;
pub mod localize;
pub mod segment;
pub mod synthesize;
pub mod template;

pub use bundle::{
    Bundle,
    BundleError,
    DEFAULT_TABLE,
    StringTable,
    TranslationLookup,
    default_bundle,
    set_default_bundle,
};
pub use localize::{
    FormatError,
    LocalizedString,
    format_with,
};
pub use segment::Segment;
pub use synthesize::{
    Mode,
    SynthesizedKey,
    synthesize,
};
pub use template::{
    SubstituteError,
    substitute,
};
