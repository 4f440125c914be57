//! Generation settings, assembled once at startup and passed into the
//! engine explicitly.

use std::path::PathBuf;

/// Which class shape to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Typed public fields plus a constructor copying from a raw data
    /// mapping.
    #[default]
    PlainData,
    /// Defaulted constructor parameters plus `fromJSON`/`toJSON`.
    Serializable,
}

/// Process-wide generation settings. Immutable after startup; the only
/// state shared across files.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Directory scanned recursively for `*.json` samples.
    pub base_path: PathBuf,
    /// Class-name template; the first `#` is replaced with the sample's
    /// file stem.
    pub class_name_template: String,
    /// Delete each sample file after its class is written.
    pub delete_source: bool,
    pub variant: Variant,
    /// Serializable variant only: `fromJSON` declares `ClassName | null`
    /// and returns `null` when its input is falsy.
    pub nullable_factory: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            class_name_template: "#Model".to_string(),
            delete_source: false,
            variant: Variant::default(),
            nullable_factory: false,
        }
    }
}
