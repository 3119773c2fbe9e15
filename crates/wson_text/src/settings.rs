// -----------------------------------------------------------------------------
// CodecSettings

/// Limits shared by the stringifier and the parser.
///
/// With the `serde` feature, missing fields fall back to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecSettings {
    /// Deepest accepted nesting of arrays, objects and custom values.
    pub max_depth: usize,
}

impl CodecSettings {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for CodecSettings {
    #[inline]
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
