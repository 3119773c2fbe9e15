use alloc::vec::Vec;

use wson_connect::ConnectorBuilder;
use wson_text::CodecSettings;

// -----------------------------------------------------------------------------
// WsonSettings

/// The data part of a configuration.
///
/// With the `serde` feature it can be loaded from any format; missing
/// fields fall back to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WsonSettings {
    /// Merge the builtin connectors after the user's own.
    pub extend: bool,
    /// See [`CodecSettings::max_depth`].
    pub max_depth: usize,
}

impl WsonSettings {
    #[inline]
    pub const fn codec(&self) -> CodecSettings {
        CodecSettings {
            max_depth: self.max_depth,
        }
    }
}

impl Default for WsonSettings {
    #[inline]
    fn default() -> Self {
        Self {
            extend: true,
            max_depth: CodecSettings::DEFAULT_MAX_DEPTH,
        }
    }
}

// -----------------------------------------------------------------------------
// WsonOptions

/// Everything needed to build a [`Wson`](crate::Wson).
///
/// # Examples
///
/// ```
/// use wson::{Connector, WsonOptions};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i64, i64);
///
/// let options = WsonOptions::new()
///     .connector(Connector::of::<Point>("Point"))
///     .extend(false);
/// assert_eq!(options.connectors.len(), 1);
/// assert!(!options.settings.extend);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WsonOptions {
    /// User connectors, in resolution order.
    pub connectors: Vec<ConnectorBuilder>,
    pub settings: WsonSettings,
}

impl WsonOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from loaded settings, without connectors.
    #[inline]
    pub fn from_settings(settings: WsonSettings) -> Self {
        Self {
            connectors: Vec::new(),
            settings,
        }
    }

    /// Appends a connector.
    #[inline]
    pub fn connector(mut self, connector: ConnectorBuilder) -> Self {
        self.connectors.push(connector);
        self
    }

    /// Appends connectors.
    #[inline]
    pub fn connectors(mut self, connectors: impl IntoIterator<Item = ConnectorBuilder>) -> Self {
        self.connectors.extend(connectors);
        self
    }

    #[inline]
    pub fn extend(mut self, extend: bool) -> Self {
        self.settings.extend = extend;
        self
    }

    #[inline]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.settings.max_depth = max_depth;
        self
    }
}

// -----------------------------------------------------------------------------
// Tests
