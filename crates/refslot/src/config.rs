//! Configuration Module - Layout Geometry Parameters
//!
//! Controls the geometry of container storage: how large the reserved
//! object header is and how container blocks are aligned. All field
//! and element offsets are derived from a validated configuration, so
//! every resolved slot is guaranteed to be word-aligned.

use crate::object::layout::REF_SIZE;

/// Layout geometry for container storage blocks
///
/// Most callers use the default. A custom configuration only changes
/// where slots land inside a block, never the access semantics.
///
/// # Examples
///
/// ```rust
/// use refslot::LayoutConfig;
///
/// // Default geometry
/// let config = LayoutConfig::default();
/// assert!(config.validate().is_ok());
///
/// // A larger header, e.g. to mirror a fatter runtime object model
/// let config = LayoutConfig {
///     header_size: 32,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Bytes reserved at the start of every object and array block
    ///
    /// Must be a multiple of the reference word size so that the first
    /// slot after the header is word-aligned.
    /// Default: 16
    pub header_size: usize,

    /// Alignment of container storage blocks
    ///
    /// Must be a power of two and at least the reference word size.
    /// Default: 16
    pub alignment: usize,
}

/// Default header size: two reference words on 64-bit
pub const DEFAULT_HEADER_SIZE: usize = 16;

/// Default block alignment
pub const DEFAULT_ALIGNMENT: usize = 16;

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            header_size: DEFAULT_HEADER_SIZE,
            alignment: DEFAULT_ALIGNMENT,
        }
    }
}

impl LayoutConfig {
    /// Validate configuration
    ///
    /// Checks that the geometry keeps every slot word-aligned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refslot::LayoutConfig;
    ///
    /// let config = LayoutConfig {
    ///     alignment: 3, // not a power of two
    ///     ..Default::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alignment.is_power_of_two() {
            return Err(ConfigError::InvalidAlignment(format!(
                "alignment must be a power of two, got {}",
                self.alignment
            )));
        }

        if self.alignment < REF_SIZE {
            return Err(ConfigError::InvalidAlignment(format!(
                "alignment must be at least the reference word size ({}), got {}",
                REF_SIZE, self.alignment
            )));
        }

        if self.header_size % REF_SIZE != 0 {
            return Err(ConfigError::InvalidHeaderSize(format!(
                "header_size must be a multiple of the reference word size ({}), got {}",
                REF_SIZE, self.header_size
            )));
        }

        Ok(())
    }
}

/// Error types for layout configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    #[error("Invalid header size: {0}")]
    InvalidHeaderSize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.header_size % REF_SIZE, 0);
    }

    #[test]
    fn test_invalid_alignment() {
        let config = LayoutConfig {
            alignment: 3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAlignment(_))
        ));
    }

    #[test]
    fn test_alignment_below_word_size() {
        let config = LayoutConfig {
            alignment: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_header_size() {
        let config = LayoutConfig {
            header_size: 13,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidHeaderSize(_))
        ));
    }
}
