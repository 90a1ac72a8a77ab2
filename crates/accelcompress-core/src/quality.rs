//! JPEG quality normalization.
//!
//! Quality is a cosmetic parameter, so out-of-range requests are replaced with
//! [`DEFAULT_QUALITY`] instead of being rejected.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Quality used when the caller does not ask for one, or asks for a value
/// outside [`MIN_QUALITY`]..=[`MAX_QUALITY`].
pub const DEFAULT_QUALITY: u8 = 80;

/// Minimum accepted JPEG quality.
pub const MIN_QUALITY: u8 = 1;

/// Maximum accepted JPEG quality.
pub const MAX_QUALITY: u8 = 100;

/// A validated JPEG quality level in `1..=100`.
///
/// The only way to build one from an arbitrary integer is [`Quality::new`],
/// which substitutes the default for anything out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// Normalize a requested quality.
    ///
    /// Values in `1..=100` are kept as-is; everything else becomes
    /// [`DEFAULT_QUALITY`].
    pub fn new(requested: i32) -> Self {
        if is_valid_quality(requested) {
            Self(requested as u8)
        } else {
            debug!(
                requested,
                substituted = DEFAULT_QUALITY,
                "quality out of range, using default"
            );
            Self(DEFAULT_QUALITY)
        }
    }

    /// The quality value as passed to the encoder.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` if `quality` lies in the accepted range (1-100).
#[inline]
pub fn is_valid_quality(quality: i32) -> bool {
    (i32::from(MIN_QUALITY)..=i32::from(MAX_QUALITY)).contains(&quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_are_kept() {
        assert_eq!(Quality::new(1).get(), 1);
        assert_eq!(Quality::new(50).get(), 50);
        assert_eq!(Quality::new(100).get(), 100);
    }

    #[test]
    fn test_out_of_range_values_use_default() {
        assert_eq!(Quality::new(0).get(), DEFAULT_QUALITY);
        assert_eq!(Quality::new(101).get(), DEFAULT_QUALITY);
        assert_eq!(Quality::new(150).get(), DEFAULT_QUALITY);
        assert_eq!(Quality::new(-1).get(), DEFAULT_QUALITY);
        assert_eq!(Quality::new(i32::MIN).get(), DEFAULT_QUALITY);
        assert_eq!(Quality::new(i32::MAX).get(), DEFAULT_QUALITY);
    }

    #[test]
    fn test_default_is_80() {
        assert_eq!(Quality::default().get(), 80);
        assert_eq!(Quality::default(), Quality::new(0));
    }

    #[test]
    fn test_is_valid_quality() {
        assert!(!is_valid_quality(0));
        assert!(is_valid_quality(1));
        assert!(is_valid_quality(100));
        assert!(!is_valid_quality(101));
        assert!(!is_valid_quality(-80));
    }

    #[test]
    fn test_conversions() {
        let q: Quality = 42.into();
        assert_eq!(u8::from(q), 42);
        assert_eq!(q.to_string(), "42");
    }

    #[test]
    fn test_serde_normalizes_on_deserialize() {
        // Deserialization goes through the same permissive normalization
        use serde::de::IntoDeserializer;

        let de: serde::de::value::I32Deserializer<serde::de::value::Error> =
            500i32.into_deserializer();
        let q = Quality::deserialize(de).unwrap();
        assert_eq!(q.get(), DEFAULT_QUALITY);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalization always lands in 1..=100.
        #[test]
        fn prop_always_in_range(requested in any::<i32>()) {
            let q = Quality::new(requested).get();
            prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&q));
        }

        /// Property: valid values pass through untouched.
        #[test]
        fn prop_valid_values_unchanged(requested in 1i32..=100) {
            prop_assert_eq!(i32::from(Quality::new(requested).get()), requested);
        }

        /// Property: invalid values always become the default.
        #[test]
        fn prop_invalid_values_use_default(
            requested in prop_oneof![i32::MIN..=0, 101i32..=i32::MAX],
        ) {
            prop_assert_eq!(Quality::new(requested).get(), DEFAULT_QUALITY);
        }
    }
}
