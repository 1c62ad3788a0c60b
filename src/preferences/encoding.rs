//! Encodings of richer types onto primitive storage
//!
//! - Enums are stored as their integer ordinal. Decoding an unknown ordinal
//!   is an error, never a clamp.
//! - Tri-state booleans are stored as strings. Absence means "unset", the
//!   exact string `"false"` means `false`, and any other present string
//!   means `true`. Existing stores rely on this asymmetry.

/// An enum persisted by ordinal
///
/// Implement with [`setting_enum!`](crate::setting_enum) rather than by hand.
pub trait SettingEnum: Copy + Sized + 'static {
    /// Type name used in corruption diagnostics
    const NAME: &'static str;

    /// Every variant, in ordinal order
    const ALL: &'static [Self];

    fn ordinal(self) -> i64;

    /// Decode an ordinal, `None` if no variant has it
    fn from_ordinal(ordinal: i64) -> Option<Self>;
}

/// Implement [`SettingEnum`] for a fieldless enum with explicit ordinals
///
/// ```rust,ignore
/// setting_enum!(Theme { System = 0, Light = 1, Dark = 2 });
/// ```
#[macro_export]
macro_rules! setting_enum {
    ($name:ident { $($variant:ident = $ordinal:literal),+ $(,)? }) => {
        impl $crate::preferences::SettingEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn ordinal(self) -> i64 {
                match self {
                    $($name::$variant => $ordinal,)+
                }
            }

            fn from_ordinal(ordinal: i64) -> Option<Self> {
                match ordinal {
                    $($ordinal => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) const FALSE_SENTINEL: &str = "false";
pub(crate) const TRUE_SENTINEL: &str = "true";

/// Encode a tri-state; `None` means the key is removed
pub(crate) fn encode_tri_state(value: Option<bool>) -> Option<&'static str> {
    value.map(|b| if b { TRUE_SENTINEL } else { FALSE_SENTINEL })
}

/// Decode a present tri-state string; only `"false"` reads as `false`
pub(crate) fn decode_tri_state(stored: &str) -> bool {
    stored != FALSE_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sparse {
        Low,
        High,
    }

    setting_enum!(Sparse { Low = 1, High = 10 });

    #[test]
    fn test_macro_ordinals() {
        assert_eq!(Sparse::Low.ordinal(), 1);
        assert_eq!(Sparse::High.ordinal(), 10);
        assert_eq!(Sparse::from_ordinal(10), Some(Sparse::High));
        assert_eq!(Sparse::from_ordinal(0), None);
        assert_eq!(Sparse::from_ordinal(2), None);
        assert_eq!(Sparse::ALL, &[Sparse::Low, Sparse::High]);
        assert_eq!(Sparse::NAME, "Sparse");
    }

    #[test]
    fn test_tri_state_encoding() {
        assert_eq!(encode_tri_state(None), None);
        assert_eq!(encode_tri_state(Some(false)), Some("false"));
        assert_eq!(encode_tri_state(Some(true)), Some("true"));
    }

    #[test]
    fn test_only_false_sentinel_decodes_false() {
        assert!(!decode_tri_state("false"));
        assert!(decode_tri_state("true"));
        // Anything else present is true, including look-alikes.
        assert!(decode_tri_state("False"));
        assert!(decode_tri_state("0"));
        assert!(decode_tri_state(""));
    }
}
