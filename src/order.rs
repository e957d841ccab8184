//! Byte order model for protocol data conversion
//!
//! Provides the three-valued [`Order`] tag used by every conversion routine
//! in this crate, and the resolution of the `Native` placeholder to the
//! host's physical byte order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Byte order tag for multi-byte values
///
/// # Terminology
/// - **Big**: most significant byte first (network byte order)
/// - **Little**: least significant byte first (x86/ARM native order)
/// - **Native**: placeholder for "whatever the host uses"; not a third
///   physical order
///
/// Order is context supplied by the caller, never stored with a value.
/// `Native` must be resolved via [`Order::resolve`] before any comparison
/// against a physical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Big-endian: most significant byte first
    ///
    /// Network byte order, used by most wire protocols.
    /// Example: 0x12345678 → [0x12, 0x34, 0x56, 0x78]
    Big,

    /// Little-endian: least significant byte first
    ///
    /// Intel x86 native byte order.
    /// Example: 0x12345678 → [0x78, 0x56, 0x34, 0x12]
    Little,

    /// Host byte order placeholder
    ///
    /// Resolves to [`Order::NATIVE`] (big or little, fixed per target).
    Native,
}

impl Order {
    /// Physical byte order of the target platform
    ///
    /// Fixed at compile time from `target_endian`; always `Big` or `Little`.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Order = Order::Big;

    /// Physical byte order of the target platform
    ///
    /// Fixed at compile time from `target_endian`; always `Big` or `Little`.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Order = Order::Little;

    /// Resolve `Native` to the host's physical order
    ///
    /// `Big` and `Little` pass through unchanged. Never returns `Native`.
    pub const fn resolve(self) -> Order {
        match self {
            Order::Native => Order::NATIVE,
            other => other,
        }
    }

    /// Check if this order resolves to big-endian
    pub fn is_big(self) -> bool {
        matches!(self.resolve(), Order::Big)
    }

    /// Check if this order resolves to little-endian
    pub fn is_little(self) -> bool {
        matches!(self.resolve(), Order::Little)
    }

    /// Check if this order resolves to the host's physical order
    pub fn is_native(self) -> bool {
        self.resolve() == Order::NATIVE
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Big => "big",
            Order::Little => "little",
            Order::Native => "native",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Order {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Order::Big
    }
}

/// Error returned when a string does not name a byte order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized byte order: {0}")]
pub struct ParseOrderError(String);

impl std::str::FromStr for Order {
    type Err = ParseOrderError;

    /// Parse from common configuration spellings
    ///
    /// Supports various representations found in point tables:
    /// - "big", "BE", "BIG_ENDIAN", "ABCD", "network" → `Big`
    /// - "little", "LE", "LITTLE_ENDIAN", "DCBA" → `Little`
    /// - "native", "NE", "host" → `Native`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "big" | "be" | "bigendian" | "abcd" | "network" => Ok(Order::Big),
            "little" | "le" | "littleendian" | "dcba" => Ok(Order::Little),
            "native" | "ne" | "host" => Ok(Order::Native),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_matches_target() {
        if cfg!(target_endian = "big") {
            assert_eq!(Order::NATIVE, Order::Big);
        } else {
            assert_eq!(Order::NATIVE, Order::Little);
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Order::Big.resolve(), Order::Big);
        assert_eq!(Order::Little.resolve(), Order::Little);
        assert_eq!(Order::Native.resolve(), Order::NATIVE);
        assert_ne!(Order::Native.resolve(), Order::Native);
    }

    #[test]
    fn test_properties() {
        assert!(Order::Big.is_big());
        assert!(!Order::Big.is_little());
        assert!(Order::Little.is_little());
        assert!(Order::Native.is_native());

        // Native predicates follow the resolved order
        assert_eq!(Order::Native.is_big(), cfg!(target_endian = "big"));
        assert_eq!(Order::Native.is_little(), cfg!(target_endian = "little"));
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("big".parse::<Order>(), Ok(Order::Big));
        assert_eq!("BE".parse::<Order>(), Ok(Order::Big));
        assert_eq!("BIG_ENDIAN".parse::<Order>(), Ok(Order::Big));
        assert_eq!("ABCD".parse::<Order>(), Ok(Order::Big));

        assert_eq!("little".parse::<Order>(), Ok(Order::Little));
        assert_eq!("LE".parse::<Order>(), Ok(Order::Little));
        assert_eq!("little-endian".parse::<Order>(), Ok(Order::Little));
        assert_eq!("DCBA".parse::<Order>(), Ok(Order::Little));

        assert_eq!("native".parse::<Order>(), Ok(Order::Native));
        assert_eq!("host".parse::<Order>(), Ok(Order::Native));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("invalid".parse::<Order>().is_err());
        assert!("".parse::<Order>().is_err());
        assert!("CDAB".parse::<Order>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::Big.to_string(), "big");
        assert_eq!(Order::Little.to_string(), "little");
        assert_eq!(Order::Native.to_string(), "native");
    }

    #[test]
    fn test_default() {
        assert_eq!(Order::default(), Order::Big);
    }

    #[test]
    fn test_serde_round_trip() {
        for order in [Order::Big, Order::Little, Order::Native] {
            let json = serde_json::to_string(&order).unwrap();
            let back: Order = serde_json::from_str(&json).unwrap();
            assert_eq!(order, back);
        }
        assert_eq!(serde_json::to_string(&Order::Big).unwrap(), "\"big\"");
    }
}
