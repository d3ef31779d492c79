//! crates/blog_core/src/ids.rs
//! Numeric entity identifiers and field-shape helpers.
//! Deterministic, integer-only; no I/O.

use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upstream datasets use `0` as a "no reference" placeholder inside
/// reference lists. A placeholder is never resolved against an ID set.
pub const PLACEHOLDER_ID: u64 = 0;

macro_rules! def_numeric_id {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u64);

        impl $name {
            #[inline] pub const fn new(raw: u64) -> Self { Self(raw) }
            #[inline] pub const fn as_u64(self) -> u64 { self.0 }
            /// True when this value is the upstream "no reference" sentinel.
            #[inline] pub const fn is_placeholder(self) -> bool { self.0 == PLACEHOLDER_ID }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(raw: u64) -> Self { Self(raw) }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self).map_err(|_| CoreError::InvalidId)
            }
        }
    }
}

def_numeric_id!(
    /// Identifier of a `User` record.
    UserId
);
def_numeric_id!(
    /// Identifier of an `Article` record.
    ArticleId
);

/// Minimal email shape check: ASCII, exactly one `@`, non-empty local part,
/// and a dot somewhere after the `@` (not first or last in the domain).
///
/// This is intentionally a shape check, not RFC 5321 parsing; absence of an
/// email is never an error upstream, so the check only has to catch values
/// that cannot possibly be addresses.
pub fn is_valid_email(s: &str) -> bool {
    let bs = s.as_bytes();
    if bs.is_empty() || bs.iter().any(|&b| b == 0 || b > 0x7F || b == b' ') {
        return false;
    }
    let Some(at) = s.find('@') else { return false };
    // Exactly one '@'.
    if s[at + 1..].contains('@') {
        return false;
    }
    let (local, domain) = (&s[..at], &s[at + 1..]);
    if local.is_empty() || domain.len() < 3 {
        return false;
    }
    match domain.find('.') {
        Some(0) => false,
        Some(i) => i + 1 < domain.len(),
        None => false,
    }
}
