//! Arbitrary-precision signed integers in a sign-magnitude
//! representation.
//!
//! The crate favors clarity and correctness over raw speed: magnitudes
//! are little-endian vectors of small digits (8 bits by default, wider
//! via the `digit-16`/`digit-32`/`digit-64` features), multiplication is
//! schoolbook, and division is restoring long division. On top of the
//! [`BigInt`] value type it provides the full operator matrix, bit
//! shifts, `pow`/`gcd`/`ilog`, conversions to and from the machine types
//! (including `f64`), and radix-aware parsing and printing with
//! C-flavored `0b`/`0o`/`0x` prefixes and scientific-notation input.
//!
//! ```
//! use sm_bigint::BigInt;
//!
//! let n: BigInt = "1e100".parse().unwrap();
//! let (q, r) = n.div_rem(&BigInt::from(7)).unwrap();
//! assert_eq!(&q * &BigInt::from(7) + &r, n);
//!
//! let beef: BigInt = "0xdeadbeef".parse().unwrap();
//! assert_eq!(beef.to_str_radix(10).unwrap(), "3735928559");
//! ```
//!
//! Not goals of this crate: constant-time behavior, sub-quadratic
//! multiplication, and modular arithmetic.

#[macro_use]
mod macros;

mod bigint;
mod cache;
pub mod digit;
mod error;
mod text;

pub use crate::bigint::{BigInt, Sign};
pub use crate::cache::init;
pub use crate::error::{Error, ErrorKind};
