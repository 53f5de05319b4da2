//! Process-wide cache of small constants.
//!
//! The parser leans on pre-built values for its radix constants, the
//! digit values it accumulates, and the constant ten used to scale
//! scientific notation. The table covers `0..=16`, is built lazily on
//! first use, and lives for the rest of the process; [`init`] forces it
//! eagerly.

use lazy_static::lazy_static;

use crate::bigint::BigInt;

/// Largest value held by the small-number cache.
pub(crate) const SMALL_CACHE_MAX: u64 = 16;

lazy_static! {
    static ref SMALL: Vec<BigInt> = (0..=SMALL_CACHE_MAX).map(BigInt::from).collect();
}

/// Eagerly builds the small-number table the textual operations draw
/// their constants from.
///
/// Calling this is optional and idempotent: the table is created on first
/// use either way, and the lazy initialization is thread safe. The digit
/// configuration itself is validated at compile time.
pub fn init() {
    lazy_static::initialize(&SMALL);
}

#[inline]
pub(crate) fn small(n: usize) -> &'static BigInt {
    &SMALL[n]
}

#[inline]
pub(crate) fn ten() -> &'static BigInt {
    small(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_zero_through_sixteen() {
        init();
        init();
        for n in 0..=SMALL_CACHE_MAX {
            assert_eq!(*small(n as usize), BigInt::from(n));
        }
        assert_eq!(*ten(), BigInt::from(10u8));
    }
}
