//! Binary (Stein) greatest common divisor.

use std::cmp::Ordering::Greater;
use std::mem;

use crate::bigint::subtraction::sub2;
use crate::bigint::{BigInt, ALLOC_FAILED};
use crate::error::Error;

impl BigInt {
    /// Returns the greatest common divisor of `self` and `other`,
    /// computed on magnitudes with the binary algorithm: the common power
    /// of two is factored out, then the smaller value is repeatedly
    /// subtracted from the larger and trailing zeros are shifted away.
    /// The result is never negative; `gcd(x, 0)` is `|x|`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        gcd_magnitudes(self, other).expect(ALLOC_FAILED)
    }
}

fn gcd_magnitudes(x: &BigInt, y: &BigInt) -> Result<BigInt, Error> {
    let mut a = x.abs();
    let mut b = y.abs();

    if a.is_zero() {
        return Ok(b);
    }
    if b.is_zero() {
        return Ok(a);
    }

    let a_zeros = a.trailing_zeros() as usize;
    let b_zeros = b.trailing_zeros() as usize;
    let common_zeros = a_zeros.min(b_zeros);

    a = a.shr_mag(a_zeros)?;
    b = b.shr_mag(b_zeros)?;

    loop {
        if a.cmp_magnitude(&b) == Greater {
            mem::swap(&mut a, &mut b);
        }

        // Both odd and a <= b, so the difference is even (or zero).
        sub2(&mut b.data, a.digits());
        b.normalize();

        if b.is_zero() {
            return a.shl_mag(common_zeros);
        }

        let tz = b.trailing_zeros() as usize;
        b = b.shr_mag(tz)?;
    }
}
