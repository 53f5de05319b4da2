//! Exponentiation by squaring and the integer logarithm.

use std::cmp::Ordering;

use crate::bigint::multiplication::mul_signed;
use crate::bigint::BigInt;
use crate::error::Error;

impl BigInt {
    /// Raises `self` to `exp` by squaring over the exponent's binary
    /// expansion. `pow(x, 0)` is one for every `x`, including zero.
    ///
    /// Fails with a domain error when the exponent is negative.
    pub fn pow(&self, exp: &BigInt) -> Result<BigInt, Error> {
        if exp.is_negative() {
            return Err(Error::domain());
        }
        if exp.is_zero() {
            return Ok(BigInt::from(1u8));
        }
        if self.is_zero() {
            return Ok(BigInt::new());
        }

        let mut result = BigInt::from(1u8);
        let mut base = self.clone();
        let mut e = exp.clone();

        loop {
            if e.digits()[0] & 1 == 1 {
                result = mul_signed(&result, &base)?;
            }
            e = e.shr_mag(1)?;
            if e.is_zero() {
                break;
            }
            base = mul_signed(&base, &base)?;
        }

        Ok(result)
    }

    /// Returns the floor of the base-`base` logarithm of `self`, so
    /// `ilog(b^k, b) == k` exactly.
    ///
    /// Fails with a domain error unless `self > 0` and `base >= 2`.
    pub fn ilog(&self, base: u64) -> Result<BigInt, Error> {
        if !self.is_positive() || base < 2 {
            return Err(Error::domain());
        }

        if base.is_power_of_two() {
            // floor(log_{2^k} x) falls straight out of the bit length.
            let floor_log2 = self.bits() - 1;
            let ratio = base.trailing_zeros() as u64;
            return Ok(BigInt::from(floor_log2 / ratio));
        }

        let base = BigInt::from(base);
        let mut product = BigInt::from(1u8);
        let mut power: u64 = 0;

        // Count multiplications until the running product exceeds self;
        // the answer is one less.
        while product.cmp(self) != Ordering::Greater {
            product = mul_signed(&product, &base)?;
            power = power.checked_add(1).ok_or_else(Error::range)?;
        }

        Ok(BigInt::from(power - 1))
    }
}
