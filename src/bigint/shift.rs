//! Bit shifts across digit boundaries.
//!
//! Shifts operate on the magnitude and preserve the sign, which matches
//! truncation toward zero: `x >> n` equals `x / 2^n` under truncating
//! division even for negative `x`.

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use num_integer::Integer;

use crate::bigint::{zeroed, BigInt, ALLOC_FAILED};
use crate::digit::BITS;
use crate::error::Error;

impl BigInt {
    /// Magnitude left shift by a machine-integer bit count.
    pub(crate) fn shl_mag(&self, n: usize) -> Result<BigInt, Error> {
        if n == 0 || self.is_zero() {
            return Ok(self.clone());
        }

        let (digits, bits) = n.div_rem(&BITS);
        let len = self.data.len();
        let mut out = zeroed(len + digits + (bits != 0) as usize)?;

        if bits == 0 {
            out[digits..].copy_from_slice(&self.data);
        } else {
            // Unaligned shifts pull bits from two neighboring digits.
            let mut carry = 0;
            for (i, &d) in self.data.iter().enumerate() {
                out[digits + i] = (d << bits) | carry;
                carry = d >> (BITS - bits);
            }
            out[digits + len] = carry;
        }

        Ok(BigInt::from_parts(self.is_negative(), out))
    }

    /// Magnitude right shift by a machine-integer bit count. Shifting by
    /// the full bit length or more yields zero.
    pub(crate) fn shr_mag(&self, n: usize) -> Result<BigInt, Error> {
        if n == 0 || self.is_zero() {
            return Ok(self.clone());
        }

        let (digits, bits) = n.div_rem(&BITS);
        let len = self.data.len();
        if digits >= len || (digits == len - 1 && self.data[len - 1] >> bits == 0) {
            return Ok(BigInt::new());
        }

        let new_len = len - digits;
        let mut out = zeroed(new_len)?;

        if bits == 0 {
            out.copy_from_slice(&self.data[digits..]);
        } else {
            for i in 0..new_len {
                let lo = self.data[digits + i] >> bits;
                let hi = if digits + i + 1 < len {
                    self.data[digits + i + 1] << (BITS - bits)
                } else {
                    0
                };
                out[i] = hi | lo;
            }
        }

        Ok(BigInt::from_parts(self.is_negative(), out))
    }

    /// Left shift with the bit count supplied as a `BigInt`.
    ///
    /// Fails with a domain error for a negative count and a range error
    /// for a count that does not fit `usize`.
    pub fn shl_big(&self, n: &BigInt) -> Result<BigInt, Error> {
        self.shl_mag(big_shift_count(n)?)
    }

    /// Right shift with the bit count supplied as a `BigInt`.
    ///
    /// Fails with a domain error for a negative count and a range error
    /// for a count that does not fit `usize`.
    pub fn shr_big(&self, n: &BigInt) -> Result<BigInt, Error> {
        self.shr_mag(big_shift_count(n)?)
    }
}

fn big_shift_count(n: &BigInt) -> Result<usize, Error> {
    if n.is_negative() {
        return Err(Error::domain());
    }
    let bits = n.to_u64()?;
    usize::try_from(bits).map_err(|_| Error::range())
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> BigInt {
        self.shl_mag(n).expect(ALLOC_FAILED)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, n: usize) -> BigInt {
        (&self) << n
    }
}

impl ShlAssign<usize> for BigInt {
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        *self = &*self << n;
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> BigInt {
        self.shr_mag(n).expect(ALLOC_FAILED)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, n: usize) -> BigInt {
        (&self) >> n
    }
}

impl ShrAssign<usize> for BigInt {
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        *self = &*self >> n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn shifts_around_the_digit_boundary() {
        let one = BigInt::from(1u8);
        for n in [BITS - 1, BITS, BITS + 1, 2 * BITS - 1] {
            assert_eq!(&one << n, BigInt::from(1u128 << n));
        }

        let x = BigInt::from(0xabcdu32);
        for n in [0, 1, BITS - 1, BITS, BITS + 1] {
            assert_eq!(&x << n, BigInt::from((0xabcdu128) << n));
            assert_eq!(&(&x << n) >> n, x);
        }
    }

    #[test]
    fn shr_past_the_bit_length_is_zero() {
        let x = BigInt::from(0xffffu32);
        assert_eq!(&x >> 16, BigInt::new());
        assert_eq!(&x >> 17, BigInt::new());
        assert_eq!(&x >> (BITS * 200), BigInt::new());
        assert_eq!(&x >> 15, BigInt::from(1));
    }

    #[test]
    fn shifts_preserve_the_sign() {
        let x = BigInt::from(-40);
        assert_eq!(&x << 2, BigInt::from(-160));
        assert_eq!(&x >> 2, BigInt::from(-10));
        // -1 >> 1 truncates toward zero.
        assert_eq!(BigInt::from(-1) >> 1, BigInt::new());
    }

    #[test]
    fn bigint_counts_are_validated() {
        let x = BigInt::from(3);
        assert_eq!(x.shl_big(&BigInt::from(4)).unwrap(), BigInt::from(48));
        assert_eq!(x.shr_big(&BigInt::from(1)).unwrap(), BigInt::from(1));

        let err = x.shl_big(&BigInt::from(-1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let huge = BigInt::from(u128::MAX);
        let err = x.shl_big(&huge).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
