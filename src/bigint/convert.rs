//! Conversions between `BigInt` and the machine types.

use num_traits::{FromPrimitive, ToPrimitive};

use crate::bigint::{BigInt, DigitVec};
use crate::digit::{Digit, BITS};
use crate::error::Error;

fn push_u128(data: &mut DigitVec, mut v: u128) {
    while v != 0 {
        data.push(v as Digit);
        v >>= BITS;
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(v: $t) -> BigInt {
                let mut data = DigitVec::new();
                push_u128(&mut data, v as u128);
                BigInt::from_parts(false, data)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(v: $t) -> BigInt {
                let mut data = DigitVec::new();
                push_u128(&mut data, v.unsigned_abs() as u128);
                BigInt::from_parts(v < 0, data)
            }
        }
    )*};
}

impl_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_from_signed!(i8 i16 i32 i64 i128 isize);

macro_rules! impl_try_from_unsigned {
    ($($t:ty)*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = Error;

            fn try_from(x: &BigInt) -> Result<$t, Error> {
                if x.is_negative() {
                    return Err(Error::range());
                }
                let mag = x.magnitude_u128().ok_or_else(Error::range)?;
                <$t>::try_from(mag).map_err(|_| Error::range())
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = Error;

            #[inline]
            fn try_from(x: BigInt) -> Result<$t, Error> {
                <$t>::try_from(&x)
            }
        }
    )*};
}

macro_rules! impl_try_from_signed {
    ($($t:ty)*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = Error;

            fn try_from(x: &BigInt) -> Result<$t, Error> {
                let mag = x.magnitude_u128().ok_or_else(Error::range)?;
                if x.is_negative() {
                    if mag > <$t>::MIN.unsigned_abs() as u128 {
                        return Err(Error::range());
                    }
                    // Covers the asymmetric most-negative value as well.
                    Ok((mag as $t).wrapping_neg())
                } else {
                    <$t>::try_from(mag).map_err(|_| Error::range())
                }
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = Error;

            #[inline]
            fn try_from(x: BigInt) -> Result<$t, Error> {
                <$t>::try_from(&x)
            }
        }
    )*};
}

impl_try_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_try_from_signed!(i8 i16 i32 i64 i128 isize);

impl BigInt {
    /// Assigns a `u64` in place, reusing the digit buffer.
    pub fn assign_u64(&mut self, v: u64) {
        self.data.clear();
        push_u128(&mut self.data, v as u128);
        self.fix_sign(false);
    }

    /// Assigns an `i64` in place, reusing the digit buffer.
    pub fn assign_i64(&mut self, v: i64) {
        self.data.clear();
        push_u128(&mut self.data, v.unsigned_abs() as u128);
        self.fix_sign(v < 0);
    }

    /// The magnitude bit-packed into a `u128`, or `None` if it is wider.
    fn magnitude_u128(&self) -> Option<u128> {
        if self.data.len() > 128 / BITS {
            return None;
        }
        let mut acc: u128 = 0;
        for (i, &d) in self.data.iter().enumerate() {
            acc |= (d as u128) << (i * BITS);
        }
        Some(acc)
    }

    /// Converts to `u64`, failing with a range error when the value is
    /// negative or too wide.
    #[inline]
    pub fn to_u64(&self) -> Result<u64, Error> {
        u64::try_from(self)
    }

    /// Converts to `i64`, failing with a range error when the value does
    /// not fit.
    #[inline]
    pub fn to_i64(&self) -> Result<i64, Error> {
        i64::try_from(self)
    }

    /// Converts to `f64`.
    ///
    /// Values that fit a machine integer convert exactly; wider values
    /// keep their top 64 bits of precision and are scaled by a power of
    /// two. When the binary exponent exceeds `f64::MAX_EXP - 1` the
    /// conversion fails with an overflow error; the mathematically
    /// nearest representable value is then a signed infinity, which is
    /// what [`ToPrimitive::to_f64`] returns for this case.
    pub fn to_f64(&self) -> Result<f64, Error> {
        if self.is_zero() {
            return Ok(0.0);
        }

        if self.is_negative() {
            if let Ok(v) = self.to_i64() {
                return Ok(v as f64);
            }
        } else if let Ok(v) = self.to_u64() {
            return Ok(v as f64);
        }

        let bits = self.bits();
        let exponent = bits - 64;
        if exponent > (f64::MAX_EXP - 1) as u64 {
            return Err(Error::overflow());
        }

        // Pack the top 64 bits of the magnitude into the mantissa, aligned
        // so the leading one bit sits at the top.
        let clz = self.clz_top() as u64;
        let mut acc: u128 = 0;
        let mut acc_bits: u64 = 0;
        for &d in self.data.iter().rev() {
            acc = (acc << BITS) | d as u128;
            acc_bits += BITS as u64;
            if acc_bits - clz >= 64 {
                break;
            }
        }
        let mantissa = (acc >> (acc_bits - clz - 64)) as u64;

        let value = mantissa as f64 * 2f64.powi(exponent as i32);
        Ok(if self.is_negative() { -value } else { value })
    }
}

impl ToPrimitive for BigInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        BigInt::to_i64(self).ok()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        BigInt::to_u64(self).ok()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        i128::try_from(self).ok()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        u128::try_from(self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        match BigInt::to_f64(self) {
            Ok(v) => Some(v),
            Err(_) => Some(if self.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
        }
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn machine_integer_round_trips() {
        assert_eq!(i64::try_from(&BigInt::from(i64::MIN)).unwrap(), i64::MIN);
        assert_eq!(i64::try_from(&BigInt::from(i64::MAX)).unwrap(), i64::MAX);
        assert_eq!(u64::try_from(&BigInt::from(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(
            i128::try_from(&BigInt::from(i128::MIN)).unwrap(),
            i128::MIN
        );
        assert_eq!(
            u128::try_from(&BigInt::from(u128::MAX)).unwrap(),
            u128::MAX
        );
        assert_eq!(i8::try_from(&BigInt::from(-128)).unwrap(), i8::MIN);
    }

    #[test]
    fn range_errors() {
        let err = u64::try_from(&BigInt::from(-1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = i64::try_from(&BigInt::from(u64::MAX)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = i64::try_from(&BigInt::from(i64::MIN as i128 - 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = u8::try_from(&BigInt::from(256)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let too_wide = BigInt::from(1u8) << 200;
        assert_eq!(too_wide.to_u64().unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn in_place_assignment() {
        let mut x = BigInt::from(u128::MAX);
        x.assign_i64(-42);
        assert_eq!(x, BigInt::from(-42));
        x.assign_u64(42);
        assert_eq!(x, BigInt::from(42));
        x.assign_i64(0);
        assert!(x.is_zero());
        x.assign_i64(i64::MIN);
        assert_eq!(x, BigInt::from(i64::MIN));
    }

    #[test]
    fn f64_conversion_is_exact_in_range() {
        assert_eq!(BigInt::new().to_f64().unwrap(), 0.0);
        assert_eq!(BigInt::from(12345).to_f64().unwrap(), 12345.0);
        assert_eq!(BigInt::from(-12345).to_f64().unwrap(), -12345.0);
        assert_eq!(
            BigInt::from(u64::MAX).to_f64().unwrap(),
            u64::MAX as f64
        );

        let big = BigInt::from(1u8) << 100;
        assert_eq!(big.to_f64().unwrap(), 2f64.powi(100));
        assert_eq!((-big).to_f64().unwrap(), -(2f64.powi(100)));
    }

    #[test]
    fn f64_conversion_overflows_past_the_dynamic_range() {
        let huge = BigInt::from(1u8) << 1100;
        assert_eq!(huge.to_f64().unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(ToPrimitive::to_f64(&huge), Some(f64::INFINITY));
        assert_eq!(ToPrimitive::to_f64(&-huge), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn primitive_trait_wiring() {
        assert_eq!(ToPrimitive::to_i64(&BigInt::from(-5)), Some(-5));
        assert_eq!(ToPrimitive::to_u64(&BigInt::from(-5)), None);
        assert_eq!(
            BigInt::from_u128(u128::MAX),
            Some(BigInt::from(u128::MAX))
        );
        assert_eq!(BigInt::from_i64(-7), Some(BigInt::from(-7)));
    }
}
