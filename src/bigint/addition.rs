//! Magnitude addition and the signed `Add` family.

use std::cmp::Ordering::{Equal, Greater, Less};
use std::ops::{Add, AddAssign};

use crate::bigint::subtraction::{mag_delta, sub2};
use crate::bigint::{cmp_slice, zeroed, BigInt, DigitVec, ALLOC_FAILED};
use crate::digit::{adc, Digit};
use crate::error::Error;

/// Schoolbook `a += b` over raw digit slices. The caller must ensure `a`
/// is at least as long as `b`; the final carry is returned.
pub(super) fn __add2(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let mut b_iter = b.iter();

    for ai in a.iter_mut() {
        if let Some(&bi) = b_iter.next() {
            *ai = adc(*ai, bi, &mut carry);
        } else if carry != 0 {
            *ai = adc(*ai, 0, &mut carry);
        } else {
            break;
        }
    }

    carry
}

/// Magnitude `a += b`, growing `a` as needed (including for a final
/// carry).
pub(crate) fn add_assign_vec(a: &mut DigitVec, b: &[Digit]) -> Result<(), Error> {
    if a.len() < b.len() {
        a.try_reserve(b.len() - a.len())?;
        a.resize(b.len(), 0);
    }

    let carry = __add2(a, b);
    if carry != 0 {
        a.try_reserve(1)?;
        a.push(carry);
    }
    Ok(())
}

/// Sum of two magnitudes into fresh storage.
pub(super) fn mag_sum(a: &[Digit], b: &[Digit]) -> Result<DigitVec, Error> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // One extra slot absorbs the final carry.
    let mut out = zeroed(long.len() + 1)?;
    out[..long.len()].copy_from_slice(long);
    let carry = __add2(&mut out, short);
    debug_assert_eq!(carry, 0);
    Ok(out)
}

/// Signed addition: equal signs sum the magnitudes, opposite signs take
/// the difference under the larger operand's sign.
pub(super) fn add_signed(a: &BigInt, b: &BigInt) -> Result<BigInt, Error> {
    let a_neg = a.is_negative();
    let b_neg = b.is_negative();

    if a_neg == b_neg {
        return Ok(BigInt::from_parts(a_neg, mag_sum(a.digits(), b.digits())?));
    }

    match cmp_slice(a.digits(), b.digits()) {
        Greater => Ok(BigInt::from_parts(a_neg, mag_delta(a.digits(), b.digits())?)),
        Less => Ok(BigInt::from_parts(b_neg, mag_delta(b.digits(), a.digits())?)),
        Equal => Ok(BigInt::new()),
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        add_signed(self, other).expect(ALLOC_FAILED)
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        let self_neg = self.is_negative();
        let other_neg = other.is_negative();

        if self_neg == other_neg {
            add_assign_vec(&mut self.data, other.digits()).expect(ALLOC_FAILED);
            self.fix_sign(self_neg);
            return;
        }

        match cmp_slice(&self.data, other.digits()) {
            Greater => {
                // Borrow propagation runs in place when the destination is
                // the minuend.
                sub2(&mut self.data, other.digits());
                self.normalize();
                self.fix_sign(self_neg);
            }
            Less => {
                let mag = mag_delta(other.digits(), &self.data).expect(ALLOC_FAILED);
                *self = BigInt::from_parts(other_neg, mag);
            }
            Equal => {
                self.data.clear();
                self.fix_sign(false);
            }
        }
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: BigInt) {
        *self += &other;
    }
}

impl BigInt {
    /// Increments the value by one.
    pub fn inc(&mut self) {
        if self.is_negative() {
            self.mag_dec();
            self.fix_sign(true);
        } else {
            self.mag_inc();
            self.fix_sign(false);
        }
    }

    /// Adds one to the magnitude, growing by a digit on carry-out.
    pub(super) fn mag_inc(&mut self) {
        let mut carry: Digit = 1;
        for d in self.data.iter_mut() {
            *d = adc(*d, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }

        if carry != 0 {
            let len = self.data.len();
            self.resize(len + 1).expect(ALLOC_FAILED);
            self.data[len] = carry;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::MAX;

    #[test]
    fn sums_with_carry_propagation() {
        let a = BigInt::from(MAX as u128);
        let b = BigInt::from(1u8);
        assert_eq!(&a + &b, BigInt::from(MAX as u128 + 1));

        let a = BigInt::from(u64::MAX);
        assert_eq!(&a + &a, BigInt::from(u64::MAX as u128 * 2));
    }

    #[test]
    fn opposite_signs_take_the_difference() {
        assert_eq!(BigInt::from(5) + BigInt::from(-3), BigInt::from(2));
        assert_eq!(BigInt::from(3) + BigInt::from(-5), BigInt::from(-2));
        assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
        assert_eq!(BigInt::from(5) + BigInt::from(-5), BigInt::new());
    }

    #[test]
    fn add_assign_runs_in_place() {
        let mut x = BigInt::from(700);
        x += BigInt::from(-1000);
        assert_eq!(x, BigInt::from(-300));

        x += BigInt::from(300);
        assert!(x.is_zero());

        let mut x = BigInt::from(MAX as u128);
        x += BigInt::from(1);
        assert_eq!(x, BigInt::from(MAX as u128 + 1));
    }

    #[test]
    fn inc_crosses_zero() {
        let mut x = BigInt::from(-1);
        x.inc();
        assert!(x.is_zero());
        x.inc();
        assert_eq!(x, BigInt::from(1));

        let mut x = BigInt::from(MAX as u128);
        x.inc();
        assert_eq!(x, BigInt::from(MAX as u128 + 1));
    }
}
