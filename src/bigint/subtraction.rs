//! Magnitude subtraction and the signed `Sub` family.

use std::cmp::Ordering::Less;
use std::ops::{Sub, SubAssign};

use crate::bigint::{cmp_slice, trim_vec, zeroed, BigInt, DigitVec, Sign, ALLOC_FAILED};
use crate::digit::{sbb, Digit};
use crate::error::Error;

/// Schoolbook `a -= b` over raw digit slices with in-place borrow
/// propagation. Requires the minuend to be at least as large as the
/// subtrahend.
pub(super) fn sub2(a: &mut [Digit], b: &[Digit]) {
    let mut borrow = 0;
    let mut b_iter = b.iter();

    for ai in a.iter_mut() {
        if let Some(&bi) = b_iter.next() {
            *ai = sbb(*ai, bi, &mut borrow);
        } else if borrow != 0 {
            *ai = sbb(*ai, 0, &mut borrow);
        } else {
            break;
        }
    }

    assert!(
        borrow == 0 && b_iter.all(|x| *x == 0),
        "subtrahend exceeds minuend"
    );
}

/// Difference of two magnitudes into fresh storage. Requires `m >= s`.
pub(super) fn mag_delta(m: &[Digit], s: &[Digit]) -> Result<DigitVec, Error> {
    let mut out = zeroed(m.len())?;
    out.copy_from_slice(m);
    sub2(&mut out, s);
    trim_vec(&mut out);
    Ok(out)
}

/// Signed subtraction via the four-way sign table of `a - b`.
pub(super) fn sub_signed(a: &BigInt, b: &BigInt) -> Result<BigInt, Error> {
    let a_neg = a.is_negative();
    let b_neg = b.is_negative();

    if a_neg != b_neg {
        // Opposite signs: magnitudes add and the minuend's sign wins.
        let mag = super::addition::mag_sum(a.digits(), b.digits())?;
        return Ok(BigInt::from_parts(a_neg, mag));
    }

    match cmp_slice(a.digits(), b.digits()) {
        Less => Ok(BigInt::from_parts(
            !a_neg,
            mag_delta(b.digits(), a.digits())?,
        )),
        _ => Ok(BigInt::from_parts(a_neg, mag_delta(a.digits(), b.digits())?)),
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        sub_signed(self, other).expect(ALLOC_FAILED)
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, other: &BigInt) {
        let self_neg = self.is_negative();
        let other_neg = other.is_negative();

        if self_neg != other_neg {
            super::addition::add_assign_vec(&mut self.data, other.digits()).expect(ALLOC_FAILED);
            self.fix_sign(self_neg);
            return;
        }

        match cmp_slice(&self.data, other.digits()) {
            Less => {
                let mag = mag_delta(other.digits(), &self.data).expect(ALLOC_FAILED);
                *self = BigInt::from_parts(!self_neg, mag);
            }
            _ => {
                sub2(&mut self.data, other.digits());
                self.normalize();
                self.fix_sign(self_neg);
            }
        }
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: BigInt) {
        *self -= &other;
    }
}

impl BigInt {
    /// Decrements the value by one.
    pub fn dec(&mut self) {
        if self.is_zero() {
            self.data.push(1);
            self.sign = Sign::Minus;
        } else if self.is_negative() {
            self.mag_inc();
            self.fix_sign(true);
        } else {
            self.mag_dec();
            self.fix_sign(false);
        }
    }

    /// Subtracts one from the magnitude. Defined only for non-zero values.
    pub(super) fn mag_dec(&mut self) {
        debug_assert!(!self.data.is_empty());

        let mut borrow: Digit = 1;
        for d in self.data.iter_mut() {
            *d = sbb(*d, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
        debug_assert_eq!(borrow, 0);
        trim_vec(&mut self.data);
    }
}
