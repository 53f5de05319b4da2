//! Schoolbook multiplication with a double-width accumulator.

use std::ops::{Mul, MulAssign};

use crate::bigint::{zeroed, BigInt, ALLOC_FAILED};
use crate::digit::{mac_with_carry, Digit};
use crate::error::Error;

/// Multiply-accumulate by a single digit: `acc += b * c`. The caller must
/// leave room in `acc` for the final carry.
pub(super) fn mac_digit(acc: &mut [Digit], b: &[Digit], c: Digit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let mut b_iter = b.iter();

    for ai in acc.iter_mut() {
        if let Some(&bi) = b_iter.next() {
            *ai = mac_with_carry(*ai, bi, c, &mut carry);
        } else if carry != 0 {
            *ai = mac_with_carry(*ai, 0, c, &mut carry);
        } else {
            break;
        }
    }

    debug_assert_eq!(carry, 0);
}

/// Schoolbook `acc += b * c`, one digit row at a time. `acc` must hold at
/// least `b.len() + c.len()` digits.
pub(super) fn mac3(acc: &mut [Digit], b: &[Digit], c: &[Digit]) {
    let (x, y) = if b.len() < c.len() { (b, c) } else { (c, b) };

    for (i, &xi) in x.iter().enumerate() {
        mac_digit(&mut acc[i..], y, xi);
    }
}

/// Signed multiplication. Zero short-circuits; a multi-digit power-of-two
/// operand degenerates to a shift of the other; the result's sign is the
/// XOR of the input signs.
pub(super) fn mul_signed(a: &BigInt, b: &BigInt) -> Result<BigInt, Error> {
    if a.is_zero() || b.is_zero() {
        return Ok(BigInt::new());
    }

    let negative = a.is_negative() != b.is_negative();

    if a.digits().len() > 1 && a.is_power_of_two() {
        let mut out = b.shl_mag(a.trailing_zeros() as usize)?;
        out.fix_sign(negative);
        return Ok(out);
    }

    if b.digits().len() > 1 && b.is_power_of_two() {
        let mut out = a.shl_mag(b.trailing_zeros() as usize)?;
        out.fix_sign(negative);
        return Ok(out);
    }

    let mut acc = zeroed(a.digits().len() + b.digits().len())?;
    mac3(&mut acc, a.digits(), b.digits());
    Ok(BigInt::from_parts(negative, acc))
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        mul_signed(self, other).expect(ALLOC_FAILED)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        *self = mul_signed(self, other).expect(ALLOC_FAILED);
    }
}

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: BigInt) {
        *self *= &other;
    }
}
