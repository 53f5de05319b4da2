//! Restoring long division.
//!
//! The general path works on a window into a copy of the numerator's
//! digits. The window initially covers the top `d.len()` digits; the
//! remaining low digits stay hidden and are unveiled one at a time as the
//! running value drops below the divisor, which is the slice rendition of
//! the reference's pointer-offset trick.

use std::cmp::Ordering::{Equal, Greater, Less};
use std::ops::{Div, DivAssign, Rem, RemAssign};

use num_integer::Integer;

use crate::bigint::addition::add_assign_vec;
use crate::bigint::subtraction::sub2;
use crate::bigint::{cmp_slice, trim_vec, zeroed, BigInt, DigitVec};
use crate::digit::{self, div_wide, Digit, BITS};
use crate::error::Error;

impl BigInt {
    /// Computes quotient and remainder of `self / d` simultaneously, with
    /// truncation toward zero: the quotient is negative exactly when the
    /// operand signs differ, and a non-zero remainder takes the
    /// numerator's sign. Fails with a domain error when `d` is zero.
    pub fn div_rem(&self, d: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if d.is_zero() {
            return Err(Error::domain());
        }

        let n_neg = self.is_negative();
        let q_neg = n_neg != d.is_negative();

        // Anything divided by ±1 is ±itself with no remainder.
        if d.data.len() == 1 && d.data[0] == 1 {
            let mut q = self.clone();
            q.fix_sign(q_neg);
            return Ok((q, BigInt::new()));
        }

        match cmp_slice(&self.data, &d.data) {
            Less => return Ok((BigInt::new(), self.clone())),
            Equal => {
                let mut q = BigInt::from(1u8);
                q.fix_sign(q_neg);
                return Ok((q, BigInt::new()));
            }
            Greater => {}
        }

        if d.is_power_of_two() {
            let k = d.trailing_zeros() as usize;
            let mut q = self.shr_mag(k)?;
            q.fix_sign(q_neg);
            let mut r = self.low_bits(k)?;
            r.fix_sign(n_neg);
            return Ok((q, r));
        }

        let (q_mag, r_mag) = div_rem_general(&self.data, &d.data)?;
        Ok((
            BigInt::from_parts(q_neg, q_mag),
            BigInt::from_parts(n_neg, r_mag),
        ))
    }

    /// The low `k` bits of the magnitude; the remainder of a division by
    /// `2^k`.
    fn low_bits(&self, k: usize) -> Result<BigInt, Error> {
        let (digits, bits) = k.div_rem(&BITS);
        let take = (digits + (bits != 0) as usize).min(self.data.len());
        let mut out = zeroed(take)?;
        out.copy_from_slice(&self.data[..take]);
        if bits != 0 && digits < take {
            out[digits] &= ((1 as Digit) << bits) - 1;
        }
        Ok(BigInt::from_parts(false, out))
    }
}

/// Long division of magnitudes. The caller has dispatched the fast paths:
/// `|n| > |d|`, `|d| > 1`, and `d` is not a power of two.
fn div_rem_general(n: &[Digit], d: &[Digit]) -> Result<(DigitVec, DigitVec), Error> {
    let n_len = n.len();
    let d_len = d.len();
    debug_assert!(n_len >= d_len);

    let mut inter = zeroed(n_len)?;
    inter.copy_from_slice(n);

    // The window starts at the top d_len digits; `start` counts the
    // hidden digits below it.
    let mut start = n_len - d_len;
    let mut win_len = d_len;

    // Quotient digits, most significant first.
    let mut q_digits = DigitVec::new();
    q_digits.try_reserve(n_len)?;
    let mut acc = DigitVec::new();

    'outer: loop {
        // While the window is smaller than the divisor, unveil the next
        // hidden digit. An unveil that leaves the window short emits a
        // zero quotient digit.
        while cmp_slice(&inter[start..start + win_len], d) == Less {
            if start == 0 {
                break 'outer;
            }
            start -= 1;
            win_len += 1;
            if cmp_slice(&inter[start..start + win_len], d) == Less {
                q_digits.push(0);
            }
        }

        // Find the largest single-digit factor whose multiple of d fits
        // the window, accumulating d and backing off once on overshoot.
        acc.clear();
        for factor in 1..=digit::MAX {
            add_assign_vec(&mut acc, d)?;
            let cmp = cmp_slice(&acc, &inter[start..start + win_len]);
            if cmp != Less || factor == digit::MAX {
                let f = if cmp == Greater {
                    sub2(&mut acc, d);
                    factor - 1
                } else {
                    factor
                };
                sub2(&mut inter[start..start + win_len], &acc);
                while win_len > 0 && inter[start + win_len - 1] == 0 {
                    win_len -= 1;
                }
                q_digits.push(f);
                break;
            }
        }

        if start == 0 {
            break;
        }
    }

    // All digits are unveiled; what is left in the window is the
    // remainder.
    q_digits.reverse();
    trim_vec(&mut q_digits);
    inter.truncate(win_len);
    Ok((q_digits, inter))
}

/// Divides a magnitude by a single digit in place, returning the
/// remainder.
pub(crate) fn div_rem_digit_in_place(data: &mut DigitVec, divisor: Digit) -> Digit {
    debug_assert!(divisor > 0);

    let mut rem: Digit = 0;
    for d in data.iter_mut().rev() {
        let (q, r) = div_wide(rem, *d, divisor);
        *d = q;
        rem = r;
    }
    trim_vec(data);
    rem
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((q, _)) => q,
            Err(e) => panic!("BigInt division failed: {}", e),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}

impl DivAssign<BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: BigInt) {
        *self /= &other;
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((_, r)) => r,
            Err(e) => panic!("BigInt remainder failed: {}", e),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}

impl RemAssign<BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: BigInt) {
        *self %= &other;
    }
}
