//! Bit-level queries on the magnitude.

use crate::bigint::BigInt;
use crate::digit::BITS;

impl BigInt {
    /// Returns the number of trailing zero bits of the magnitude, and zero
    /// for the value zero.
    pub fn trailing_zeros(&self) -> u64 {
        let mut count = 0u64;
        for &d in self.data.iter() {
            if d == 0 {
                count += BITS as u64;
            } else {
                count += d.trailing_zeros() as u64;
                break;
            }
        }
        count
    }

    /// Leading zero bits within the most significant digit.
    pub(crate) fn clz_top(&self) -> u32 {
        self.data.last().map_or(0, |d| d.leading_zeros())
    }

    /// Returns the bit length of the magnitude: the position of the
    /// highest set bit plus one, or zero for the value zero.
    pub fn bits(&self) -> u64 {
        if self.data.is_empty() {
            return 0;
        }
        self.data.len() as u64 * BITS as u64 - self.clz_top() as u64
    }

    /// Returns `true` if the magnitude is a power of two. The sign is
    /// ignored, so `-4` reports `true`; zero reports `false`.
    pub fn is_power_of_two(&self) -> bool {
        match self.data.split_last() {
            None => false,
            Some((&top, rest)) => rest.iter().all(|&d| d == 0) && top.is_power_of_two(),
        }
    }
}
