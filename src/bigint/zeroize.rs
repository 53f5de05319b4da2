#![cfg(feature = "zeroize")]

use zeroize::Zeroize;

use crate::bigint::{BigInt, Sign};

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.data.as_mut_slice().zeroize();
        self.data.clear();
        self.sign = Sign::NoSign;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroize_clears_value_and_sign() {
        let mut x = BigInt::from(-0x1234_5678_9abc_def0i64);
        x.zeroize();
        assert!(x.is_zero());
        assert_eq!(x.sign(), Sign::NoSign);
    }
}
