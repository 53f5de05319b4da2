//! Textual input and output.
//!
//! The parser understands an optional sign, the radix prefixes `0b`, `0o`
//! and `0x` (a bare leading `0` selects octal, as in C), and — in decimal
//! only — a fractional part and a non-negative scientific-notation
//! exponent. The printer emits radix 2, 8, 10 or 16 with the matching
//! prefix.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::bigint::{div_rem_digit_in_place, BigInt, DigitVec};
use crate::cache;
use crate::digit::{Digit, BITS, HEX_WIDTH};
use crate::error::Error;

impl BigInt {
    /// Parses a string, also reporting where the unused fractional residue
    /// of a scientific-notation literal begins.
    ///
    /// After the exponent is spent scaling the mantissa, any remaining
    /// significant fractional digits are returned as a slice of the input
    /// running to the first non-digit character: `"-1.2345e3"` parses to
    /// `-1234` with residue `"5"`. The residue is `None` when the
    /// fraction is fully consumed or the literal has no exponent.
    ///
    /// Malformed input fails with an invalid error.
    pub fn parse_with_fraction(s: &str) -> Result<(BigInt, Option<&str>), Error> {
        let bytes = s.as_bytes();
        let mut i = 0;

        let mut negative = false;
        if let Some(&c) = bytes.first() {
            if c == b'+' || c == b'-' {
                negative = c == b'-';
                i = 1;
            }
        }

        let mut base: u32 = 10;
        if i < bytes.len() && bytes[i] == b'0' {
            match bytes.get(i + 1) {
                Some(b'b') | Some(b'B') => {
                    base = 2;
                    i += 2;
                }
                Some(b'o') | Some(b'O') => {
                    base = 8;
                    i += 2;
                }
                Some(b'x') | Some(b'X') => {
                    base = 16;
                    i += 2;
                }
                _ => {
                    // A bare leading zero means octal unless a decimal
                    // point follows somewhere.
                    base = if bytes[i + 1..].contains(&b'.') { 10 } else { 8 };
                    i += 1;
                }
            }
        }

        let mut result = BigInt::new();
        let mut exponent: Option<BigInt> = None;
        let mut e_idx: Option<usize> = None;
        let mut decimal: Option<usize> = None;
        let mut eom: Option<usize> = None;

        while i < bytes.len() {
            let c = bytes[i];

            if base == 10 {
                if c == b'e' || c == b'E' {
                    // A second exponent marker is malformed.
                    if exponent.is_some() {
                        return Err(Error::invalid());
                    }
                    if decimal.is_some() {
                        eom = Some(i - 1);
                    }
                    exponent = Some(BigInt::new());
                    e_idx = Some(i);
                    i += 1;
                    continue;
                }
                if c == b'.' {
                    // Only one decimal point, and only before the
                    // exponent.
                    if exponent.is_some() || decimal.is_some() {
                        return Err(Error::invalid());
                    }
                    decimal = Some(i);
                    i += 1;
                    continue;
                }
            }

            let value = match c {
                b'0'..=b'9' => (c - b'0') as u32,
                b'a'..=b'z' => (c - b'a') as u32 + 10,
                b'A'..=b'Z' => (c - b'A') as u32 + 10,
                _ => return Err(Error::invalid()),
            };
            if value >= base {
                return Err(Error::invalid());
            }

            // Digits right of the decimal point are validated but only
            // consumed later, by the exponent scaling below.
            if decimal.is_none() || exponent.is_some() {
                let dest = match exponent.as_mut() {
                    Some(e) => e,
                    None => &mut result,
                };
                *dest *= cache::small(base as usize);
                *dest += cache::small(value as usize);
            }

            i += 1;
        }

        // "1e" with nothing after the marker is malformed.
        if let Some(idx) = e_idx {
            if idx + 1 == bytes.len() {
                return Err(Error::invalid());
            }
        }

        let mut fraction = None;
        if let (Some(exp), Some(dec)) = (exponent.as_mut(), decimal) {
            let mut eom = eom.unwrap_or(bytes.len() - 1);

            // Trailing zeros of the fraction are never significant.
            while bytes[eom] == b'0' {
                eom -= 1;
            }

            if eom != dec {
                let mut pos = dec + 1;
                while !exp.is_zero() && pos <= eom {
                    exp.dec();
                    result *= cache::ten();
                    result += cache::small((bytes[pos] - b'0') as usize);
                    pos += 1;
                }

                if pos <= eom {
                    let end = bytes[pos..]
                        .iter()
                        .position(|c| !c.is_ascii_digit())
                        .map_or(s.len(), |off| pos + off);
                    fraction = Some(&s[pos..end]);
                }
            }
        }

        if let Some(exp) = exponent {
            let scale = cache::ten().pow(&exp)?;
            result *= scale;
        }

        result.fix_sign(negative);
        Ok((result, fraction))
    }

    /// Formats the value in the given radix, which must be 2, 8, 10
    /// or 16. Non-decimal radixes carry a `0b`/`0o`/`0x` prefix; negative
    /// values a leading `-` before it. An unsupported radix fails with an
    /// invalid error.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, Error> {
        match radix {
            2 | 8 | 10 | 16 => Ok(self.format_radix(radix)),
            _ => Err(Error::invalid()),
        }
    }

    /// Writes the radix representation into `buf` and returns the byte
    /// count written. Fails with a range error when the buffer is too
    /// small and an invalid error for an unsupported radix.
    pub fn print_radix_to(&self, buf: &mut [u8], radix: u32) -> Result<usize, Error> {
        let s = self.to_str_radix(radix)?;
        if buf.len() < s.len() {
            return Err(Error::range());
        }
        buf[..s.len()].copy_from_slice(s.as_bytes());
        Ok(s.len())
    }

    fn format_radix(&self, radix: u32) -> String {
        let numerals = self.mag_str(radix, false);
        let mut out = String::with_capacity(numerals.len() + 4);
        if self.is_negative() {
            out.push('-');
        }
        match radix {
            2 => out.push_str("0b"),
            8 => out.push_str("0o"),
            16 => out.push_str("0x"),
            _ => {}
        }
        out.push_str(&numerals);
        out
    }

    /// The magnitude's numerals, most significant first, without sign or
    /// prefix.
    fn mag_str(&self, radix: u32, upper: bool) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }

        let mut out = match radix {
            // Strip bits off the low end, then reverse.
            2 => {
                let mut chars = Vec::with_capacity(self.digits().len() * BITS);
                for &d in self.digits() {
                    let mut d = d;
                    for _ in 0..BITS {
                        chars.push(b'0' + (d & 1) as u8);
                        d >>= 1;
                    }
                }
                while chars.last() == Some(&b'0') {
                    chars.pop();
                }
                chars.reverse();
                chars.into_iter().map(char::from).collect()
            }
            // Four bits per numeral divides every digit width, so hex can
            // emit fixed-width groups, most significant digit first.
            16 => {
                let mut s = String::with_capacity(self.digits().len() * HEX_WIDTH);
                for &d in self.digits().iter().rev() {
                    let _ = write!(s, "{:0width$x}", d, width = HEX_WIDTH);
                }
                s.trim_start_matches('0').to_owned()
            }
            // Octal groups straddle digit boundaries, so radix 8 shares
            // the divide-and-collect path with decimal.
            _ => {
                let divisor = radix as Digit;
                let mut acc = DigitVec::from_slice(self.digits());
                let mut chars = Vec::new();
                while !acc.is_empty() {
                    let r = div_rem_digit_in_place(&mut acc, divisor);
                    chars.push(b'0' + r as u8);
                }
                chars.reverse();
                chars.into_iter().map(char::from).collect()
            }
        };

        if upper {
            out.make_ascii_uppercase();
        }
        out
    }
}

impl FromStr for BigInt {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, Error> {
        BigInt::parse_with_fraction(s).map(|(value, _)| value)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.mag_str(10, false))
    }
}

impl fmt::Debug for BigInt {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.mag_str(2, false))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.mag_str(8, false))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.mag_str(16, false))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.mag_str(16, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(s: &str) -> BigInt {
        s.parse().unwrap_or_else(|e| panic!("parse {:?}: {}", s, e))
    }

    #[test]
    fn plain_decimal() {
        assert_eq!(parse("0"), BigInt::new());
        assert_eq!(parse("12345"), BigInt::from(12345));
        assert_eq!(parse("+12345"), BigInt::from(12345));
        assert_eq!(parse("-12345"), BigInt::from(-12345));
        assert_eq!(parse("-0"), BigInt::new());
        assert_eq!(parse("18446744073709551616"), BigInt::from(1u128 << 64));
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(parse("0xdeadbeef"), BigInt::from(3_735_928_559u64));
        assert_eq!(parse("0XDEADBEEF"), BigInt::from(3_735_928_559u64));
        assert_eq!(parse("0b101"), BigInt::from(5));
        assert_eq!(parse("0o17"), BigInt::from(15));
        assert_eq!(parse("017"), BigInt::from(15));
        assert_eq!(parse("00"), BigInt::new());
        assert_eq!(parse("0x0"), BigInt::new());
        assert_eq!(parse("0b0"), BigInt::new());
        assert_eq!(parse("-0x10"), BigInt::from(-16));
    }

    #[test]
    fn hex_digits_include_e() {
        // 'e' is an ordinary digit outside radix 10.
        assert_eq!(parse("0xe"), BigInt::from(14));
        assert_eq!(parse("0x1e2"), BigInt::from(0x1e2));
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(parse("1e0"), BigInt::from(1));
        assert_eq!(parse("1e3"), BigInt::from(1000));
        assert_eq!(parse("12E3"), BigInt::from(12000));
        assert_eq!(parse("1.5e1"), BigInt::from(15));
        assert_eq!(parse("1.5e0"), BigInt::from(1));
        assert_eq!(parse("1.50e1"), BigInt::from(15));
        assert_eq!(parse("-1.2345e3"), BigInt::from(-1234));
        assert_eq!(
            parse("1e100"),
            BigInt::from(10u8).pow(&BigInt::from(100)).unwrap()
        );
    }

    #[test]
    fn fraction_residue() {
        let (value, frac) = BigInt::parse_with_fraction("-1.2345e3").unwrap();
        assert_eq!(value, BigInt::from(-1234));
        assert_eq!(frac, Some("5"));

        let (value, frac) = BigInt::parse_with_fraction("1.5e0").unwrap();
        assert_eq!(value, BigInt::from(1));
        assert_eq!(frac, Some("5"));

        let (value, frac) = BigInt::parse_with_fraction("1.5e1").unwrap();
        assert_eq!(value, BigInt::from(15));
        assert_eq!(frac, None);

        // Without an exponent the fraction is ignored entirely.
        let (value, frac) = BigInt::parse_with_fraction("1.5").unwrap();
        assert_eq!(value, BigInt::from(1));
        assert_eq!(frac, None);

        // Trailing zeros are not significant.
        let (value, frac) = BigInt::parse_with_fraction("2.5000e1").unwrap();
        assert_eq!(value, BigInt::from(25));
        assert_eq!(frac, None);
    }

    #[test]
    fn empty_and_prefix_only_inputs_are_zero() {
        // The reference parser treats these as zero.
        assert_eq!(parse(""), BigInt::new());
        assert_eq!(parse("-"), BigInt::new());
        assert_eq!(parse("0x"), BigInt::new());
    }

    #[test]
    fn malformed_inputs() {
        for s in [
            "12a", "1.2.3", "1e", "1E", "1e-5", "1e+5", "1e5e5", "08", "0b2", "0o8", "0xg",
            "5.0.e1", "1.2e3.4", "abc", " 1",
        ] {
            let err = s.parse::<BigInt>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Invalid, "input {:?}", s);
        }
    }

    #[test]
    fn radix_formatting() {
        let x = BigInt::from(3_735_928_559u64);
        assert_eq!(x.to_str_radix(16).unwrap(), "0xdeadbeef");
        assert_eq!(x.to_str_radix(10).unwrap(), "3735928559");
        assert_eq!(BigInt::from(5).to_str_radix(2).unwrap(), "0b101");
        assert_eq!(BigInt::from(15).to_str_radix(8).unwrap(), "0o17");
        // Octal groups straddle the digit boundary.
        assert_eq!(BigInt::from(256).to_str_radix(8).unwrap(), "0o400");
        assert_eq!(BigInt::from(1u64 << 33).to_str_radix(8).unwrap(), "0o100000000000");
        assert_eq!(BigInt::from(-16).to_str_radix(16).unwrap(), "-0x10");
        assert_eq!(BigInt::new().to_str_radix(16).unwrap(), "0x0");
        assert_eq!(BigInt::new().to_str_radix(10).unwrap(), "0");

        let err = x.to_str_radix(7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invalid);
    }

    #[test]
    fn print_into_a_buffer() {
        let x = BigInt::from(-255);
        let mut buf = [0u8; 16];
        let n = x.print_radix_to(&mut buf, 16).unwrap();
        assert_eq!(&buf[..n], b"-0xff");

        let mut small = [0u8; 4];
        let err = x.print_radix_to(&mut small, 16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = x.print_radix_to(&mut buf, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invalid);
    }

    #[test]
    fn display_and_format_traits() {
        let x = BigInt::from(-255);
        assert_eq!(format!("{}", x), "-255");
        assert_eq!(format!("{:x}", x), "-ff");
        assert_eq!(format!("{:#x}", x), "-0xff");
        assert_eq!(format!("{:X}", x), "-FF");
        assert_eq!(format!("{:#b}", BigInt::from(5)), "0b101");
        assert_eq!(format!("{:#o}", BigInt::from(15)), "0o17");
        assert_eq!(format!("{}", BigInt::new()), "0");
        assert_eq!(format!("{:>6}", BigInt::from(42)), "    42");
    }

    #[test]
    fn no_negative_zero_in_output() {
        assert_eq!(parse("-0").to_str_radix(10).unwrap(), "0");
        assert_eq!((BigInt::from(-1) + BigInt::from(1)).to_string(), "0");
    }

    #[test]
    fn round_trips_in_every_radix() {
        let values = [
            "0",
            "1",
            "-1",
            "255",
            "256",
            "-4294967296",
            "18446744073709551617",
            "-340282366920938463463374607431768211455",
        ];
        for v in values {
            let x = parse(v);
            for radix in [2u32, 8, 10, 16] {
                let s = x.to_str_radix(radix).unwrap();
                assert_eq!(s.parse::<BigInt>().unwrap(), x, "radix {} of {}", radix, v);
            }
        }
    }
}
