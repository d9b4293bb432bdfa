//! Constructing big integers from text and binary input.

use core::str::FromStr;

use crate::bigint::{BigInt, Sign};
use crate::error::{Error, ErrorCode, Result};
use crate::math::{small, Limb, DECIMAL_CHUNK_DIGITS, LIMB_BITS, POW10_LIMB};

/// Hex digits that fit in one limb.
const HEX_CHUNK_DIGITS: usize = LIMB_BITS / 4;

/// A text radix for parsing and formatting.
///
/// The numeric value of each variant is the base itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Radix {
    /// Base 10, digits `0-9`.
    Decimal = 10,
    /// Base 16, digits `0-9a-fA-F`. Formatting emits lowercase.
    Hexadecimal = 16,
}

/// Decode one digit character, or `None` if it is outside the radix.
fn digit(b: u8, radix: Radix) -> Option<Limb> {
    (b as char).to_digit(radix as u32).map(|d| d as Limb)
}

impl BigInt {
    /// Parse a value from text in the given radix.
    ///
    /// The accepted shape is an optional `-`, then for hexadecimal an
    /// optional `x`, `X`, `0x`, or `0X` marker, then one or more digits.
    /// No whitespace and no embedded separators are accepted. On failure
    /// the error carries the 1-based position of the offending byte.
    ///
    /// ```
    /// use mpint::{BigInt, Radix};
    ///
    /// let n = BigInt::from_text("-ff", Radix::Hexadecimal)?;
    /// assert_eq!(n.to_text(Radix::Decimal), "-255");
    ///
    /// let err = BigInt::from_text("12a4", Radix::Decimal).unwrap_err();
    /// assert_eq!(err.position(), 3);
    /// # Ok::<(), mpint::Error>(())
    /// ```
    pub fn from_text(text: &str, radix: Radix) -> Result<BigInt> {
        let bytes = text.as_bytes();
        let mut pos = 0;

        let sign = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                Sign::Negative
            }
            _ => Sign::Positive,
        };

        if radix == Radix::Hexadecimal {
            // Optional marker, with or without the leading zero. A bare
            // "0" must not be eaten as half a marker.
            match &bytes[pos..] {
                [b'x' | b'X', ..] => pos += 1,
                [b'0', b'x' | b'X', ..] => pos += 2,
                _ => {}
            }
        }

        let digits = &bytes[pos..];
        if digits.is_empty() {
            return Err(Error::parse(ErrorCode::InvalidCharacter, pos + 1));
        }
        for (i, &b) in digits.iter().enumerate() {
            if digit(b, radix).is_none() {
                return Err(Error::parse(ErrorCode::InvalidCharacter, pos + i + 1));
            }
        }

        let mag = match radix {
            Radix::Decimal => accumulate_decimal(digits)?,
            Radix::Hexadecimal => accumulate_hex(digits)?,
        };
        Ok(BigInt::from_sign_mag(sign, mag))
    }

    /// Parse a value from a self-describing literal.
    ///
    /// An `x` or `X` marker after the optional sign, with or without a
    /// leading zero, selects hexadecimal; anything else is decimal. This is
    /// the form `FromStr` and the serde deserializer accept.
    pub fn from_literal(text: &str) -> Result<BigInt> {
        let bytes = text.as_bytes();
        let unsigned = match bytes.first() {
            Some(b'-') => &bytes[1..],
            _ => bytes,
        };
        let radix = match unsigned {
            [b'x' | b'X', ..] | [b'0', b'x' | b'X', _, ..] => Radix::Hexadecimal,
            _ => Radix::Decimal,
        };
        BigInt::from_text(text, radix)
    }

    /// Interpret bytes as an unsigned big-endian magnitude.
    ///
    /// An empty slice and a slice of zero bytes both give zero; leading
    /// zero bytes are accepted and ignored.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<BigInt> {
        const LIMB_BYTES: usize = LIMB_BITS / 8;

        let mut mag: Vec<Limb> = Vec::new();
        mag.try_reserve(bytes.len().div_ceil(LIMB_BYTES))
            .map_err(|_| Error::new(ErrorCode::AllocationFailure))?;
        for chunk in bytes.rchunks(LIMB_BYTES) {
            let mut limb: Limb = 0;
            for &b in chunk {
                limb = (limb << 8) | (b as Limb);
            }
            mag.push(limb);
        }
        Ok(BigInt::from_sign_mag(Sign::Positive, mag))
    }
}

/// Horner accumulation in chunks of nine (or nineteen) digits, so the
/// whole-number multiply runs once per chunk rather than once per digit.
fn accumulate_decimal(digits: &[u8]) -> Result<Vec<Limb>> {
    let mut mag: Vec<Limb> = Vec::new();
    // Ten decimal digits never need more than 34 bits.
    mag.try_reserve(digits.len() * 4 / LIMB_BITS + 1)
        .map_err(|_| Error::new(ErrorCode::AllocationFailure))?;

    for chunk in digits.chunks(DECIMAL_CHUNK_DIGITS) {
        let mut value: Limb = 0;
        for &b in chunk {
            value = value * 10 + (b - b'0') as Limb;
        }
        small::imul(&mut mag, POW10_LIMB[chunk.len()]);
        small::iadd(&mut mag, value);
    }
    small::normalize(&mut mag);
    Ok(mag)
}

/// Hex digits map straight onto limbs; build them from the least
/// significant end of the text.
fn accumulate_hex(digits: &[u8]) -> Result<Vec<Limb>> {
    let mut mag: Vec<Limb> = Vec::new();
    mag.try_reserve(digits.len().div_ceil(HEX_CHUNK_DIGITS))
        .map_err(|_| Error::new(ErrorCode::AllocationFailure))?;

    for chunk in digits.rchunks(HEX_CHUNK_DIGITS) {
        let mut limb: Limb = 0;
        for &b in chunk {
            // Validated above, so the unwrap_or arm is unreachable.
            limb = (limb << 4) | digit(b, Radix::Hexadecimal).unwrap_or(0);
        }
        mag.push(limb);
    }
    small::normalize(&mut mag);
    Ok(mag)
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::from_literal(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_parse() {
        let n = BigInt::from_text("12345678901234567890", Radix::Decimal).unwrap();
        assert_eq!(n, BigInt::from(12345678901234567890u64));

        let n = BigInt::from_text("-42", Radix::Decimal).unwrap();
        assert_eq!(n, BigInt::from(-42));

        assert!(BigInt::from_text("0", Radix::Decimal).unwrap().is_zero());
        assert!(BigInt::from_text("000", Radix::Decimal).unwrap().is_zero());
    }

    #[test]
    fn hex_parse_markers() {
        for text in ["ff", "xff", "Xff", "0xff", "0Xff", "0XFF"] {
            let n = BigInt::from_text(text, Radix::Hexadecimal).unwrap();
            assert_eq!(n, BigInt::from(255), "{:?}", text);
        }
        let n = BigInt::from_text("-x10", Radix::Hexadecimal).unwrap();
        assert_eq!(n, BigInt::from(-16));

        // A bare zero is a number, not a truncated marker.
        assert!(BigInt::from_text("0", Radix::Hexadecimal).unwrap().is_zero());
    }

    #[test]
    fn invalid_character_position() {
        let err = BigInt::from_text("12a4", Radix::Decimal).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidCharacter);
        assert_eq!(err.position(), 3);

        // The sign and marker count toward the position.
        let err = BigInt::from_text("-0xfg", Radix::Hexadecimal).unwrap_err();
        assert_eq!(err.position(), 5);

        // Empty input, and sign or marker with no digits.
        assert_eq!(BigInt::from_text("", Radix::Decimal).unwrap_err().position(), 1);
        assert_eq!(BigInt::from_text("-", Radix::Decimal).unwrap_err().position(), 2);
        assert_eq!(
            BigInt::from_text("0x", Radix::Hexadecimal).unwrap_err().position(),
            3
        );
    }

    #[test]
    fn literal_dispatch() {
        assert_eq!(BigInt::from_literal("255").unwrap(), BigInt::from(255));
        assert_eq!(BigInt::from_literal("xff").unwrap(), BigInt::from(255));
        assert_eq!(BigInt::from_literal("-0xFF").unwrap(), BigInt::from(-255));
        // "0x" with nothing after it is not a hex literal shape; as decimal
        // it fails at the 'x'.
        let err = BigInt::from_literal("0x").unwrap_err();
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn bytes_be() {
        let n = BigInt::from_bytes_be(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(n.bits(), 65);

        assert!(BigInt::from_bytes_be(&[]).unwrap().is_zero());
        assert!(BigInt::from_bytes_be(&[0, 0, 0]).unwrap().is_zero());

        let n = BigInt::from_bytes_be(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        assert_eq!(n, BigInt::from(0xDEADBEEFu32));
    }
}
