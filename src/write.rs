//! Rendering big integers to text and binary output.

use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::math::{small, Limb, DECIMAL_CHUNK, DECIMAL_CHUNK_DIGITS, LIMB_BITS, POW10_LIMB};
use crate::read::Radix;

const LIMB_BYTES: usize = LIMB_BITS / 8;

impl BigInt {
    /// Render this value as text in the given radix.
    ///
    /// The output is canonical: no leading zeros, no radix marker, a `-`
    /// prefix for negative values, lowercase hex digits. Zero is `"0"` in
    /// either radix, so the output always parses back to an equal value.
    pub fn to_text(&self, radix: Radix) -> String {
        let digits = self.magnitude_text(radix);
        if self.is_negative() {
            let mut out = String::with_capacity(digits.len() + 1);
            out.push('-');
            out.push_str(&digits);
            out
        } else {
            digits
        }
    }

    /// Number of bytes [`to_text`](BigInt::to_text) will produce, including
    /// the sign, without rendering the digits.
    pub fn text_length(&self, radix: Radix) -> usize {
        let sign = self.is_negative() as usize;
        let digits = match radix {
            Radix::Hexadecimal => self.bits().div_ceil(4).max(1),
            Radix::Decimal => {
                let chunks = self.decimal_chunks();
                match chunks.split_last() {
                    None => 1,
                    Some((&top, rest)) => {
                        decimal_digits(top) + rest.len() * DECIMAL_CHUNK_DIGITS
                    }
                }
            }
        };
        sign + digits
    }

    /// The digit string of the magnitude, without a sign.
    pub(crate) fn magnitude_text(&self, radix: Radix) -> String {
        match radix {
            Radix::Decimal => decimal_text(&self.decimal_chunks()),
            Radix::Hexadecimal => hex_text(&self.mag),
        }
    }

    /// Peel the magnitude into base-10^k chunks, least significant first.
    /// Zero gives no chunks.
    fn decimal_chunks(&self) -> Vec<Limb> {
        let mut rest = self.mag.clone();
        let mut chunks = Vec::new();
        while !rest.is_empty() {
            chunks.push(small::idivrem(&mut rest, DECIMAL_CHUNK));
        }
        chunks
    }

    /// Export the magnitude as unsigned big-endian bytes at minimal width.
    ///
    /// The width is [`byte_length`](BigInt::byte_length), so zero exports as
    /// a single `0x00` byte. Returns `NegativeValue` for negative values;
    /// the format has no sign channel.
    pub fn to_bytes_be(&self) -> Result<Vec<u8>> {
        self.to_bytes_be_width(self.byte_length())
    }

    /// Export the magnitude as unsigned big-endian bytes, left-padded with
    /// zeros to exactly `width` bytes.
    ///
    /// Returns `NegativeValue` for negative values and `BufferTooSmall` if
    /// `width` is less than [`byte_length`](BigInt::byte_length).
    pub fn to_bytes_be_width(&self, width: usize) -> Result<Vec<u8>> {
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve(width)
            .map_err(|_| Error::new(ErrorCode::AllocationFailure))?;
        buf.resize(width, 0);
        self.write_bytes_be(&mut buf)?;
        Ok(buf)
    }

    /// Fill `buf` with the magnitude as unsigned big-endian bytes,
    /// left-padded with zeros.
    ///
    /// Returns `NegativeValue` for negative values and `BufferTooSmall` if
    /// the buffer is shorter than [`byte_length`](BigInt::byte_length).
    pub fn write_bytes_be(&self, buf: &mut [u8]) -> Result<()> {
        if self.is_negative() {
            return Err(Error::new(ErrorCode::NegativeValue));
        }
        if buf.len() < self.byte_length() {
            return Err(Error::new(ErrorCode::BufferTooSmall));
        }

        buf.fill(0);
        let end = buf.len();
        for (i, &limb) in self.mag.iter().enumerate() {
            for k in 0..LIMB_BYTES {
                let offset = i * LIMB_BYTES + k;
                // Bytes past the buffer are the top limb's zero padding.
                if offset < end {
                    buf[end - 1 - offset] = (limb >> (8 * k)) as u8;
                }
            }
        }
        Ok(())
    }
}

/// Join base-10^k chunks into a decimal string. The top chunk prints bare;
/// every lower chunk is zero-padded to the full chunk width.
fn decimal_text(chunks: &[Limb]) -> String {
    let (&top, rest) = match chunks.split_last() {
        Some(parts) => parts,
        None => return "0".to_owned(),
    };

    let mut out = String::with_capacity(decimal_digits(top) + rest.len() * DECIMAL_CHUNK_DIGITS);
    let mut itoa = itoa::Buffer::new();
    out.push_str(itoa.format(top));
    for &chunk in rest.iter().rev() {
        let digits = itoa.format(chunk);
        for _ in digits.len()..DECIMAL_CHUNK_DIGITS {
            out.push('0');
        }
        out.push_str(digits);
    }
    out
}

/// Render a magnitude as lowercase hex, one nibble at a time from the top.
fn hex_text(mag: &[Limb]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let bits = small::bit_length(mag);
    if bits == 0 {
        return "0".to_owned();
    }

    let nibbles = bits.div_ceil(4);
    let mut out = String::with_capacity(nibbles);
    for i in (0..nibbles).rev() {
        let limb = mag[i / (LIMB_BITS / 4)];
        let nibble = (limb >> (4 * (i % (LIMB_BITS / 4)))) & 0xF;
        out.push(HEX[nibble as usize] as char);
    }
    out
}

/// Count the decimal digits of a nonzero chunk value.
fn decimal_digits(chunk: Limb) -> usize {
    debug_assert!(chunk != 0 && chunk < DECIMAL_CHUNK);
    POW10_LIMB.iter().take_while(|&&p| p <= chunk).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_text_padding() {
        // The second chunk must keep its leading zeros.
        let n = BigInt::from(1_000_000_007u64) * BigInt::from(1_000_000_000u64);
        assert_eq!(n.to_text(Radix::Decimal), "1000000007000000000");

        assert_eq!(BigInt::zero().to_text(Radix::Decimal), "0");
        assert_eq!(BigInt::from(-7).to_text(Radix::Decimal), "-7");
    }

    #[test]
    fn hex_text_canonical() {
        assert_eq!(BigInt::from(255).to_text(Radix::Hexadecimal), "ff");
        assert_eq!(BigInt::from(-4096).to_text(Radix::Hexadecimal), "-1000");
        assert_eq!(BigInt::zero().to_text(Radix::Hexadecimal), "0");

        let n = BigInt::from(0x0123456789ABCDEFu64);
        assert_eq!(n.to_text(Radix::Hexadecimal), "123456789abcdef");
    }

    #[test]
    fn text_length_matches_output() {
        let samples = [
            BigInt::zero(),
            BigInt::from(9),
            BigInt::from(10),
            BigInt::from(-1),
            BigInt::from(999_999_999u64),
            BigInt::from(1_000_000_000u64),
            BigInt::from(u128::MAX),
            BigInt::from(i128::MIN),
        ];
        for n in &samples {
            for radix in [Radix::Decimal, Radix::Hexadecimal] {
                assert_eq!(n.text_length(radix), n.to_text(radix).len(), "{}", n);
            }
        }
    }

    #[test]
    fn bytes_be_padding_and_errors() {
        let n = BigInt::from(0xDEADBEEFu32);
        assert_eq!(n.to_bytes_be().unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(
            n.to_bytes_be_width(6).unwrap(),
            [0, 0, 0xDE, 0xAD, 0xBE, 0xEF]
        );

        let err = n.to_bytes_be_width(3).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::BufferTooSmall);

        let err = BigInt::from(-1).to_bytes_be().unwrap_err();
        assert_eq!(*err.code(), ErrorCode::NegativeValue);

        assert_eq!(BigInt::zero().to_bytes_be().unwrap(), [0]);
    }

    #[test]
    fn write_bytes_be_overwrites() {
        let n = BigInt::from(0x0102u32);
        let mut buf = [0xFF; 4];
        n.write_bytes_be(&mut buf).unwrap();
        assert_eq!(buf, [0, 0, 1, 2]);
    }
}
