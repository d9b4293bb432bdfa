//! The signed arbitrary-precision integer type.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, large, small, Limb};

/// A `Sign` is a `BigInt`'s sign.
///
/// Canonical zero is `Positive`; no operation produces a negative zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or greater.
    Positive,
    /// Less than zero.
    Negative,
}

impl Sign {
    /// The sign of a product or quotient of two values with these signs.
    fn xor(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Stored as a sign and a little-endian magnitude of machine limbs. Values
/// are immutable once constructed: every operation returns a freshly owned
/// result and never aliases an operand's buffer.
///
/// ```
/// use mpint::{BigInt, Radix};
///
/// let a = BigInt::from_text("123", Radix::Decimal)?;
/// let b = BigInt::from_text("456", Radix::Decimal)?;
/// assert_eq!((&a + &b).to_text(Radix::Decimal), "579");
/// # Ok::<(), mpint::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    /// Normalized little-endian magnitude; empty means zero.
    pub(crate) mag: Vec<Limb>,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            mag: Vec::new(),
        }
    }

    /// The value one.
    pub fn one() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            mag: vec![1],
        }
    }

    /// Assemble a value from a sign and a magnitude, normalizing both.
    pub(crate) fn from_sign_mag(sign: Sign, mut mag: Vec<Limb>) -> BigInt {
        small::normalize(&mut mag);
        let sign = if mag.is_empty() { Sign::Positive } else { sign };
        BigInt { sign, mag }
    }

    /// Build a value from an unsigned 128-bit magnitude.
    fn from_u128_mag(sign: Sign, x: u128) -> BigInt {
        let mut mag = Vec::new();
        mag.extend_from_slice(&math::split_u128(x));
        BigInt::from_sign_mag(sign, mag)
    }

    /// True if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    /// True if this value is one.
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.mag == [1]
    }

    /// True if the least significant bit is set.
    ///
    /// Zero is even.
    pub fn is_odd(&self) -> bool {
        small::bit(&self.mag, 0)
    }

    /// True if this value is less than zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// The sign of this value; zero reports `Sign::Positive`.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// One-based index of the most significant set bit of the magnitude,
    /// or 0 for zero.
    pub fn bits(&self) -> usize {
        small::bit_length(&self.mag)
    }

    /// Get the bit at (zero-based) index `n` of the magnitude.
    pub(crate) fn bit(&self, n: usize) -> bool {
        small::bit(&self.mag, n)
    }

    /// Minimal width in bytes the unsigned binary export accepts:
    /// `ceil(bits / 8)`, with a minimum of 1 for zero.
    pub fn byte_length(&self) -> usize {
        let bytes = self.bits().div_ceil(8);
        bytes.max(1)
    }

    /// The negation of this value; zero stays zero.
    pub fn neg(&self) -> BigInt {
        let sign = match self.sign {
            _ if self.mag.is_empty() => Sign::Positive,
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        };
        BigInt {
            sign,
            mag: self.mag.clone(),
        }
    }

    /// The absolute value of this value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            mag: self.mag.clone(),
        }
    }

    /// Truncating division with remainder.
    ///
    /// The quotient rounds toward zero and the remainder takes the
    /// dividend's sign, so `q * divisor + r == self` and `|r| < |divisor|`.
    /// Note this differs from a flooring modulo for negative operands:
    /// `-7 divmod 3` is `(-2, -1)`, not `(-3, 2)`.
    ///
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        Ok(self.div_rem_inner(divisor))
    }

    /// Division kernel; the divisor must not be zero.
    pub(crate) fn div_rem_inner(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        debug_assert!(!divisor.is_zero());
        let (q, r) = large::div_rem(&self.mag, &divisor.mag);
        (
            BigInt::from_sign_mag(self.sign.xor(divisor.sign), q),
            BigInt::from_sign_mag(self.sign, r),
        )
    }

    /// An approximate `f64` for this value, obtained by round-tripping the
    /// decimal text form. Values beyond the `f64` range give an infinity.
    pub fn to_f64(&self) -> f64 {
        self.to_text(crate::Radix::Decimal)
            .parse()
            .unwrap_or(f64::NAN)
    }
}

// SIGNED ARITHMETIC

/// Add two signed magnitudes.
///
/// Matching signs add the magnitudes and keep the sign; differing signs
/// subtract the smaller magnitude from the larger, and the result takes the
/// sign of the larger. Equal magnitudes of opposite sign cancel to zero.
fn add_signed(x: &BigInt, y: &BigInt) -> BigInt {
    if x.sign == y.sign {
        return BigInt::from_sign_mag(x.sign, large::add(&x.mag, &y.mag));
    }
    match large::compare(&x.mag, &y.mag) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_sign_mag(x.sign, large::sub(&x.mag, &y.mag)),
        Ordering::Less => BigInt::from_sign_mag(y.sign, large::sub(&y.mag, &x.mag)),
    }
}

/// Multiply two signed magnitudes; the sign is the xor of the operand
/// signs, and a zero product is canonical zero.
fn mul_signed(x: &BigInt, y: &BigInt) -> BigInt {
    BigInt::from_sign_mag(x.sign.xor(y.sign), large::mul(&x.mag, &y.mag))
}

// COMPARISON

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => large::compare(&self.mag, &other.mag),
            // Both negative: the larger magnitude is the smaller value.
            (Sign::Negative, Sign::Negative) => large::compare(&other.mag, &self.mag),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// CONVERSION FROM MACHINE INTEGERS

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(x: $t) -> BigInt {
                BigInt::from_u128_mag(Sign::Positive, x as u128)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(x: $t) -> BigInt {
                let sign = if x < 0 { Sign::Negative } else { Sign::Positive };
                BigInt::from_u128_mag(sign, x.unsigned_abs() as u128)
            }
        }
    )*};
}

impl_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_from_signed!(i8 i16 i32 i64 i128 isize);

// OPERATORS

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        add_signed(self, other)
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        add_signed(&self, &other)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        add_signed(&self, other)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        add_signed(self, &other.neg())
    }
}

impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        add_signed(&self, &other.neg())
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        add_signed(&self, &other.neg())
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        mul_signed(self, other)
    }
}

impl Mul<BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        mul_signed(&self, &other)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        mul_signed(&self, other)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncating quotient. Panics on a zero divisor, like the primitive
    /// integer types; the fallible form is [`BigInt::div_rem`].
    fn div(self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            panic!("division by zero");
        }
        self.div_rem_inner(other).0
    }
}

impl Div<BigInt> for BigInt {
    type Output = BigInt;

    fn div(self, other: BigInt) -> BigInt {
        &self / &other
    }
}

impl Div<&BigInt> for BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        &self / other
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncating remainder (takes the dividend's sign). Panics on a zero
    /// divisor, like the primitive integer types; the fallible form is
    /// [`BigInt::div_rem`].
    fn rem(self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            panic!("division by zero");
        }
        self.div_rem_inner(other).1
    }
}

impl Rem<BigInt> for BigInt {
    type Output = BigInt;

    fn rem(self, other: BigInt) -> BigInt {
        &self % &other
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        &self % other
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(&self)
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::zero()
    }
}

// FORMATTING

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_text(crate::Radix::Decimal))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_text(crate::Radix::Hexadecimal))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.magnitude_text(crate::Radix::Hexadecimal).to_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &text)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_zero() {
        let zero = BigInt::from(0);
        assert!(zero.is_zero());
        assert_eq!(zero.sign(), Sign::Positive);
        assert_eq!(zero.clone().neg().sign(), Sign::Positive);
        assert_eq!(BigInt::from(-5) + BigInt::from(5), zero);
    }

    #[test]
    fn from_machine_integers() {
        assert_eq!(BigInt::from(1i8), BigInt::one());
        assert_eq!(BigInt::from(u128::MAX).bits(), 128);
        assert_eq!(BigInt::from(i64::MIN).abs().bits(), 64);
        assert!(BigInt::from(-1i32).is_negative());
    }

    #[test]
    fn total_order() {
        let vals: Vec<BigInt> = [-3i64, -1, 0, 1, 2, 100].iter().map(|&v| BigInt::from(v)).collect();
        for (i, a) in vals.iter().enumerate() {
            for (j, b) in vals.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn negative_magnitude_order() {
        // Both negative: larger magnitude is the smaller value.
        let a = BigInt::from(-10);
        let b = BigInt::from(-2);
        assert!(a < b);
    }

    #[test]
    fn div_rem_by_zero() {
        let err = BigInt::from(1).div_rem(&BigInt::zero()).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::DivisionByZero);
    }

    #[test]
    fn operands_unchanged() {
        let a = BigInt::from(1234567890123456789i64);
        let b = BigInt::from(-987654321i64);
        let a2 = a.clone();
        let b2 = b.clone();
        let _ = &a + &b;
        let _ = &a * &b;
        let _ = a.div_rem(&b).unwrap();
        assert_eq!(a, a2);
        assert_eq!(b, b2);
    }
}
