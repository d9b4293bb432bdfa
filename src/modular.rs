//! Modular arithmetic: greatest common divisor, modular exponentiation,
//! and modular inverse.

use crate::bigint::{BigInt, Sign};
use crate::error::{Error, ErrorCode, Result};
use crate::math::large;

impl BigInt {
    /// Greatest common divisor of the magnitudes; always non-negative.
    ///
    /// `gcd(x, 0)` is `|x|`, and `gcd(0, 0)` is 0.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.mag.clone();
        let mut b = other.mag.clone();
        while !b.is_empty() {
            let (_, r) = large::div_rem(&a, &b);
            a = b;
            b = r;
        }
        BigInt::from_sign_mag(Sign::Positive, a)
    }

    /// Modular exponentiation: `self^exponent mod modulus`, in `[0, m)`.
    ///
    /// A negative base is reduced into the residue range first, so the
    /// result is never negative. Returns `BadInputData` if the modulus is
    /// zero or negative and `NotAcceptable` if the exponent is negative.
    ///
    /// ```
    /// use mpint::BigInt;
    ///
    /// let r = BigInt::from(4).modpow(&BigInt::from(13), &BigInt::from(497))?;
    /// assert_eq!(r, BigInt::from(445));
    /// # Ok::<(), mpint::Error>(())
    /// ```
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_negative() || modulus.is_zero() {
            return Err(Error::new(ErrorCode::BadInputData));
        }
        if exponent.is_negative() {
            return Err(Error::new(ErrorCode::NotAcceptable));
        }
        if modulus.is_one() {
            return Ok(BigInt::zero());
        }

        let base = residue(self, modulus);
        let mut result = BigInt::one();

        // Square-and-multiply from the exponent's top bit down. All the
        // intermediate values stay in [0, m), so the plain truncating
        // remainder is already the residue.
        for i in (0..exponent.bits()).rev() {
            result = (&result * &result).div_rem_inner(modulus).1;
            if exponent.bit(i) {
                result = (&result * &base).div_rem_inner(modulus).1;
            }
        }
        Ok(result)
    }

    /// Modular inverse: the `r` in `[0, m)` with `self * r ≡ 1 (mod m)`.
    ///
    /// Returns `BadInputData` if the modulus is zero or negative and
    /// `NotAcceptable` if no inverse exists, that is when `self` and the
    /// modulus share a factor.
    pub fn modinv(&self, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_negative() || modulus.is_zero() {
            return Err(Error::new(ErrorCode::BadInputData));
        }

        // Extended Euclid on (m, a mod m), tracking only the coefficient
        // of `a`. The remainders are non-negative throughout; the
        // coefficients swing signed and get folded back at the end.
        let mut r0 = modulus.abs();
        let mut r1 = residue(self, modulus);
        let mut t0 = BigInt::zero();
        let mut t1 = BigInt::one();

        while !r1.is_zero() {
            let (q, r2) = r0.div_rem_inner(&r1);
            let t2 = &t0 - &(&q * &t1);
            r0 = r1;
            r1 = r2;
            t0 = t1;
            t1 = t2;
        }

        if !r0.is_one() {
            return Err(Error::new(ErrorCode::NotAcceptable));
        }
        Ok(residue(&t0, modulus))
    }
}

/// Reduce `x` into the residue range `[0, m)` for a positive modulus.
fn residue(x: &BigInt, m: &BigInt) -> BigInt {
    debug_assert!(!m.is_negative() && !m.is_zero());
    let r = x.div_rem_inner(m).1;
    if r.is_negative() {
        &r + m
    } else {
        r
    }
}
