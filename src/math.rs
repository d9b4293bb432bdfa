//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb. Buffers are magnitudes only; the
//! sign lives on the wrapping [`BigInt`](crate::BigInt) type.
//!
//! All buffers passed in are expected to be normalized (no most-significant
//! zero limbs) and all buffers returned are normalized; zero is the empty
//! buffer.

use core::cmp;
use core::mem;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead.
//
//  This should be all-known 64-bit platforms supported by Rust.
//      https://forge.rust-lang.org/platform-support.html
//
//  Platforms where native 128-bit multiplication is explicitly supported:
//      - x86_64 (Supported via `MUL`).
//      - mips64 (Supported via `DMULTU`, which `HI` and `LO` can be read-from).
//
//  Platforms where native 64-bit multiplication is supported and
//  you can extract hi-lo for 64-bit multiplications.
//      aarch64 (Requires `UMULH` and `MUL` to capture high and low bits).
//      powerpc64 (Requires `MULHDU` and `MULLD` to capture high and low bits).

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub type Limb = u32;

#[cfg(limb_width_32)]
type Wide = u64;

#[cfg(limb_width_32)]
pub const POW10_LIMB: &[Limb] = &[
    1, 10, 100, 1000, 10000, 100000, 1000000, 10000000, 100000000, 1000000000,
];

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub type Limb = u64;

#[cfg(limb_width_64)]
type Wide = u128;

#[cfg(limb_width_64)]
pub const POW10_LIMB: &[Limb] = &[
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
    10000000000,
    100000000000,
    1000000000000,
    10000000000000,
    100000000000000,
    1000000000000000,
    10000000000000000,
    100000000000000000,
    1000000000000000000,
    10000000000000000000,
];

/// Bits in a single limb.
pub const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Largest power of ten that fits in a limb; the decimal formatter and
/// parser move this many digits per division/multiplication.
pub const DECIMAL_CHUNK: Limb = POW10_LIMB[DECIMAL_CHUNK_DIGITS];

/// Number of decimal digits in [`DECIMAL_CHUNK`].
pub const DECIMAL_CHUNK_DIGITS: usize = POW10_LIMB.len() - 1;

/// Split a u128 into limbs, in little-endian order.
#[cfg(limb_width_32)]
pub fn split_u128(x: u128) -> [Limb; 4] {
    [
        x as Limb,
        (x >> 32) as Limb,
        (x >> 64) as Limb,
        (x >> 96) as Limb,
    ]
}

/// Split a u128 into limbs, in little-endian order.
#[cfg(limb_width_64)]
pub fn split_u128(x: u128) -> [Limb; 2] {
    [x as Limb, (x >> 64) as Limb]
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_add(y)
    }

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let t = add(*x, y);
        *x = t.0;
        t.1
    }

    // SUBTRACTION

    /// Subtract two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_sub(y)
    }

    /// SubAssign two small integers and return if overflow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let t = sub(*x, y);
        *x = t.0;
        t.1
    }

    // MULTIPLICATION

    /// Multiply two small integers (with carry) (and return the overflow contribution).
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow, as long as wide is 2x as wide. This is because
        // the following is always true:
        // `Wide::MAX - (Limb::MAX * Limb::MAX) >= Limb::MAX`
        let z: Wide = (x as Wide) * (y as Wide) + (carry as Wide);
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }

    /// Multiply two small integers (with carry) (and return if overflow happens).
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }

    // DIVISION

    /// Divide a two-limb numerator by a one-limb denominator.
    ///
    /// The high numerator limb must be less than the denominator, so the
    /// quotient is guaranteed to fit a single limb.
    #[inline]
    pub fn div_wide(hi: Limb, lo: Limb, y: Limb) -> (Limb, Limb) {
        debug_assert!(hi < y);
        let num = ((hi as Wide) << LIMB_BITS) | (lo as Wide);
        ((num / (y as Wide)) as Limb, (num % (y as Wide)) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    pub fn iadd_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        if x.len() <= xstart {
            x.push(y);
        } else {
            // Initial add
            let mut carry = scalar::iadd(&mut x[xstart], y);

            // Increment until overflow stops occurring.
            let mut size = xstart + 1;
            while carry && size < x.len() {
                carry = scalar::iadd(&mut x[size], 1);
                size += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry {
                x.push(1);
            }
        }
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
        iadd_impl(x, y, 0);
    }

    // SUBTRACTION

    /// SubAssign small integer to bigint.
    /// Does not do overflowing subtraction.
    pub fn isub_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

        // Initial subtraction
        let mut carry = scalar::isub(&mut x[xstart], y);

        // Decrement until the borrow stops propagating.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::isub(&mut x[size], 1);
            size += 1;
        }
        normalize(x);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Mul small integer to bigint.
    #[inline]
    pub fn mul(x: &[Limb], y: Limb) -> Vec<Limb> {
        let mut z = x.to_vec();
        imul(&mut z, y);
        z
    }

    // DIVISION

    /// DivAssign bigint by a small integer, returning the remainder.
    ///
    /// The quotient replaces `x` and is normalized.
    pub fn idivrem(x: &mut Vec<Limb>, y: Limb) -> Limb {
        debug_assert!(y != 0);

        // Long division limb-by-limb from the most significant end; the
        // running remainder is always less than `y`, so each step's
        // numerator fits in two limbs.
        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let t = scalar::div_wide(rem, *xi, y);
            *xi = t.0;
            rem = t.1;
        }
        normalize(x);
        rem
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            Some(hi) => hi.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        LIMB_BITS * x.len() - leading_zeros(x)
    }

    /// Get the bit at (zero-based) index `n`; bits beyond the buffer are 0.
    #[inline]
    pub fn bit(x: &[Limb], n: usize) -> bool {
        let limb = n / LIMB_BITS;
        limb < x.len() && (x[limb] >> (n % LIMB_BITS)) & 1 == 1
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < LIMB_BITS`, IE, internally shifting bits.
    pub fn ishl_bits(x: &mut Vec<Limb>, n: usize) {
        // Need to shift by the number of `bits % LIMB_BITS`.
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = LIMB_BITS - n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= n;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-left `n` limbs inside a buffer.
    pub fn ishl_limbs(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n != 0);
        if !x.is_empty() {
            x.splice(0..0, core::iter::repeat(0).take(n));
        }
    }

    /// Shift-left buffer by n bits.
    #[inline]
    pub fn ishl(x: &mut Vec<Limb>, n: usize) {
        // Need to pad with zeros for the number of `bits / LIMB_BITS`,
        // and shift-left with carry for `bits % LIMB_BITS`.
        let rem = n % LIMB_BITS;
        let div = n / LIMB_BITS;
        ishl_bits(x, rem);
        if div != 0 {
            ishl_limbs(x, div);
        }
    }

    // SHR

    /// Shift-right bits inside a buffer.
    ///
    /// Assumes `n < LIMB_BITS`.
    pub fn ishr_bits(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            normalize(x);
            return;
        }

        let lshift = LIMB_BITS - n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi >>= n;
            *xi |= prev << lshift;
            prev = tmp;
        }
        normalize(x);
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() != y.len() {
            x.len().cmp(&y.len())
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi != yi {
                    return xi.cmp(&yi);
                }
            }
            cmp::Ordering::Equal
        }
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed, optimized for vectors.
    pub fn iadd_impl(x: &mut Vec<Limb>, y: &[Limb], xstart: usize) {
        // The effective x buffer is from `xstart..x.len()`, so we need to treat
        // that as the current range. If the effective y buffer is longer, need
        // to resize to that, + the start index.
        if y.len() > x.len() - xstart {
            x.resize(y.len() + xstart, 0);
        }

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we added at max
            // Limb::MAX + Limb::MAX. Add the previous carry, and store the
            // current carry for the next.
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }

        // Overflow from the previous bit.
        if carry {
            small::iadd_impl(x, 1, y.len() + xstart);
        }
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: &[Limb]) {
        iadd_impl(x, y, 0);
    }

    /// Add bigint to bigint.
    #[inline]
    pub fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut z = x.to_vec();
        iadd(&mut z, y);
        z
    }

    // SUBTRACTION

    /// SubAssign bigint to bigint.
    ///
    /// The minuend `x` must be greater than or equal to the subtrahend `y`.
    pub fn isub(x: &mut Vec<Limb>, y: &[Limb]) {
        // Basic underflow checks.
        debug_assert!(greater_equal(x, y));

        // Iteratively subtract elements from y from x.
        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            // Only one op of the two can underflow, since we subtracted at
            // max Limb::MAX. Subtract the previous borrow, and store the
            // current borrow for the next.
            let mut tmp = scalar::isub(xi, *yi);
            if carry {
                tmp |= scalar::isub(xi, 1);
            }
            carry = tmp;
        }

        if carry {
            small::isub_impl(x, 1, y.len());
        } else {
            small::normalize(x);
        }
    }

    /// Sub bigint from bigint.
    #[inline]
    pub fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut z = x.to_vec();
        isub(&mut z, y);
        z
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Slow, naive algorithm, using limb-bit bases and just shifting left for
    /// each iteration. This could be optimized with numerous other algorithms,
    /// but it's extremely simple, and works in O(n*m) time, which is fine
    /// by me. Each iteration, of which there are `m` iterations, requires
    /// `n` multiplications, and `n` additions, or grade-school multiplication.
    pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        if x.is_empty() || y.is_empty() {
            return Vec::new();
        }

        // Using the immutable value, multiply by all the scalars in y, using
        // the algorithm defined above. Use a single buffer to avoid
        // frequent reallocations. Handle the first case to avoid a redundant
        // addition, since we know y.len() >= 1.
        let mut z = small::mul(x, y[0]);
        z.resize(x.len() + y.len(), 0);

        // Handle the iterative cases.
        for (i, &yi) in y[1..].iter().enumerate() {
            let zi = small::mul(x, yi);
            iadd_impl(&mut z, &zi, i + 1);
        }

        small::normalize(&mut z);

        z
    }

    // DIVISION

    /// Subtract `q * y` from the window `x`, returning true on underflow.
    ///
    /// The window is exactly one limb longer than `y`, matching one step of
    /// the long-division loop below.
    fn isub_mul(x: &mut [Limb], y: &[Limb], q: Limb) -> bool {
        debug_assert!(x.len() == y.len() + 1);

        let mut mul_carry: Limb = 0;
        let mut borrow: Limb = 0;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            let t = scalar::mul(q, *yi, mul_carry);
            mul_carry = t.1;
            // The two subtractions cannot both underflow: the second borrow
            // only fires when the first difference is zero, in which case
            // the first subtraction was exact.
            let (d, b1) = xi.overflowing_sub(t.0);
            let (d, b2) = d.overflowing_sub(borrow);
            *xi = d;
            borrow = (b1 | b2) as Limb;
        }

        let last = x.len() - 1;
        let (d, b1) = x[last].overflowing_sub(mul_carry);
        let (d, b2) = d.overflowing_sub(borrow);
        x[last] = d;
        b1 | b2
    }

    /// Add `y` back onto the window `x`, discarding the final carry.
    ///
    /// Companion to `isub_mul`: the carry out of the top limb cancels the
    /// borrow of an overestimated trial digit.
    fn iadd_back(x: &mut [Limb], y: &[Limb]) {
        debug_assert!(x.len() == y.len() + 1);

        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }
        let last = x.len() - 1;
        x[last] = x[last].wrapping_add(carry as Limb);
    }

    /// Divide bigint by bigint, returning the quotient and remainder.
    ///
    /// Knuth's algorithm D (The Art of Computer Programming, 4.3.1), with
    /// the divisor normalized so its top limb has the high bit set, a
    /// two-limb trial digit corrected against the third limb, and the rare
    /// overestimate repaired by adding the divisor back.
    pub fn div_rem(x: &[Limb], y: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
        debug_assert!(!y.is_empty() && *y.last().unwrap() != 0);

        // Divisor magnitude exceeds the dividend: quotient is zero.
        if less(x, y) {
            return (Vec::new(), x.to_vec());
        }

        // Single-limb divisors take the scalar fast path; this is also the
        // workhorse of decimal formatting.
        if y.len() == 1 {
            let mut q = x.to_vec();
            let rem = small::idivrem(&mut q, y[0]);
            let r = if rem == 0 { Vec::new() } else { vec![rem] };
            return (q, r);
        }

        // Normalize so the divisor's most significant bit is set, which
        // keeps every trial digit within 2 of the true quotient digit.
        let shift = small::leading_zeros(y);
        let mut yn = y.to_vec();
        small::ishl_bits(&mut yn, shift);
        debug_assert!(yn.len() == y.len());

        let mut xn = x.to_vec();
        small::ishl_bits(&mut xn, shift);
        // The division loop below reads a window one limb past the dividend.
        if xn.len() == x.len() {
            xn.push(0);
        }

        let n = yn.len();
        let m = xn.len() - 1 - n;
        let y_hi = yn[n - 1];
        let y_lo = yn[n - 2];

        let mut q = vec![0 as Limb; m + 1];
        for j in (0..=m).rev() {
            // Estimate the quotient digit from the top two limbs of the
            // window divided by the divisor's top limb.
            let num = ((xn[j + n] as Wide) << LIMB_BITS) | (xn[j + n - 1] as Wide);
            let mut qhat = num / (y_hi as Wide);
            let mut rhat = num % (y_hi as Wide);

            // Correct the estimate against the next limb down; after this
            // loop the trial digit is at most one too large.
            let base = (1 as Wide) << LIMB_BITS;
            while qhat >= base
                || qhat * (y_lo as Wide) > (rhat << LIMB_BITS) | (xn[j + n - 2] as Wide)
            {
                qhat -= 1;
                rhat += y_hi as Wide;
                if rhat >= base {
                    break;
                }
            }

            // Multiply-and-subtract; an underflow means the trial digit was
            // still one too large, so add the divisor back.
            let mut digit = qhat as Limb;
            if isub_mul(&mut xn[j..j + n + 1], &yn, digit) {
                digit -= 1;
                iadd_back(&mut xn[j..j + n + 1], &yn);
            }
            q[j] = digit;
        }

        small::normalize(&mut q);

        // The remainder is what is left of the dividend, denormalized.
        xn.truncate(n);
        small::ishr_bits(&mut xn, shift);
        (q, xn)
    }
}

// TESTS
// -----
