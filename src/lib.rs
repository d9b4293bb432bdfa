//! Arbitrary-precision signed integers with a small, explicit API.
//!
//! The centerpiece is [`BigInt`], a sign-and-magnitude integer backed by a
//! vector of machine limbs. It supports the usual arithmetic operators,
//! truncating division with remainder, text and binary conversions in both
//! directions, and the modular operations (`gcd`, `modpow`, `modinv`)
//! needed for number-theoretic work.
//!
//! # Parsing and formatting
//!
//! Text conversions are explicit about their radix. [`BigInt::from_text`]
//! parses decimal or hexadecimal with an optional `-` sign and, for hex, an
//! optional `x`/`0x` marker; [`BigInt::from_literal`] (also reachable
//! through `str::parse`) picks the radix from the marker. Output through
//! [`BigInt::to_text`] is always canonical, so formatting and re-parsing
//! is the identity.
//!
//! ```
//! use mpint::{BigInt, Radix};
//!
//! let a: BigInt = "x1ffffffffffffffffffffffff".parse()?;
//! let b = BigInt::from_text("-100000000000000000000", Radix::Decimal)?;
//! let (q, r) = a.div_rem(&b)?;
//! assert_eq!(q.to_text(Radix::Decimal), "-1584563250");
//! assert_eq!(&q * &b + &r, a);
//! # Ok::<(), mpint::Error>(())
//! ```
//!
//! # Binary interchange
//!
//! [`BigInt::from_bytes_be`] and [`BigInt::to_bytes_be`] exchange unsigned
//! big-endian magnitudes, the form used by cryptographic key material; the
//! fixed-width variant left-pads so exports fit protocol fields exactly.
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with an [`Error`] carrying an
//! [`ErrorCode`]; parse errors also carry the 1-based byte position of the
//! offending character. Operators panic on division by zero like the
//! primitive integer types; the checked form is [`BigInt::div_rem`].
//!
//! # Optional features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`BigInt`] as decimal
//!   strings, so arbitrarily large values survive formats whose native
//!   numbers are bounded.

#![doc(html_root_url = "https://docs.rs/mpint/0.1.0")]
#![allow(clippy::comparison_chain, clippy::manual_range_contains)]

mod bigint;
mod error;
mod math;
mod modular;
mod read;
mod write;

#[cfg(feature = "serde")]
mod serde;

pub use crate::bigint::{BigInt, Sign};
pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::read::Radix;
