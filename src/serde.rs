//! Serialize and deserialize big integers as decimal strings, so values of
//! any size survive formats whose native numbers are bounded.

use core::fmt;

use serde::de::{Deserialize, Deserializer, Error, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::bigint::BigInt;
use crate::read::Radix;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_text(Radix::Decimal))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer literal string")
            }

            fn visit_str<E>(self, text: &str) -> Result<BigInt, E>
            where
                E: Error,
            {
                BigInt::from_literal(text).map_err(Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
            where
                E: Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
            where
                E: Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
