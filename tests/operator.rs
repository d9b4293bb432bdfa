//! Operator traits, formatting traits, and ordering.

use std::cmp::Ordering;
use std::collections::HashMap;

use mpint::{BigInt, Radix, Sign};

#[test]
fn owned_and_borrowed_operands() {
    let a = BigInt::from(100);
    let b = BigInt::from(7);

    assert_eq!(&a + &b, BigInt::from(107));
    assert_eq!(a.clone() + b.clone(), BigInt::from(107));
    assert_eq!(a.clone() + &b, BigInt::from(107));
    assert_eq!(&a - &b, BigInt::from(93));
    assert_eq!(&a * &b, BigInt::from(700));
    assert_eq!(&a / &b, BigInt::from(14));
    assert_eq!(&a % &b, BigInt::from(2));
    assert_eq!(-&a, BigInt::from(-100));
    assert_eq!(-a.clone(), BigInt::from(-100));
}

#[test]
fn truncating_operator_signs() {
    assert_eq!(BigInt::from(-7) / BigInt::from(3), BigInt::from(-2));
    assert_eq!(BigInt::from(-7) % BigInt::from(3), BigInt::from(-1));
    assert_eq!(BigInt::from(7) / BigInt::from(-3), BigInt::from(-2));
    assert_eq!(BigInt::from(7) % BigInt::from(-3), BigInt::from(1));
}

#[test]
#[should_panic(expected = "division by zero")]
fn div_operator_panics_on_zero() {
    let _ = BigInt::from(1) / BigInt::zero();
}

#[test]
#[should_panic(expected = "division by zero")]
fn rem_operator_panics_on_zero() {
    let _ = BigInt::from(1) % BigInt::zero();
}

#[test]
fn display_and_hex_formatting() {
    let n = BigInt::from(255);
    assert_eq!(format!("{}", n), "255");
    assert_eq!(format!("{:x}", n), "ff");
    assert_eq!(format!("{:X}", n), "FF");
    assert_eq!(format!("{:#x}", n), "0xff");

    let n = BigInt::from(-255);
    assert_eq!(format!("{}", n), "-255");
    assert_eq!(format!("{:x}", n), "-ff");
    assert_eq!(format!("{:#X}", n), "-0xFF");

    assert_eq!(format!("{}", BigInt::zero()), "0");
    assert_eq!(format!("{:x}", BigInt::zero()), "0");
}

#[test]
fn debug_matches_display() {
    let n: BigInt = "-12345678901234567890".parse().unwrap();
    assert_eq!(format!("{:?}", n), format!("{}", n));
}

#[test]
fn ordering_and_equality() {
    let a: BigInt = "-99999999999999999999999999".parse().unwrap();
    let b = BigInt::from(-1);
    let c = BigInt::zero();
    let d: BigInt = "99999999999999999999999999".parse().unwrap();

    assert!(a < b && b < c && c < d);
    assert_eq!(a.cmp(&a), Ordering::Equal);
    assert_eq!(d.partial_cmp(&a), Some(Ordering::Greater));
    assert_eq!(BigInt::from(5), BigInt::from(5));
    assert_ne!(BigInt::from(5), BigInt::from(-5));
}

#[test]
fn sign_accessor() {
    assert_eq!(BigInt::from(5).sign(), Sign::Positive);
    assert_eq!(BigInt::from(-5).sign(), Sign::Negative);
    assert_eq!(BigInt::zero().sign(), Sign::Positive);
}

#[test]
fn neg_abs_leave_source_alone() {
    let a: BigInt = "-170141183460469231731687303715884105728".parse().unwrap();
    let n = a.neg();
    let m = a.abs();
    assert!(a.is_negative());
    assert!(!n.is_negative());
    assert!(!m.is_negative());
    assert_eq!(n, m);
    assert_eq!(&a + &n, BigInt::zero());
}

#[test]
fn hashable() {
    let mut map = HashMap::new();
    map.insert(BigInt::from(42), "answer");
    let key: BigInt = "42".parse().unwrap();
    assert_eq!(map.get(&key), Some(&"answer"));
}

#[test]
fn default_is_zero() {
    assert!(BigInt::default().is_zero());
}

#[test]
fn display_respects_width() {
    let n = BigInt::from(-42);
    assert_eq!(format!("{:>8}", n), "     -42");
    assert_eq!(format!("{:08}", n), "-0000042");
    assert_eq!(n.to_text(Radix::Decimal), "-42");
}
