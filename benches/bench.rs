#![feature(test)]

extern crate test;

use mpint::{BigInt, Radix};

use test::Bencher;

fn operand(seed: u64, limbs: usize) -> BigInt {
    // Deterministic xorshift filler, so runs are comparable.
    let mut state = seed;
    let mut hex = String::new();
    for _ in 0..limbs * 16 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        hex.push(char::from_digit((state % 16) as u32, 16).unwrap());
    }
    BigInt::from_text(&hex, Radix::Hexadecimal).unwrap()
}

#[bench]
fn bench_mul(b: &mut Bencher) {
    let x = operand(0x9E3779B97F4A7C15, 32);
    let y = operand(0xD1B54A32D192ED03, 32);
    b.iter(|| &x * &y);
}

#[bench]
fn bench_div_rem(b: &mut Bencher) {
    let x = operand(0x9E3779B97F4A7C15, 64);
    let y = operand(0xD1B54A32D192ED03, 16);
    b.iter(|| x.div_rem(&y).unwrap());
}

#[bench]
fn bench_to_text_decimal(b: &mut Bencher) {
    let x = operand(0x2545F4914F6CDD1D, 64);
    b.iter(|| x.to_text(Radix::Decimal));
}

#[bench]
fn bench_from_text_decimal(b: &mut Bencher) {
    let text = operand(0x2545F4914F6CDD1D, 64).to_text(Radix::Decimal);
    b.iter(|| BigInt::from_text(&text, Radix::Decimal).unwrap());
}

#[bench]
fn bench_modpow(b: &mut Bencher) {
    let base = operand(0x9E3779B97F4A7C15, 16);
    let exp = operand(0xD1B54A32D192ED03, 4);
    let m = operand(0x2545F4914F6CDD1D, 16);
    b.iter(|| base.modpow(&exp, &m).unwrap());
}
