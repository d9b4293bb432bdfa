#![no_main]
use libfuzzer_sys::fuzz_target;
use mpint::BigInt;

fuzz_target!(|data: &[u8]| {
    let n = BigInt::from_bytes_be(data).unwrap();
    let out = n.to_bytes_be().unwrap();
    // The minimal export strips leading zero bytes but nothing else.
    let trimmed = match data.iter().position(|&b| b != 0) {
        Some(i) => &data[i..],
        None => &[][..],
    };
    if trimmed.is_empty() {
        assert_eq!(out, [0]);
    } else {
        assert_eq!(out, trimmed);
    }
    // Re-export at the original width reproduces the input exactly.
    if !data.is_empty() {
        assert_eq!(n.to_bytes_be_width(data.len()).unwrap(), data);
    }
});
