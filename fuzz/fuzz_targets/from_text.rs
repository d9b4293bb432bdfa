#![no_main]
use libfuzzer_sys::fuzz_target;
use mpint::{BigInt, Radix};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    for radix in [Radix::Decimal, Radix::Hexadecimal] {
        if let Ok(n) = BigInt::from_text(s, radix) {
            // Formatting is canonical, so a second round trip is exact.
            let text = n.to_text(radix);
            assert_eq!(text.len(), n.text_length(radix));
            let again = BigInt::from_text(&text, radix).unwrap();
            assert_eq!(n, again);
            assert_eq!(again.to_text(radix), text);
        }
    }
});
