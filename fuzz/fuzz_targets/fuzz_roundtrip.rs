#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let doc = match iodef::decode_str(&s) {
        Ok(d) => d,
        Err(_) => return,
    };

    let text = match iodef::encode_string(&doc) {
        Ok(t) => t,
        Err(_) => return,
    };

    // Anything we decoded must re-decode from its own encoding to the same text.
    let redecoded = match iodef::decode_str(&text) {
        Ok(d) => d,
        Err(e) => panic!(
            "Roundtrip failure: encode produced JSON that cannot be re-decoded: {}\n\
             Input (lossy): {:?}\n\
             Encoded:\n{}",
            e,
            s.get(..200).unwrap_or(&s),
            text.get(..500).unwrap_or(&text),
        ),
    };
    let text2 = iodef::encode_string(&redecoded).unwrap_or_default();
    assert_eq!(text, text2, "encoding is not stable across a decode");
});
