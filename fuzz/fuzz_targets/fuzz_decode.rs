#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(doc) = iodef::decode_str(&s) {
        let report = iodef::validate(&doc);
        let mut again = iodef::ValidationReport::new();
        // the bool result and the collected report must agree
        assert_eq!(iodef::check(&doc, &mut again, ""), report.is_valid());
        assert_eq!(again, report);
    }
});
