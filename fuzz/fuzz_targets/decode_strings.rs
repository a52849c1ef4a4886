#![no_main]

use libfuzzer_sys::fuzz_target;
use derid::Utf8String;

fuzz_target!(|data: &[u8]| {
    let res = Utf8String::from_bytes(data.to_vec());
    assert_eq!(res.is_ok(), std::str::from_utf8(data).is_ok());

    if let Ok(s) = res {
        assert_eq!(s.as_bytes(), data);
        assert_eq!(Utf8String::from_text(s.as_str()), s);
    }
});
