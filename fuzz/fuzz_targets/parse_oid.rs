#![no_main]

use libfuzzer_sys::fuzz_target;
use derid::Oid;

fuzz_target!(|data: &[u8]| {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return
    };
    let oid = match text.parse::<Oid>() {
        Ok(oid) => oid,
        Err(_) => return
    };

    // Only the canonical text form is accepted, so it must come back out.
    assert_eq!(oid.to_string(), text);

    // Whatever parses under the default limits must also decode under them.
    let octets = oid.to_der();
    assert_eq!(octets.len(), oid.encoded_len());
    assert_eq!(Oid::from_der(&octets), Ok(oid));
});
