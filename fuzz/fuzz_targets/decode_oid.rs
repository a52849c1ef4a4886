#![no_main]

use libfuzzer_sys::fuzz_target;
use derid::{AlgorithmIdentifier, Oid};

fuzz_target!(|data: &[u8]| {
    let oid = match Oid::from_der(data) {
        Ok(oid) => oid,
        Err(_) => {
            assert!(AlgorithmIdentifier::from_der(data).is_err());
            return
        }
    };

    // Only the canonical encoding is accepted, so it must come back out.
    assert_eq!(oid.to_der().as_ref(), data);
    assert_eq!(oid.encoded_len(), data.len());

    let text = oid.to_string();
    assert_eq!(text.parse::<Oid>().unwrap(), oid);
    assert_eq!(
        AlgorithmIdentifier::from_der(data).unwrap().algorithm(), &oid
    );
});
