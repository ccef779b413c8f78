#![no_main]
use libfuzzer_sys::fuzz_target;
use lzma_header::{read_header, write_header};

fuzz_target!(|data: &[u8]| {
    // a decoded header that verifies must survive a re-encode byte-for-byte
    // in meaning (normalization already happened on the first read)
    let params = match read_header(data) {
        Ok(p) => p,
        Err(_) => return,
    };
    if params.verify().is_err() {
        // non-canonical properties bytes decode but never re-encode
        return;
    }

    let mut encoded = Vec::new();
    write_header(&mut encoded, &params).expect("verified parameters must serialize");
    let again = read_header(encoded.as_slice()).expect("re-encoded header must decode");
    assert_eq!(params, again);
});
