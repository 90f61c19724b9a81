#![no_main]

use libfuzzer_sys::fuzz_target;
use romex::{FingerprintRegistry, HeaderChecksum, RomByteOrder};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let Some(order) = RomByteOrder::detect([data[0], data[1], data[2], data[3]]) else {
        return;
    };
    let mut header = data.to_vec();
    order.normalize(&mut header);
    assert_eq!(&header[..4], &RomByteOrder::MAGIC);

    if let Some(checksum) = HeaderChecksum::from_header(&header) {
        if let Ok(registry) = FingerprintRegistry::builtin() {
            let _ = registry.lookup(&checksum);
        }
    }
});
