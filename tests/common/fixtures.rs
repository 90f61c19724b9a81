//! Test fixtures: ROM images and a fake extractor.

use std::path::{Path, PathBuf};

/// Header checksums of real dumps
pub const OOT_NTSC_10: u32 = 0xEC70_11B7;
pub const OOT_PAL_10: u32 = 0xB044_B569;
pub const MM_US_10: u32 = 0x5354_631C;

/// Smallest image the prober accepts
pub const ROM_SIZE: usize = 0x10_1000;

#[derive(Debug, Clone, Copy)]
pub enum Dump {
    /// .z64
    BigEndian,
    /// .v64
    ByteSwapped,
    /// .n64
    LittleEndian,
}

/// Bytes of a minimal ROM with `checksum` as its header CRC, in `dump` order.
pub fn rom_bytes(checksum: u32, dump: Dump) -> Vec<u8> {
    let mut data = vec![0u8; ROM_SIZE];
    data[..4].copy_from_slice(&[0x80, 0x37, 0x12, 0x40]);
    data[0x10..0x14].copy_from_slice(&checksum.to_be_bytes());
    match dump {
        Dump::BigEndian => {}
        Dump::ByteSwapped => data.chunks_exact_mut(2).for_each(|pair| pair.swap(0, 1)),
        Dump::LittleEndian => data.chunks_exact_mut(4).for_each(|word| word.reverse()),
    }
    data
}

pub fn write_rom(dir: &Path, name: &str, checksum: u32, dump: Dump) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, rom_bytes(checksum, dump)).unwrap();
    path
}

/// Shell script standing in for ZAPD. Appends its arguments to `calls.log`
/// in the working directory and exits with `$FAKE_ZAPD_EXIT` (default 0).
#[cfg(unix)]
pub fn write_fake_extractor(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-zapd.sh");
    std::fs::write(
        &path,
        "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> calls.log; done\nprintf '%s\\n' '--' >> calls.log\nexit \"${FAKE_ZAPD_EXIT:-0}\"\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
