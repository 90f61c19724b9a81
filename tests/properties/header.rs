//! Property tests for ROM header parsing.

use proptest::prelude::*;

use romex::{HeaderChecksum, RomByteOrder};

fn swap_pairs(data: &mut [u8]) {
    data.chunks_exact_mut(2).for_each(|pair| pair.swap(0, 1));
}

fn reverse_words(data: &mut [u8]) {
    data.chunks_exact_mut(4).for_each(|word| word.reverse());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every dump layout normalizes to the same header checksum.
    #[test]
    fn property_all_dump_layouts_agree(
        checksum in any::<u32>(),
        rest in proptest::collection::vec(any::<u8>(), 0x38),
    ) {
        let mut header = Vec::with_capacity(0x40);
        header.extend_from_slice(&RomByteOrder::MAGIC);
        header.extend_from_slice(&rest[..12]);
        header.extend_from_slice(&checksum.to_be_bytes());
        header.extend_from_slice(&rest[12..]);
        prop_assert_eq!(header.len(), 0x40);

        let mut swapped = header.clone();
        swap_pairs(&mut swapped);
        let mut little = header.clone();
        reverse_words(&mut little);

        for (mut bytes, expected) in [
            (header, RomByteOrder::BigEndian),
            (swapped, RomByteOrder::ByteSwapped),
            (little, RomByteOrder::LittleEndian),
        ] {
            let order = RomByteOrder::detect([bytes[0], bytes[1], bytes[2], bytes[3]]);
            prop_assert_eq!(order, Some(expected));
            expected.normalize(&mut bytes);
            prop_assert_eq!(
                HeaderChecksum::from_header(&bytes),
                Some(HeaderChecksum::new(checksum))
            );
        }
    }

    /// PROPERTY: detection never panics and only accepts the three magic words.
    #[test]
    fn property_detect_only_accepts_magic(word in any::<[u8; 4]>()) {
        let accepted = RomByteOrder::detect(word).is_some();
        let magic = [
            [0x80, 0x37, 0x12, 0x40],
            [0x37, 0x80, 0x40, 0x12],
            [0x40, 0x12, 0x37, 0x80],
        ];
        prop_assert_eq!(accepted, magic.contains(&word));
    }
}
