use proptest::prelude::*;

use crate::addr::Destination;
use crate::hash::DestHash;
use crate::keystore::{read_keypair, write_keypair};
use crate::keys::KeyPair;

// Raw destination sizes whose padded encoding lands in 516..=4096 chars.
const MIN_RAW: usize = 385;
const MAX_RAW: usize = 3072;

proptest! {
    #[test]
    fn destination_bytes_round_trip(
        raw in proptest::collection::vec(any::<u8>(), MIN_RAW..=MAX_RAW / 4)
    ) {
        let dest = Destination::from_bytes(&raw).unwrap();
        prop_assert_eq!(dest.to_bytes().unwrap(), raw);
    }

    #[test]
    fn destination_text_parses_idempotently(
        raw in proptest::collection::vec(any::<u8>(), MIN_RAW..=MIN_RAW + 64)
    ) {
        let dest = Destination::from_bytes(&raw).unwrap();
        let reparsed = Destination::from_base64(dest.as_base64()).unwrap();
        prop_assert_eq!(reparsed.as_base64(), dest.as_base64());
    }

    #[test]
    fn dest_hash_text_round_trip(bytes in any::<[u8; 32]>()) {
        let hash = DestHash::from(bytes);
        let parsed = DestHash::from_base32(&hash.to_base32()).unwrap();
        prop_assert_eq!(parsed.as_bytes(), &bytes);
    }

    #[test]
    fn keystore_round_trip(
        raw in proptest::collection::vec(any::<u8>(), MIN_RAW..=MIN_RAW + 32),
        priv_raw in proptest::collection::vec(any::<u8>(), 64..256usize)
    ) {
        let address = Destination::from_bytes(&raw).unwrap();
        let both = format!("{}{}", address.as_base64(), destkit_codec::b64_encode(&priv_raw));
        let keys = KeyPair::new(address, both);

        let mut buf = Vec::new();
        write_keypair(&keys, &mut buf).unwrap();
        let loaded = read_keypair(buf.as_slice()).unwrap();
        prop_assert_eq!(&loaded, &keys);
        let private = loaded.private().unwrap();
        prop_assert_eq!(private.as_slice(), priv_raw.as_slice());
    }
}
