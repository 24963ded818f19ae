//! Property tests for key construction and text encoding.

use proptest::prelude::*;

use wgmodel::{Key, WgModelError, KEY_LEN};

proptest! {
    #[test]
    fn test_exact_length_slices_accepted(bytes in prop::array::uniform32(any::<u8>())) {
        let key = Key::from_slice(&bytes).unwrap();
        prop_assert_eq!(key.as_bytes(), &bytes);
    }

    #[test]
    fn test_wrong_lengths_report_offending_length(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        prop_assume!(bytes.len() != KEY_LEN);
        match Key::from_slice(&bytes) {
            Err(WgModelError::InvalidKeyLength(len)) => prop_assert_eq!(len, bytes.len()),
            other => prop_assert!(false, "expected InvalidKeyLength, got {:?}", other),
        }
    }

    #[test]
    fn test_text_form_is_fixed_width(bytes in prop::array::uniform32(any::<u8>())) {
        let text = Key::from(bytes).to_base64();
        prop_assert_eq!(text.len(), 44);
        prop_assert!(text.ends_with('='));
    }

    #[test]
    fn test_distinct_keys_have_distinct_text(a in prop::array::uniform32(any::<u8>()),
                                             b in prop::array::uniform32(any::<u8>())) {
        prop_assume!(a != b);
        prop_assert_ne!(Key::from(a).to_base64(), Key::from(b).to_base64());
    }

    #[test]
    fn test_parse_inverts_encode(bytes in prop::array::uniform32(any::<u8>())) {
        let key = Key::from(bytes);
        let parsed = Key::from_base64(&key.to_base64()).unwrap();
        prop_assert_eq!(parsed, key);
    }

    #[test]
    fn test_derivation_is_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        let private = Key::from(seed);
        prop_assert_eq!(private.public_key(), private.public_key());
    }
}
