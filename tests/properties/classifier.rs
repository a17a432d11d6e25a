//! Property tests for content classification.

use proptest::prelude::*;

use themesync::domain::services::{classify, encode_for_upload};
use themesync::{AssetKey, AssetPayload, ContentKind};

fn printable_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~\r\n]{0,200}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Printable ASCII with CR/LF is always text.
    #[test]
    fn property_printable_ascii_is_text(text in printable_text()) {
        prop_assert_eq!(classify(text.as_bytes()), ContentKind::Text);
    }

    /// PROPERTY: Any NUL byte makes the payload binary.
    #[test]
    fn property_nul_byte_is_binary(
        prefix in proptest::collection::vec(any::<u8>(), 0..64),
        suffix in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = prefix;
        bytes.push(0);
        bytes.extend(suffix);
        prop_assert_eq!(classify(&bytes), ContentKind::Binary);
    }

    /// PROPERTY: Classification follows the 30% non-printable threshold.
    #[test]
    fn property_threshold(
        printable in 1usize..200,
        non_printable in 0usize..200,
    ) {
        let mut bytes = vec![b'a'; printable];
        bytes.extend(std::iter::repeat(0xffu8).take(non_printable));

        let ratio = non_printable as f64 / bytes.len() as f64;
        let expected = if ratio > 0.3 { ContentKind::Binary } else { ContentKind::Text };
        prop_assert_eq!(classify(&bytes), expected);
    }

    /// PROPERTY: Text uploads never carry carriage returns.
    #[test]
    fn property_text_upload_has_no_carriage_returns(text in printable_text()) {
        let key = AssetKey::new("templates/page.liquid").unwrap();
        match encode_for_upload(&key, text.clone().into_bytes()) {
            AssetPayload::Text(value) => {
                prop_assert!(!value.contains('\r'));
                prop_assert_eq!(value, text.replace('\r', ""));
            }
            AssetPayload::Binary(_) => prop_assert!(false, "printable text encoded as binary"),
        }
    }

    /// PROPERTY: Binary uploads keep their bytes unchanged.
    #[test]
    fn property_binary_upload_is_lossless(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let key = AssetKey::new("assets/image.png").unwrap();
        prop_assert_eq!(encode_for_upload(&key, bytes.clone()), AssetPayload::Binary(bytes));
    }
}
