//! Property tests for asset key handling.

use std::path::Path;

use proptest::prelude::*;

use themesync::AssetKey;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(\\.[a-z]{1,5})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Key validation never panics.
    #[test]
    fn property_key_validation_never_panics(raw in ".{0,64}") {
        let _ = AssetKey::new(&raw);
    }

    /// PROPERTY: A valid key maps below the root and back to itself.
    #[test]
    fn property_key_path_round_trip(segments in proptest::collection::vec(segment(), 1..5)) {
        let key = AssetKey::new(segments.join("/")).unwrap();
        let root = Path::new("theme-root");
        let path = key.to_path(root);

        prop_assert!(path.starts_with(root));
        let relative = path.strip_prefix(root).unwrap();
        prop_assert_eq!(AssetKey::from_relative_path(relative).unwrap(), key);
    }

    /// PROPERTY: Keys with a `..` segment are always rejected.
    #[test]
    fn property_traversal_rejected(
        before in proptest::collection::vec(segment(), 0..3),
        after in proptest::collection::vec(segment(), 0..3),
    ) {
        let mut parts = before;
        parts.push("..".to_string());
        parts.extend(after);
        prop_assert!(AssetKey::new(parts.join("/")).is_err());
    }

    /// PROPERTY: Swapping the extension keeps the directory and stem.
    #[test]
    fn property_with_extension_keeps_stem(dir in segment(), stem in "[a-z]{1,8}") {
        let key = AssetKey::new(format!("{dir}/{stem}.scss")).unwrap();
        let css = key.with_extension("css");
        prop_assert_eq!(css.as_str(), format!("{dir}/{stem}.css"));
        prop_assert_eq!(css.extension(), Some("css"));
    }
}
