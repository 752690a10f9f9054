use std::fs;

use pdfdupe::scanner::hasher::Hasher;
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #[test]
    fn test_hash_determinism(content in prop::collection::vec(any::<u8>(), 0..8192)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.pdf");
        fs::write(&path, &content).unwrap();

        let hasher = Hasher::new();
        let first = hasher.hash_file(&path).unwrap();
        let second = hasher.hash_file(&path).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_equal_content_hashes_equal(content in prop::collection::vec(any::<u8>(), 0..8192)) {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        fs::write(&a, &content).unwrap();
        fs::write(&b, &content).unwrap();

        let hasher = Hasher::new();
        prop_assert_eq!(hasher.hash_file(&a).unwrap(), hasher.hash_file(&b).unwrap());
    }

    #[test]
    fn test_appended_byte_changes_hash(content in prop::collection::vec(any::<u8>(), 0..4096), extra in any::<u8>()) {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        fs::write(&a, &content).unwrap();

        let mut longer = content.clone();
        longer.push(extra);
        fs::write(&b, &longer).unwrap();

        let hasher = Hasher::new();
        prop_assert_ne!(hasher.hash_file(&a).unwrap(), hasher.hash_file(&b).unwrap());
    }

    #[test]
    fn test_chunk_size_never_affects_fingerprint(
        content in prop::collection::vec(any::<u8>(), 0..16384),
        chunk in 1usize..512,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.pdf");
        fs::write(&path, &content).unwrap();

        let default = Hasher::new().hash_file(&path).unwrap();
        let small = Hasher::with_chunk_size(chunk).hash_file(&path).unwrap();

        prop_assert_eq!(default, small);
    }

    #[test]
    fn test_hex_is_32_lowercase_chars(content in prop::collection::vec(any::<u8>(), 0..1024)) {
        let fingerprint = Hasher::new().hash_bytes(&content);
        let hex = fingerprint.to_hex();

        prop_assert_eq!(hex.len(), 32);
        prop_assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
