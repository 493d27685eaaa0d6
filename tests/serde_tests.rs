#![cfg(feature = "serde")]

//! Integration tests for serde support in setkit.
//!
//! Both set types serialize as a sequence and deserialize from any sequence,
//! collapsing duplicates.

use rstest::rstest;
use setkit::Set;

// =============================================================================
// Set Integration Tests
// =============================================================================

#[rstest]
fn test_set_json_roundtrip() {
    let set: Set<i32> = (1..=10).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_set_serializes_as_sequence() {
    let set = Set::singleton("only".to_string());
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["only"]"#);
}

#[rstest]
fn test_set_deserialize_collapses_duplicates() {
    let set: Set<i32> = serde_json::from_str("[1, 1, 2, 2, 3]").unwrap();
    assert_eq!(set, Set::from([1, 2, 3]));
}

#[rstest]
fn test_set_deserialize_rejects_non_sequence() {
    let result: Result<Set<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_empty_set_roundtrip() {
    let set: Set<String> = Set::new();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[]");
    let restored: Set<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

// =============================================================================
// ConcurrentSet Integration Tests
// =============================================================================

#[cfg(all(feature = "concurrent", not(feature = "loom")))]
mod concurrent {
    use rstest::rstest;
    use setkit::ConcurrentSet;

    #[rstest]
    fn test_concurrent_set_json_roundtrip() {
        let set: ConcurrentSet<i32> = (1..=10).collect();
        let json = serde_json::to_string(&set).unwrap();
        let restored: ConcurrentSet<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(set, restored);
    }

    #[rstest]
    fn test_concurrent_set_deserialize_collapses_duplicates() {
        let set: ConcurrentSet<String> = serde_json::from_str(r#"["a", "b", "a"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
    }
}
