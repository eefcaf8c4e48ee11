use super::*;
use crate::storage::MemoryStorage;

const KEY: &str = "darkModeEnabled";

#[test]
fn missing_preference_is_off() {
    assert!(!read_preference(&MemoryStorage::new(), KEY));
}

#[test]
fn only_literal_true_is_on() {
    let storage = MemoryStorage::new();
    for (raw, expected) in [("true", true), ("false", false), ("TRUE", false), ("1", false), ("", false)] {
        storage.set_item(KEY, raw).unwrap();
        assert_eq!(read_preference(&storage, KEY), expected, "raw {raw:?}");
    }
}

#[test]
fn write_stores_string_flag() {
    let storage = MemoryStorage::new();
    write_preference(&storage, KEY, true).unwrap();
    assert_eq!(storage.raw(KEY).as_deref(), Some("true"));
    write_preference(&storage, KEY, false).unwrap();
    assert_eq!(storage.raw(KEY).as_deref(), Some("false"));
}
