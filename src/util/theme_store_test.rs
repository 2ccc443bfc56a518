use super::*;

fn keys() -> StorageKeys {
    StorageKeys::default()
}

// =============================================================
// read_preference
// =============================================================

#[test]
fn absent_values_read_as_system() {
    let store = MemoryStore::default();
    assert_eq!(read_preference(&store, &keys()), ThemePreference::System);
}

#[test]
fn invalid_values_read_as_system() {
    for raw in ["", "Dark", "true", "purple", " light"] {
        let store = MemoryStore::with_items([(STORAGE_KEY, raw)]);
        assert_eq!(read_preference(&store, &keys()), ThemePreference::System, "value {raw:?}");
    }
}

#[test]
fn auto_alias_reads_as_system() {
    let store = MemoryStore::with_items([(STORAGE_KEY, "auto")]);
    assert_eq!(read_preference(&store, &keys()), ThemePreference::System);
}

#[test]
fn unavailable_storage_reads_as_system() {
    let store = MemoryStore::unavailable();
    assert_eq!(read_preference(&store, &keys()), ThemePreference::System);
}

#[test]
fn write_then_read_round_trips() {
    let store = MemoryStore::default();
    for pref in ThemePreference::ALL {
        write_preference(&store, &keys(), pref).unwrap();
        assert_eq!(read_preference(&store, &keys()), pref);
    }
}

#[test]
fn write_uses_canonical_spelling() {
    let store = MemoryStore::default();
    write_preference(&store, &keys(), ThemePreference::System).unwrap();
    assert_eq!(store.get_item(STORAGE_KEY).unwrap().as_deref(), Some("system"));
    assert_eq!(store.get_item(LEGACY_STORAGE_KEY).unwrap(), None);
}

#[test]
fn write_reports_unavailable_storage() {
    let store = MemoryStore::unavailable();
    let err = write_preference(&store, &keys(), ThemePreference::Dark).unwrap_err();
    assert_eq!(err, StorageError::Unavailable);
}

// =============================================================
// Legacy key fallback
// =============================================================

#[test]
fn legacy_light_is_used_when_canonical_absent() {
    let store = MemoryStore::with_items([(LEGACY_STORAGE_KEY, "light")]);
    assert_eq!(read_preference(&store, &keys()), ThemePreference::Light);
}

#[test]
fn legacy_dark_is_used_when_canonical_absent() {
    let store = MemoryStore::with_items([(LEGACY_STORAGE_KEY, "dark")]);
    assert_eq!(read_preference(&store, &keys()), ThemePreference::Dark);
}

#[test]
fn legacy_non_explicit_values_fall_back_to_system() {
    for raw in ["auto", "system", "true"] {
        let store = MemoryStore::with_items([(LEGACY_STORAGE_KEY, raw)]);
        assert_eq!(read_preference(&store, &keys()), ThemePreference::System, "value {raw:?}");
    }
}

#[test]
fn canonical_key_wins_over_legacy() {
    let store = MemoryStore::with_items([(STORAGE_KEY, "system"), (LEGACY_STORAGE_KEY, "dark")]);
    assert_eq!(read_preference(&store, &keys()), ThemePreference::System);
}

#[test]
fn invalid_canonical_does_not_consult_legacy() {
    let store = MemoryStore::with_items([(STORAGE_KEY, "bogus"), (LEGACY_STORAGE_KEY, "dark")]);
    assert_eq!(read_preference(&store, &keys()), ThemePreference::System);
}

#[test]
fn legacy_key_can_be_disabled() {
    let store = MemoryStore::with_items([(LEGACY_STORAGE_KEY, "dark")]);
    let keys = StorageKeys { legacy: None, ..keys() };
    assert_eq!(read_preference(&store, &keys), ThemePreference::System);
}

#[test]
fn read_has_no_migration_side_effect() {
    let store = MemoryStore::with_items([(LEGACY_STORAGE_KEY, "dark")]);
    let _ = read_preference(&store, &keys());
    assert_eq!(store.get_item(STORAGE_KEY).unwrap(), None);
}
