//! Black-box checks of the store against real files.

use stockkeep_inventory::{DEFAULT_INVENTORY_FILE, InventoryStore, read_snapshot};
use stockkeep_observability::{EventLevel, RecordingSink};

#[test]
fn scenario_survives_save_and_reload() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(DEFAULT_INVENTORY_FILE);
    let sink = RecordingSink::new();
    let mut store = InventoryStore::with_sink(sink.clone());
    let mut logs = Vec::new();

    store.add("apple", 10, Some(&mut logs)).unwrap();
    store.add("banana", 2, Some(&mut logs)).unwrap();
    store.remove("apple", 3).unwrap();
    store.remove("orange", 1).unwrap();
    store.save(&path).unwrap();

    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with(": Added 10 of apple"));
    assert!(logs[1].ends_with(": Added 2 of banana"));
    assert_eq!(
        sink.messages(EventLevel::Info),
        vec!["Added 10 of apple", "Added 2 of banana", "New qty for apple: 7"]
    );
    assert_eq!(
        sink.messages(EventLevel::Warning),
        vec!["Tried removing missing item orange"]
    );

    let mut reloaded = InventoryStore::with_sink(RecordingSink::new());
    reloaded.load(&path).unwrap();
    assert_eq!(reloaded.get_quantity("apple").unwrap(), 7);
    assert_eq!(reloaded.get_quantity("banana").unwrap(), 2);
    assert_eq!(reloaded.list_low_stock(5).unwrap(), vec!["banana"]);
    assert_eq!(reloaded.report(), "Items Report\napple -> 7\nbanana -> 2\n");
}

#[test]
fn missing_file_then_save_creates_it() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("fresh.json");

    let mut store = InventoryStore::with_sink(RecordingSink::new());
    store.load(&path).unwrap();
    assert!(store.is_empty());

    store.add("bolt", 40, None).unwrap();
    store.save(&path).unwrap();

    let snapshot = read_snapshot(&path).unwrap().unwrap();
    assert_eq!(snapshot.get("bolt"), Some(&40));
}

#[test]
fn string_quantity_in_file_is_invalid_format() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("inventory.json");
    std::fs::write(&path, r#"{"apple": "ten"}"#).unwrap();

    let mut store = InventoryStore::with_sink(RecordingSink::new());
    store.add("pear", 1, None).unwrap();

    let err = store.load(&path).unwrap_err();
    assert!(err.is_invalid_format());
    assert_eq!(store.get_quantity("pear").unwrap(), 1);
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut a = InventoryStore::with_sink(RecordingSink::new());
    let b = InventoryStore::with_sink(RecordingSink::new());
    a.add("apple", 1, None).unwrap();
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}
