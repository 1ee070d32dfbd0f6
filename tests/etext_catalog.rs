use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use recordbook::tables::etext::{self, Etext};
use recordbook::{Cache, Profile};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn open_cache(prefix: &str) -> Cache {
    let dir = temp_dir(prefix);
    let profile = Profile {
        name: "test".to_string(),
        path: dir.join("records.sqlite3"),
        schema_prefix: None,
        which_db: Some("TEST".to_string()),
    };
    Cache::open(&profile).expect("open records db")
}

#[test]
fn lookup_by_etext_id() {
    let cache = open_cache("records-etext");
    let rec = Etext {
        etext_id: "ALEKS52".to_string(),
        retention: Some("C".to_string()),
        purchase_url: Some("https://store.example.edu/aleks52".to_string()),
        refund_period: Some(30),
        key_entry: "N".to_string(),
        active: "Y".to_string(),
        button_label: Some("Open ALEKS".to_string()),
    };

    assert!(etext::insert(&cache, &rec).expect("insert"));

    let found = etext::query(&cache, "ALEKS52")
        .expect("query")
        .expect("etext present");
    assert_eq!(found, rec);
    assert_eq!(found.refund_period, Some(30));

    assert!(etext::query(&cache, "NOSUCH").expect("query").is_none());
}

#[test]
fn retired_etext_can_be_deleted() {
    let cache = open_cache("records-etext-delete");
    let rec = Etext {
        etext_id: "LEGACY1".to_string(),
        retention: None,
        purchase_url: None,
        refund_period: None,
        key_entry: "Y".to_string(),
        active: "N".to_string(),
        button_label: None,
    };

    assert!(etext::insert(&cache, &rec).expect("insert"));
    assert!(etext::delete(&cache, &rec).expect("delete"));
    assert!(etext::query_all(&cache).expect("query all").is_empty());
}
