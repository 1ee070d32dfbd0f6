use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use recordbook::tables::hold_type::{self, HoldType};
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
fn lookup_by_hold_code() {
    let cache = open_cache("records-hold-type");
    let fatal = HoldType {
        hold_id: "01".to_string(),
        sev_admin_hold: "F".to_string(),
        hold_type: "UNRETURNED RESOURCES".to_string(),
        add_hold: Some("Y".to_string()),
        delete_hold: Some("N".to_string()),
    };
    let advisory = HoldType {
        hold_id: "40".to_string(),
        sev_admin_hold: "N".to_string(),
        hold_type: "SEE ADVISOR".to_string(),
        add_hold: None,
        delete_hold: None,
    };

    assert!(hold_type::insert(&cache, &fatal).expect("insert"));
    assert!(hold_type::insert(&cache, &advisory).expect("insert"));

    let found = hold_type::query(&cache, "01")
        .expect("query")
        .expect("hold type present");
    assert_eq!(found, fatal);
    assert_eq!(found.sev_admin_hold, "F");

    assert_eq!(hold_type::query_all(&cache).expect("query all").len(), 2);
    assert!(hold_type::query(&cache, "77").expect("query").is_none());
}

#[test]
fn retired_code_can_be_deleted() {
    let cache = open_cache("records-hold-type-delete");
    let advisory = HoldType {
        hold_id: "40".to_string(),
        sev_admin_hold: "N".to_string(),
        hold_type: "SEE ADVISOR".to_string(),
        add_hold: None,
        delete_hold: None,
    };

    assert!(hold_type::insert(&cache, &advisory).expect("insert"));
    assert!(hold_type::delete(&cache, &advisory).expect("delete"));
    assert!(!hold_type::delete(&cache, &advisory).expect("delete again"));
}
