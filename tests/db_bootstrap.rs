use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use recordbook::tables::cohort::{self, Cohort};
use recordbook::tables::course::{self, Course};
use recordbook::{Cache, DatabaseConfig, Profile};
use serde_json::json;

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

fn profile(path: PathBuf) -> Profile {
    Profile {
        name: "test".to_string(),
        path,
        schema_prefix: None,
        which_db: Some("TEST".to_string()),
    }
}

fn algebra() -> Course {
    Course {
        course: "M 117".to_string(),
        nbr_units: Some(4),
        course_name: Some("College Algebra in Context I".to_string()),
        nbr_credits: Some(1),
        calc_ok: Some("Y".to_string()),
        course_label: None,
        inline_prefix: None,
        is_tutorial: "N".to_string(),
        require_etext: None,
    }
}

#[test]
fn config_file_selects_a_working_profile() {
    let dir = temp_dir("records-bootstrap-config");
    let db_path = dir.join("records.sqlite3");
    let cfg_path = dir.join("db-config.json");

    let payload = json!({
        "profiles": [
            { "name": "test", "path": db_path, "which_db": "TEST" },
            { "name": "prod", "path": "/var/lib/records/records.sqlite3" }
        ]
    });
    std::fs::write(&cfg_path, payload.to_string()).expect("write config");

    let cfg = DatabaseConfig::load(&cfg_path).expect("load config");
    assert_eq!(cfg.profiles.len(), 2);
    assert!(cfg.profile("missing").is_none());

    // Fields left out of the JSON default to None.
    let prod = cfg.profile("prod").expect("prod profile");
    assert!(prod.schema_prefix.is_none());
    assert!(prod.which_db.is_none());

    let test = cfg.profile("test").expect("test profile");
    assert_eq!(test.which_db.as_deref(), Some("TEST"));

    let cache = Cache::open(test).expect("open records db");
    assert!(course::insert(&cache, &algebra()).expect("insert"));
    assert_eq!(
        course::query(&cache, "M 117").expect("query"),
        Some(algebra())
    );
}

#[test]
fn duplicate_primary_key_is_an_error() {
    let dir = temp_dir("records-bootstrap-dup");
    let cache = Cache::open(&profile(dir.join("records.sqlite3"))).expect("open records db");

    assert!(course::insert(&cache, &algebra()).expect("first insert"));
    assert!(course::insert(&cache, &algebra()).is_err());
}

#[test]
fn delete_of_absent_row_reports_false() {
    let dir = temp_dir("records-bootstrap-absent");
    let cache = Cache::open(&profile(dir.join("records.sqlite3"))).expect("open records db");

    assert!(!course::delete(&cache, &algebra()).expect("delete absent"));
}

#[test]
fn schema_prefix_reaches_an_attached_database() {
    let legacy_dir = temp_dir("records-bootstrap-legacy");
    let legacy_path = legacy_dir.join("records.sqlite3");

    // Build the legacy file through an unprefixed profile first.
    let legacy = Cache::open(&profile(legacy_path.clone())).expect("open legacy db");
    assert!(course::insert(&legacy, &algebra()).expect("seed course"));
    drop(legacy);

    let front_dir = temp_dir("records-bootstrap-front");
    let front = Profile {
        name: "front".to_string(),
        path: front_dir.join("front.sqlite3"),
        schema_prefix: Some("legacy".to_string()),
        which_db: None,
    };
    let cache = Cache::open(&front).expect("open front db");
    cache
        .conn()
        .execute(
            "ATTACH DATABASE ? AS legacy",
            [legacy_path.to_string_lossy().as_ref()],
        )
        .expect("attach legacy db");

    // Reads resolve through the prefix to the attached file.
    assert_eq!(
        course::query(&cache, "M 117").expect("query"),
        Some(algebra())
    );

    // So do writes.
    let group = Cohort {
        cohort: "FA21-ALG-A".to_string(),
        size: Some(18),
        instructor: None,
    };
    assert!(cohort::insert(&cache, &group).expect("insert through prefix"));
    drop(cache);

    let legacy = Cache::open(&profile(legacy_path)).expect("reopen legacy db");
    assert_eq!(
        cohort::query(&legacy, "FA21-ALG-A").expect("query"),
        Some(group)
    );
}
