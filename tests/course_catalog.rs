use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use recordbook::tables::course::{self, Course};
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

fn algebra() -> Course {
    Course {
        course: "M 117".to_string(),
        nbr_units: Some(4),
        course_name: Some("College Algebra in Context I".to_string()),
        nbr_credits: Some(1),
        calc_ok: Some("Y".to_string()),
        course_label: Some("MATH 117".to_string()),
        inline_prefix: Some("17".to_string()),
        is_tutorial: "N".to_string(),
        require_etext: Some("N".to_string()),
    }
}

#[test]
fn lookup_by_course_id() {
    let cache = open_cache("records-course");
    let tutorial = Course {
        course: "M 100T".to_string(),
        nbr_units: None,
        course_name: Some("Math Placement Tutorial".to_string()),
        nbr_credits: None,
        calc_ok: None,
        course_label: None,
        inline_prefix: None,
        is_tutorial: "Y".to_string(),
        require_etext: None,
    };

    assert!(course::insert(&cache, &algebra()).expect("insert"));
    assert!(course::insert(&cache, &tutorial).expect("insert"));

    let found = course::query(&cache, "M 117")
        .expect("query")
        .expect("course present");
    assert_eq!(found, algebra());
    assert_eq!(found.is_tutorial, "N");

    let found = course::query(&cache, "M 100T")
        .expect("query")
        .expect("tutorial present");
    assert_eq!(found.is_tutorial, "Y");

    assert!(course::query(&cache, "M 999").expect("query").is_none());
}

#[test]
fn delete_removes_catalog_row() {
    let cache = open_cache("records-course-delete");

    assert!(course::insert(&cache, &algebra()).expect("insert"));
    assert!(course::delete(&cache, &algebra()).expect("delete"));
    assert!(course::query_all(&cache).expect("query all").is_empty());
}
