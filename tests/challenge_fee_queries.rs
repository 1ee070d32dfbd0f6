use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use recordbook::tables::challenge_fee::{self, ChallengeFee};
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

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn fee(stu_id: &str, course: &str, bill_dt: Option<NaiveDate>) -> ChallengeFee {
    ChallengeFee {
        stu_id: stu_id.to_string(),
        course: course.to_string(),
        exam_dt: date(2021, 10, 5),
        bill_dt,
    }
}

#[test]
fn one_fee_per_student_course() {
    let cache = open_cache("records-challenge-fee");

    assert!(challenge_fee::insert(&cache, &fee("888888888", "M 117", None)).expect("insert"));
    assert!(challenge_fee::insert(
        &cache,
        &fee("888888888", "M 118", Some(date(2021, 10, 20)))
    )
    .expect("insert"));
    assert!(challenge_fee::insert(&cache, &fee("888888889", "M 117", None)).expect("insert"));

    assert_eq!(
        challenge_fee::query_by_student(&cache, "888888888")
            .expect("query by student")
            .len(),
        2
    );

    let billed = challenge_fee::query_by_student_course(&cache, "888888888", "M 118")
        .expect("query by course")
        .expect("fee present");
    assert_eq!(billed.bill_dt, Some(date(2021, 10, 20)));

    assert!(challenge_fee::query_by_student_course(&cache, "888888888", "M 124")
        .expect("query by course")
        .is_none());
}

#[test]
fn delete_removes_single_fee() {
    let cache = open_cache("records-challenge-fee-delete");
    let unbilled = fee("888888888", "M 117", None);

    assert!(challenge_fee::insert(&cache, &unbilled).expect("insert"));
    assert!(challenge_fee::delete(&cache, &unbilled).expect("delete"));
    assert!(challenge_fee::query_all(&cache).expect("query all").is_empty());
    assert!(!challenge_fee::delete(&cache, &unbilled).expect("delete again"));
}

#[test]
fn reserved_student_id_is_refused() {
    let cache = open_cache("records-challenge-fee-reserved");

    assert!(
        !challenge_fee::insert(&cache, &fee("997654321", "M 117", None)).expect("insert refused")
    );
    assert!(challenge_fee::query_all(&cache).expect("query all").is_empty());
}
