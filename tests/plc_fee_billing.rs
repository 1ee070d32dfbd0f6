use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use recordbook::tables::plc_fee::{self, PlcFee};
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

fn fee(stu_id: &str, bill_dt: Option<NaiveDate>) -> PlcFee {
    PlcFee {
        stu_id: stu_id.to_string(),
        course: "M 100P".to_string(),
        exam_dt: date(2021, 10, 5),
        bill_dt,
    }
}

#[test]
fn most_recent_bill_date_skips_unbilled_fees() {
    let cache = open_cache("records-plc-fee");

    // Nothing billed yet.
    assert!(plc_fee::query_most_recent_bill_date(&cache)
        .expect("most recent")
        .is_none());

    assert!(plc_fee::insert(&cache, &fee("888888888", Some(date(2021, 10, 1)))).expect("insert"));
    assert!(plc_fee::insert(&cache, &fee("888888889", Some(date(2021, 11, 15)))).expect("insert"));
    assert!(plc_fee::insert(&cache, &fee("888888890", None)).expect("insert"));

    assert_eq!(
        plc_fee::query_most_recent_bill_date(&cache).expect("most recent"),
        Some(date(2021, 11, 15))
    );
}

#[test]
fn one_placement_fee_per_student() {
    let cache = open_cache("records-plc-fee-single");
    let rec = fee("888888888", None);

    assert!(plc_fee::insert(&cache, &rec).expect("insert"));

    let found = plc_fee::query_by_student(&cache, "888888888")
        .expect("query by student")
        .expect("fee present");
    assert_eq!(found, rec);

    assert!(plc_fee::query_by_student(&cache, "888888889")
        .expect("query by student")
        .is_none());

    assert!(plc_fee::delete(&cache, &rec).expect("delete"));
    assert!(plc_fee::query_all(&cache).expect("query all").is_empty());
}

#[test]
fn reserved_student_id_is_refused() {
    let cache = open_cache("records-plc-fee-reserved");

    assert!(!plc_fee::insert(&cache, &fee("990000001", None)).expect("insert refused"));
    assert!(plc_fee::query_all(&cache).expect("query all").is_empty());
}
