//! One module per legacy table: the record struct, its schema description,
//! and the queries that go beyond the generic CRUD in `crate::record`.

pub mod admin_hold;
pub mod applicant;
pub mod calcs;
pub mod campus_calendar;
pub mod challenge_fee;
pub mod cohort;
pub mod course;
pub mod discipline;
pub mod etext;
pub mod hold_type;
pub mod pacing_rules;
pub mod plc_fee;
pub mod special_stus;
pub mod stetext;
pub mod stmsg;
pub mod testing_centers;
pub mod user_clearance;
pub mod which_db;
