use rusqlite::Connection;

use crate::cfg::Profile;

pub fn open_db(profile: &Profile) -> anyhow::Result<Connection> {
    if let Some(parent) = profile.path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(&profile.path)?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS which_db(
            descr TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS admin_hold(
            stu_id TEXT NOT NULL,
            hold_id TEXT NOT NULL,
            sev_admin_hold TEXT NOT NULL,
            times_display INTEGER,
            create_dt TEXT NOT NULL,
            PRIMARY KEY(stu_id, hold_id)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_admin_hold_student ON admin_hold(stu_id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS hold_type(
            hold_id TEXT PRIMARY KEY,
            sev_admin_hold TEXT NOT NULL,
            hold_type TEXT NOT NULL,
            add_hold TEXT,
            delete_hold TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS applicant(
            stu_id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            birthdate TEXT,
            ethnicity TEXT,
            gender TEXT,
            college TEXT,
            prog_study TEXT,
            hs_code TEXT,
            tr_credits TEXT,
            resident TEXT,
            resident_state TEXT,
            resident_county TEXT,
            hs_gpa TEXT,
            hs_class_rank INTEGER,
            hs_size_class INTEGER,
            act_score INTEGER,
            sat_score INTEGER,
            pidm INTEGER,
            apln_term TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS calcs(
            stu_id TEXT NOT NULL,
            issued_nbr TEXT NOT NULL,
            return_nbr TEXT,
            serial_nbr INTEGER,
            exam_dt TEXT,
            PRIMARY KEY(stu_id, issued_nbr)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_calcs_student ON calcs(stu_id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS campus_calendar(
            campus_dt TEXT NOT NULL,
            dt_desc TEXT NOT NULL,
            open_time1 TEXT,
            open_time2 TEXT,
            open_time3 TEXT,
            close_time1 TEXT,
            close_time2 TEXT,
            close_time3 TEXT,
            weekdays_1 TEXT,
            weekdays_2 TEXT,
            weekdays_3 TEXT,
            PRIMARY KEY(campus_dt, dt_desc)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS challenge_fee(
            stu_id TEXT NOT NULL,
            course TEXT NOT NULL,
            exam_dt TEXT NOT NULL,
            bill_dt TEXT,
            PRIMARY KEY(stu_id, course)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS cohort(
            cohort TEXT PRIMARY KEY,
            size INTEGER,
            instructor TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS course(
            course TEXT PRIMARY KEY,
            nbr_units INTEGER,
            course_name TEXT,
            nbr_credits INTEGER,
            calc_ok TEXT,
            course_label TEXT,
            inline_prefix TEXT,
            is_tutorial TEXT NOT NULL,
            require_etext TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS discipline(
            stu_id TEXT NOT NULL,
            dt_incident TEXT NOT NULL,
            incident_type TEXT NOT NULL,
            course TEXT NOT NULL,
            unit INTEGER NOT NULL,
            cheat_desc TEXT,
            action_type TEXT,
            action_comment TEXT,
            interviewer TEXT,
            proctor TEXT,
            PRIMARY KEY(stu_id, dt_incident, incident_type, course, unit)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_discipline_student ON discipline(stu_id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS etext(
            etext_id TEXT PRIMARY KEY,
            retention TEXT,
            purchase_url TEXT,
            refund_period INTEGER,
            key_entry TEXT NOT NULL,
            active TEXT NOT NULL,
            button_label TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS pacing_rules(
            term TEXT NOT NULL,
            term_yr INTEGER NOT NULL,
            pacing_structure TEXT NOT NULL,
            activity_type TEXT NOT NULL,
            requirement TEXT NOT NULL,
            PRIMARY KEY(term, term_yr, pacing_structure, activity_type, requirement)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS plc_fee(
            stu_id TEXT NOT NULL,
            course TEXT NOT NULL,
            exam_dt TEXT NOT NULL,
            bill_dt TEXT,
            PRIMARY KEY(stu_id, course)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS special_stus(
            stu_id TEXT NOT NULL,
            stu_type TEXT NOT NULL,
            start_dt TEXT,
            end_dt TEXT,
            PRIMARY KEY(stu_id, stu_type)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_special_stus_type ON special_stus(stu_type)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS stetext(
            stu_id TEXT NOT NULL,
            etext_id TEXT NOT NULL,
            active_dt TEXT NOT NULL,
            etext_key TEXT,
            expiration_dt TEXT,
            refund_deadline_dt TEXT,
            refund_dt TEXT,
            refund_reason TEXT,
            PRIMARY KEY(stu_id, etext_id, active_dt)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_stetext_student ON stetext(stu_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_stetext_key ON stetext(etext_key)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS stmsg(
            stu_id TEXT NOT NULL,
            msg_dt TEXT NOT NULL,
            pace INTEGER,
            course_index INTEGER,
            touch_point TEXT NOT NULL,
            msg_code TEXT NOT NULL,
            sender TEXT,
            PRIMARY KEY(stu_id, msg_dt, touch_point, msg_code)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_stmsg_student ON stmsg(stu_id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS testing_centers(
            testing_center_id TEXT PRIMARY KEY,
            tc_name TEXT NOT NULL,
            address_1 TEXT,
            address_2 TEXT,
            address_3 TEXT,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            zip_code TEXT NOT NULL,
            active TEXT NOT NULL,
            dtime_created TEXT NOT NULL,
            dtime_approved TEXT,
            dtime_denied TEXT,
            dtime_revoked TEXT,
            is_remote TEXT NOT NULL,
            is_proctored TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS user_clearance(
            login TEXT NOT NULL,
            clear_function TEXT NOT NULL,
            clear_type INTEGER,
            clear_passwd TEXT,
            PRIMARY KEY(login, clear_function)
        )",
        [],
    )?;

    if let Some(marker) = profile.which_db.as_deref() {
        seed_which_db(&conn, marker)?;
    }

    Ok(conn)
}

// A database keeps the marker it was created with; reopening under a profile
// with a different marker must not overwrite it.
fn seed_which_db(conn: &Connection, marker: &str) -> anyhow::Result<()> {
    let rows: i64 = conn.query_row("SELECT COUNT(*) FROM which_db", [], |row| row.get(0))?;
    if rows == 0 {
        conn.execute("INSERT INTO which_db(descr) VALUES(?)", [marker])?;
    }
    Ok(())
}
