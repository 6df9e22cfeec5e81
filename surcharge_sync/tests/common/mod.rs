#![allow(dead_code)]

use std::path::PathBuf;

use diesel::prelude::*;
use surcharge_sync::db::{connection, migrate};
use tempfile::TempDir;

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/test.db
}

pub fn setup_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    migrate::run_sqlite(&path).expect("migrations");

    let conn = connection::connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path }, conn)
}

pub fn count_records(conn: &mut SqliteConnection) -> i64 {
    use surcharge_sync::schema::surcharge_record::dsl::*;
    surcharge_record.count().get_result(conn).expect("count")
}
