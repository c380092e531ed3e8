use airbnb_core::db::schema::ensure_schema;
use airbnb_core::db::{close_db, open_db, open_db_in_memory};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_users_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(
        users_columns(&conn),
        vec![
            ("id".to_string(), "INTEGER".to_string(), false, true),
            ("name".to_string(), "TEXT".to_string(), true, false),
            ("email".to_string(), "TEXT".to_string(), true, false),
        ]
    );
}

#[test]
fn open_db_creates_missing_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("air_bnb_database.db");
    assert!(!path.exists());

    let conn = open_db(&path).unwrap();
    close_db(conn).unwrap();

    assert!(path.exists());
}

#[test]
fn ensure_schema_is_idempotent_and_keeps_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO users (name, email) VALUES ('Jane Roe', 'b@y.com');",
        [],
    )
    .unwrap();

    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn reopening_unversioned_store_with_existing_table_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT UNIQUE NOT NULL);
         INSERT INTO users (name, email) VALUES ('John Doe', 'mosaproject1@gmail.com');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let name: String = conn
        .query_row("SELECT name FROM users WHERE id = 1;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "John Doe");
    assert_eq!(user_version(&conn), 0);
}

#[test]
fn opening_store_stamped_by_another_tool_keeps_table_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamped.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT UNIQUE NOT NULL);
         INSERT INTO users (name, email) VALUES ('Jane Roe', 'b@y.com');
         PRAGMA user_version = 7;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    ensure_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(user_version(&conn), 7);
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn users_columns(conn: &Connection) -> Vec<(String, String, bool, bool)> {
    let mut stmt = conn.prepare("PRAGMA table_info(users);").unwrap();
    let columns = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>("name")?,
                row.get::<_, String>("type")?,
                row.get::<_, i64>("notnull")? == 1,
                row.get::<_, i64>("pk")? == 1,
            ))
        })
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    columns
}
