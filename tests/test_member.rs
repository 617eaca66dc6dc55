//! Member roster integration tests

use std::sync::Mutex;

use memberbook::app::{member_count, member_insert_batch, member_list, MemberNew};
use memberbook::infra::db::init_test_db;
use memberbook::infra::DbPool;
use rusqlite::Connection;

// ──────────────────────── Helper ────────────────────────

fn make_member(name: &str, code: &str) -> MemberNew {
    MemberNew::new(name, code)
}

// ══════════════════════════════════════════════════════════
//  member_list
// ══════════════════════════════════════════════════════════

#[test]
fn list_fresh_store_is_empty() {
    let pool = init_test_db();
    let rows = member_list(&pool).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn list_returns_rows_in_insertion_order() {
    let pool = init_test_db();
    member_insert_batch(
        &pool,
        &[
            make_member("first", "00001"),
            make_member("second", "00002"),
            make_member("third", "00003"),
        ],
    )
    .unwrap();

    let rows = member_list(&pool).unwrap();
    let names: Vec<&str> = rows.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn list_preserves_non_ascii_names() {
    let pool = init_test_db();
    member_insert_batch(&pool, &[make_member("홍길동", "12345")]).unwrap();

    let rows = member_list(&pool).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "홍길동");
    assert_eq!(rows[0].code, "12345");
}

// ══════════════════════════════════════════════════════════
//  member_insert_batch
// ══════════════════════════════════════════════════════════

#[test]
fn insert_batch_returns_rows_written() {
    let pool = init_test_db();
    let n = member_insert_batch(&pool, &[make_member("a", "1"), make_member("b", "2")]).unwrap();
    assert_eq!(n, 2);
    assert_eq!(member_count(&pool).unwrap(), 2);
}

#[test]
fn insert_empty_batch_writes_nothing() {
    let pool = init_test_db();
    let n = member_insert_batch(&pool, &[]).unwrap();
    assert_eq!(n, 0);
    assert_eq!(member_count(&pool).unwrap(), 0);
}

#[test]
fn insert_allows_duplicate_rows() {
    // No key and no uniqueness constraint on the table
    let pool = init_test_db();
    member_insert_batch(
        &pool,
        &[make_member("김철수", "12345"), make_member("김철수", "12345")],
    )
    .unwrap();
    assert_eq!(member_count(&pool).unwrap(), 2);
}

// ══════════════════════════════════════════════════════════
//  error paths
// ══════════════════════════════════════════════════════════

fn bare_pool() -> DbPool {
    // Connection without any schema setup
    DbPool(Mutex::new(Connection::open_in_memory().unwrap()))
}

#[test]
fn list_without_member_table_fails_with_query_error() {
    let pool = bare_pool();
    let err = member_list(&pool).unwrap_err();
    assert_eq!(err.code(), "QUERY_ERROR");
}

#[test]
fn insert_without_member_table_fails_and_writes_nothing() {
    let pool = bare_pool();
    let err = member_insert_batch(&pool, &[make_member("a", "1")]).unwrap_err();
    assert_eq!(err.code(), "QUERY_ERROR");

    // Creating the table afterwards must reveal an empty roster
    pool.0
        .lock()
        .unwrap()
        .execute("CREATE TABLE member (name TEXT, code TEXT)", [])
        .unwrap();
    assert_eq!(member_count(&pool).unwrap(), 0);
}
