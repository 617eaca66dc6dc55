//! Member roster use cases.

use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::params;
use serde::Serialize;

/// One (name, code) pair to be written to the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberNew {
    pub name: String,
    pub code: String,
}

impl MemberNew {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDto {
    pub name: String,
    pub code: String,
}

/// Insert a batch of members inside a single transaction.
///
/// Returns the number of rows written once the commit is durable. An empty
/// batch writes nothing and returns 0.
pub fn member_insert_batch(pool: &DbPool, members: &[MemberNew]) -> Result<usize, AppError> {
    if members.is_empty() {
        return Ok(0);
    }
    let mut conn = get_connection(pool);
    let tx = conn.transaction().map_err(|e| AppError::Db(e.to_string()))?;
    {
        let mut stmt = tx
            .prepare("INSERT INTO member (name, code) VALUES (?1, ?2)")
            .map_err(|e| AppError::Query(e.to_string()))?;
        for m in members {
            stmt.execute(params![m.name, m.code])
                .map_err(|e| AppError::Query(e.to_string()))?;
        }
    }
    tx.commit().map_err(|e| AppError::Db(e.to_string()))?;
    Ok(members.len())
}

/// Scan the whole roster.
///
/// No ORDER BY: an unindexed full scan yields rows in insertion order.
pub fn member_list(pool: &DbPool) -> Result<Vec<MemberDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare("SELECT name, code FROM member")
        .map_err(|e| AppError::Query(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(MemberDto {
            name: row.get(0)?,
            code: row.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

pub fn member_count(pool: &DbPool) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    conn.query_row("SELECT COUNT(*) FROM member", [], |r| r.get(0))
        .map_err(|e| AppError::Query(e.to_string()))
}
