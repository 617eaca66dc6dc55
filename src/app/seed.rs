//! Fixed seed data for the member roster.

use crate::app::member::{member_insert_batch, MemberNew};
use crate::error::AppError;
use crate::infra::DbPool;

/// The literal rows written on every run.
pub const SEED_ROWS: &[(&str, &str)] = &[("홍길동", "12345"), ("김철수", "12345")];

/// Write the fixed seed rows as one committed batch.
///
/// Append-only: the table has no uniqueness constraint, so each run adds
/// another copy of the seed rows.
pub fn seed_members(pool: &DbPool) -> Result<usize, AppError> {
    let rows: Vec<MemberNew> = SEED_ROWS
        .iter()
        .map(|(name, code)| MemberNew::new(*name, *code))
        .collect();
    member_insert_batch(pool, &rows)
}
