//! Application use cases and transactions.

mod member;
mod seed;

pub use member::{member_count, member_insert_batch, member_list, MemberDto, MemberNew};
pub use seed::{seed_members, SEED_ROWS};
