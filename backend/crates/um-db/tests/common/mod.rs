#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{insert_test_user, test_fields};
pub use test_db::create_test_pool;
