//! Parameterized inserts of barangay finance records (users, DFUR projects,
//! budget entries) into SQLite, with typed failures and an optional
//! boolean boundary for callers that only need success or failure.

pub mod db;
pub mod error;
pub mod inserter;
pub mod record;
pub mod settings;
pub mod statement;
pub mod store;
