//! Business operations for the inquiry desk.
//!
//! `auth` owns admin accounts and access tokens; `db` stores and reads
//! public submissions. Both sit on top of the `models` entities and report
//! failures through their own error enums.

pub mod errors;
pub mod auth;
pub mod db;
#[cfg(test)]
pub mod test_support;
