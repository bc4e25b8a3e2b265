//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Admin registration, password verification and token issuing live here;
//! `token` holds the JWT encode/verify pair shared with the HTTP guard.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;
pub mod token;

pub use service::AuthService;
