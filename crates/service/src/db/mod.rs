//! Submission CRUD on top of `models` entities.

pub mod contact_service;
pub mod inquiry_service;
