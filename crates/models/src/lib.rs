pub mod errors;
pub mod db;
pub mod validate;
pub mod contact;
pub mod service_inquiry;
pub mod admin;

#[cfg(test)]
mod tests;
