//! HTTP request handlers.
//!
//! Controllers stay thin: they authenticate where required, hand the request
//! to a service and wrap the result in the response envelope. Each handler
//! carries a `#[utoipa::path]` annotation for the generated OpenAPI document.

pub mod auth;
pub mod booking;
pub mod hotel;
pub mod payment_method;
pub mod province;
pub mod review;
pub mod room;
pub mod user;
