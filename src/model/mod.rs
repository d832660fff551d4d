//! Request and response DTOs exchanged with API clients.
//!
//! DTOs serialize with camelCase field names. Conversions from entity models
//! live next to the DTOs they produce so the data layer stays free of wire
//! format concerns.

pub mod api;
pub mod auth;
pub mod booking;
pub mod hotel;
pub mod payment_method;
pub mod province;
pub mod review;
pub mod room;
pub mod user;
