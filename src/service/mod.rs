//! Business logic layer between controllers and repositories.
//!
//! Services validate input, enforce domain rules and assemble response DTOs.
//! They borrow the database connection so one request never holds more than
//! its own handles.

pub mod auth;
pub mod booking;
pub mod email;
pub mod hotel;
pub mod jwt;
pub mod payment_method;
pub mod province;
pub mod review;
pub mod room;
pub mod user;
