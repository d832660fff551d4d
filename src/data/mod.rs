//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity models or small parameter structs to keep SQL concerns out of the service layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod booking;
pub mod hotel;
pub mod otp;
pub mod payment_method;
pub mod province;
pub mod review;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
