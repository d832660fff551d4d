//! SeaORM entities for the stayhub database schema.

pub mod prelude;

pub mod booking;
pub mod feature;
pub mod hotel;
pub mod hotel_image;
pub mod password_reset_token;
pub mod payment_method;
pub mod province;
pub mod review;
pub mod room;
pub mod room_image;
pub mod user;
pub mod ward;
