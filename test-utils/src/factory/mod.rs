//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories generate unique values from a shared atomic counter
//! so repeated calls never collide on unique columns.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (user, hotel, room, method) =
//!     factory::helpers::create_booking_dependencies(&db).await?;
//! ```

pub mod booking;
pub mod feature;
pub mod helpers;
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

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use feature::create_feature;
pub use hotel::create_hotel;
pub use hotel_image::create_hotel_image;
pub use password_reset_token::create_otp_token;
pub use payment_method::create_payment_method;
pub use province::create_province;
pub use review::create_review;
pub use room::create_room;
pub use room_image::create_room_image;
pub use user::create_user;
pub use ward::create_ward;
