pub use super::booking::Entity as Booking;
pub use super::feature::Entity as Feature;
pub use super::hotel::Entity as Hotel;
pub use super::hotel_image::Entity as HotelImage;
pub use super::password_reset_token::Entity as PasswordResetToken;
pub use super::payment_method::Entity as PaymentMethod;
pub use super::province::Entity as Province;
pub use super::review::Entity as Review;
pub use super::room::Entity as Room;
pub use super::room_image::Entity as RoomImage;
pub use super::user::Entity as User;
pub use super::ward::Entity as Ward;
