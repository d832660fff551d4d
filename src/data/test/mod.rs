mod booking;
mod hotel;
mod otp;
mod payment_method;
mod province;
mod review;
mod room;
mod user;
