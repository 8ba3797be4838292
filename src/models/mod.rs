pub mod admin;
pub mod login_payload;
pub mod state;
pub mod user;
