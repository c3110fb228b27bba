pub mod client;
pub mod secrets;
