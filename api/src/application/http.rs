pub mod detection;
pub mod health;
pub mod server;
pub mod suggestion;
