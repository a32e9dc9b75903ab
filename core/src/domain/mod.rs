pub mod common;
pub mod detection;
pub mod suggestion;
