pub mod info;
pub mod monitor;
