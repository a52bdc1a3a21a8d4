pub mod config;
pub mod pages;
