pub mod config_entry;
