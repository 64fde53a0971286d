pub mod config_error;
