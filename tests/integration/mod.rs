//! Integration tests

mod config_tests;
mod controller_tests;
