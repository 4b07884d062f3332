pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod models;
pub mod roster;
pub mod submit;

pub use db::Database;
