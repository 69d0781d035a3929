pub mod api;
pub mod config;
pub mod db;
pub mod query;
pub mod server;
pub mod validate;

pub use self::config::Config;
