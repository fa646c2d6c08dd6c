pub mod config;
pub mod db;
pub mod error;
pub mod server;

pub use error::EcopointsError;
