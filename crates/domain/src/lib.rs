//! Ferrous DoH Domain Layer
pub mod config;
pub mod doh;
pub mod errors;
pub mod name_server;

pub use config::{CliOverrides, Config, ConfigError};
pub use doh::{ConnectionScheme, DohFormat};
pub use errors::DomainError;
pub use name_server::NameServer;
