#![allow(dead_code)]

pub mod mock_dns_server;

pub use mock_dns_server::{MockBehavior, MockDnsServer};
