pub mod client;
pub mod resolver;
pub mod transport;

pub use client::{DohClient, DohMethod};
pub use resolver::{UdpDnsResolver, ATTEMPT_TIMEOUT, MAX_ATTEMPTS};
