//! Ferrous DoH Application Layer
pub mod codec;
pub mod dns;
pub mod ports;
pub mod use_cases;
