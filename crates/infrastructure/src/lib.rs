//! Ferrous DoH Infrastructure Layer
pub mod dns;
pub mod system;
