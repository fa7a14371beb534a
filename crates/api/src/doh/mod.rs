//! Translation between HTTP exchanges and DNS messages (RFC 8484).

pub mod decoder;
pub mod encoder;
pub mod headers;

pub use decoder::{Decoded, RequestDecoder};
pub use encoder::{DohPayload, ResponseEncoder};
pub use headers::HeaderPolicy;
