pub mod dns_query;
pub mod health;

pub use dns_query::dns_query;
pub use health::health_check;
