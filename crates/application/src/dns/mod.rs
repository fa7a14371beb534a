mod answer;
mod query;

pub use answer::DnsAnswer;
pub use query::DnsQuery;
