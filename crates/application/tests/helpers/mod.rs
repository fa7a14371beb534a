mod mock_resolver;

pub use mock_resolver::{a_record, MockDnsResolver, MockOutcome};
