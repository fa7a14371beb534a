pub mod system_resolver;

pub use system_resolver::{default_name_server, first_name_server};
