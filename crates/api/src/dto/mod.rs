pub mod doh_params;
pub mod json_answer;

pub use doh_params::DohParams;
pub use json_answer::{JsonAnswer, JsonRecords};
