#![allow(dead_code)]

pub mod mock_resolver;

pub use mock_resolver::{app_with, default_app, Canned, StaticResolver};
