// Shirube URL signing library

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod imagor;
pub mod logging;
pub mod s3;
