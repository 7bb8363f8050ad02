pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod source;
