pub mod api;
pub mod client;
pub mod config;
pub mod output;
pub mod parser;
pub mod stats;
pub mod telemetry;
