pub mod backlog;
pub mod bundle;
pub mod config;
pub mod enrichment;
pub mod generator;
pub mod pipeline;
pub mod prompt;
pub mod uploader;
