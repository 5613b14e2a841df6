pub mod config;
pub mod leads;
pub mod llm;
pub mod model;
pub mod producer;
pub mod prompt;
pub mod server;
