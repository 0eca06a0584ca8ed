// Infrastructure layer - Configuration, storage and HTTP encoders
pub mod chunked_json;
pub mod config;
pub mod http_response;
pub mod memory_store;
