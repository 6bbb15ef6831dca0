//! Chain infrastructure - Outbound hop transport

mod http_client;

pub use http_client::HttpChainClient;
