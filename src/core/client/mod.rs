// Backend HTTP plumbing
pub mod http_client;
pub mod http_transport;
