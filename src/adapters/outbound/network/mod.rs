/// Network adapters for the fleet API and the support feed
mod addigy_client;
mod sofa_client;

pub use addigy_client::AddigyClient;
pub use sofa_client::SofaClient;
