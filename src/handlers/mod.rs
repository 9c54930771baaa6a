pub mod healthz;
pub mod inspection;
pub mod istio;
pub mod resource;
pub mod status;
