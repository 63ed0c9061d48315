/// Server bridge owning the base URL and the session token
pub mod bridge;
/// Guarded API client built on the bridge
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Composable layers wrapped around bridge calls
pub mod layers;
