// Anvaya CRM - client data layer
//
// One fetch wrapper per API endpoint, an explicit agent-list cache, and
// pure view-composition helpers. Views are re-derived from fetched
// snapshots on every call; the agent cache is the only client-side state
// and is invalidated/refreshed explicitly, never implicitly.

pub mod api;
pub mod cache;
pub mod error;
pub mod views;

pub use api::AnvayaClient;
pub use cache::AgentCache;
pub use error::ClientError;
