//! gatusgen library
//!
//! Discovers fully-qualified domain names inside trees of YAML documents
//! (Kubernetes manifests, Helm values, application configs) and synthesizes
//! a Gatus monitoring-endpoint configuration for them.

pub mod aggregate;
pub mod endpoints;
pub mod extract;
pub mod scan;

// Re-export commonly used types for convenience
pub use aggregate::{Aggregator, DiscoveredFqdn};
pub use endpoints::{Endpoint, EndpointsFile};
pub use extract::{is_valid_fqdn, walk, Candidate, Origin};
pub use scan::{ScanError, ScanOutcome, Scanner};
