//! Gatus endpoint synthesis and output rendering
//!
//! Maps each discovered fqdn to a monitoring endpoint and renders the
//! resulting configuration file.

use crate::aggregate::DiscoveredFqdn;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Health-check interval applied to every generated endpoint
const CHECK_INTERVAL: &str = "5m";

/// Health-check conditions applied to every generated endpoint, in order
const CHECK_CONDITIONS: [&str; 2] = ["[STATUS] == 200", "[RESPONSE_TIME] < 3000"];

/// One Gatus endpoint entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
    pub interval: String,
    pub conditions: Vec<String>,
}

impl Endpoint {
    /// Derive the endpoint for one discovered fqdn.
    ///
    /// Staging hosts collapse onto a single `{app}-staging` name; everything
    /// else is named after the host's first label. Name collisions are
    /// possible and not an error.
    pub fn from_discovered(discovered: &DiscoveredFqdn) -> Self {
        let name = if discovered.fqdn.contains("staging") {
            format!("{}-staging", discovered.app_name)
        } else {
            let label = discovered
                .fqdn
                .split('.')
                .next()
                .unwrap_or(discovered.fqdn.as_str());
            format!("{}-{}", discovered.app_name, label)
        };

        Self {
            name,
            url: format!("https://{}", discovered.fqdn),
            interval: CHECK_INTERVAL.to_string(),
            conditions: CHECK_CONDITIONS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Root structure of the generated configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsFile {
    pub endpoints: Vec<Endpoint>,
}

impl EndpointsFile {
    /// Build the output document from sorted, deduplicated discoveries.
    pub fn from_discovered(discovered: &[DiscoveredFqdn]) -> Self {
        Self {
            endpoints: discovered.iter().map(Endpoint::from_discovered).collect(),
        }
    }
}

/// Serialize the endpoints file with a generation-timestamp header.
pub fn render(file: &EndpointsFile) -> Result<String> {
    let body = serde_yaml::to_string(file).context("Failed to serialize endpoints")?;
    Ok(format!(
        "# Generated by gatusgen at {}\n{}",
        Utc::now().to_rfc3339(),
        body
    ))
}

/// Render and write the configuration to disk.
pub fn write_endpoints_file(file: &EndpointsFile, path: &Path) -> Result<()> {
    let rendered = render(file)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write endpoints file: {:?}", path))?;
    tracing::info!("Wrote {} endpoint(s) to {:?}", file.endpoints.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovered(fqdn: &str, app: &str) -> DiscoveredFqdn {
        DiscoveredFqdn {
            fqdn: fqdn.to_string(),
            source_file: "system/app/file.yaml".to_string(),
            app_name: app.to_string(),
        }
    }

    #[test]
    fn test_name_uses_first_label() {
        let endpoint = Endpoint::from_discovered(&discovered("api.app1.io", "app1"));
        assert_eq!(endpoint.name, "app1-api");
        assert_eq!(endpoint.url, "https://api.app1.io");
    }

    #[test]
    fn test_staging_fqdn_collapses_name() {
        let endpoint = Endpoint::from_discovered(&discovered("staging.app1.io", "app1"));
        assert_eq!(endpoint.name, "app1-staging");

        // substring match anywhere in the fqdn, not just the first label
        let endpoint = Endpoint::from_discovered(&discovered("api.staging.app1.io", "app1"));
        assert_eq!(endpoint.name, "app1-staging");
    }

    #[test]
    fn test_fixed_interval_and_conditions() {
        let endpoint = Endpoint::from_discovered(&discovered("api.app1.io", "app1"));
        assert_eq!(endpoint.interval, "5m");
        assert_eq!(
            endpoint.conditions,
            vec!["[STATUS] == 200", "[RESPONSE_TIME] < 3000"]
        );
    }

    #[test]
    fn test_render_has_header_and_endpoints_key() {
        let file = EndpointsFile::from_discovered(&[discovered("api.app1.io", "app1")]);
        let rendered = render(&file).unwrap();

        assert!(rendered.starts_with("# Generated by gatusgen at "));
        assert!(rendered.contains("endpoints:"));
        assert!(rendered.contains("name: app1-api"));
        assert!(rendered.contains("url: https://api.app1.io"));

        // the body below the header must round-trip
        let body = rendered.splitn(2, '\n').nth(1).unwrap();
        let reparsed: EndpointsFile = serde_yaml::from_str(body).unwrap();
        assert_eq!(reparsed.endpoints, file.endpoints);
    }

    #[test]
    fn test_render_empty_run() {
        let file = EndpointsFile::from_discovered(&[]);
        let rendered = render(&file).unwrap();
        assert!(rendered.contains("endpoints: []"));
    }
}
