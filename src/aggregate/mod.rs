//! Run-scoped candidate aggregation
//!
//! Collects every candidate across all scanned files, keeps the first
//! occurrence of each fqdn, and orders the result deterministically.

use std::collections::HashSet;

/// One fqdn retained for monitoring, attributed to the file and application
/// it was first seen in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFqdn {
    pub fqdn: String,
    pub source_file: String,
    pub app_name: String,
}

/// First-wins deduplicating collector
#[derive(Debug, Default)]
pub struct Aggregator {
    discovered: Vec<DiscoveredFqdn>,
    seen: HashSet<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one candidate occurrence.
    ///
    /// Later occurrences of an already-seen fqdn are dropped regardless of
    /// differing source file or application. Comparison is case-sensitive
    /// on the value as extracted.
    pub fn record(&mut self, fqdn: &str, source_file: &str, app_name: &str) {
        if !self.seen.insert(fqdn.to_string()) {
            return;
        }
        self.discovered.push(DiscoveredFqdn {
            fqdn: fqdn.to_string(),
            source_file: source_file.to_string(),
            app_name: app_name.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Consume the collector, returning records sorted by
    /// `(app_name, fqdn)` ascending.
    pub fn into_sorted(self) -> Vec<DiscoveredFqdn> {
        let mut discovered = self.discovered;
        discovered.sort_by(|a, b| {
            a.app_name
                .cmp(&b.app_name)
                .then_with(|| a.fqdn.cmp(&b.fqdn))
        });
        discovered
    }
}
