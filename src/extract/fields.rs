//! Per-entry field dispatch
//!
//! Decides, for one mapping entry, whether the value carries hostnames
//! directly, inside a URL, inside a list, or inside an embedded YAML
//! document, and harvests accordingly.

use super::validator::is_valid_fqdn;
use super::walker;
use super::{Candidate, Origin};
use serde_yaml::Value;
use url::Url;

/// Keys whose string value is a hostname
const DIRECT_KEYS: &[&str] = &["fqdn", "host", "commonName", "domain"];

/// Keys whose string value is a URL or a bare hostname
const URL_KEYS: &[&str] = &["issuer", "url", "endpoint"];

/// Keys whose sequence value lists hostnames
const LIST_KEYS: &[&str] = &["hosts", "dnsNames"];

/// Harvest candidates from a single mapping entry.
///
/// Dispatch is by exact key name plus value type, first match wins. A key
/// from a harvested set with a mismatched value type (e.g. `host` holding a
/// sequence) matches nothing and is recursed into unchanged. A matched
/// entry is consumed even when its filters yield no candidate.
pub fn extract_entry(key: &str, value: &Value, path: &str) -> Vec<Candidate> {
    match value {
        Value::String(s) if DIRECT_KEYS.contains(&key) => direct_candidate(s, path),
        Value::String(s) if URL_KEYS.contains(&key) => url_candidate(s, path),
        Value::Sequence(items) if LIST_KEYS.contains(&key) => list_candidates(items, path),
        Value::String(s) if looks_like_embedded_yaml(s) => embedded_candidates(s, path),
        _ => walker::walk(value, path),
    }
}

fn direct_candidate(value: &str, path: &str) -> Vec<Candidate> {
    if value.contains('.') && !value.starts_with("http") && is_valid_fqdn(value) {
        vec![Candidate {
            fqdn: value.to_string(),
            path_hint: path.to_string(),
            origin: Origin::DirectField,
        }]
    } else {
        Vec::new()
    }
}

/// Harvest from a URL-bearing field: full URLs contribute their host, bare
/// dotted values contribute as-is.
fn url_candidate(value: &str, path: &str) -> Vec<Candidate> {
    if value.starts_with("http") {
        match url_host(value) {
            Some(host) if is_valid_fqdn(&host) => vec![Candidate {
                fqdn: host,
                path_hint: path.to_string(),
                origin: Origin::UrlField,
            }],
            _ => Vec::new(),
        }
    } else if value.contains('.') && is_valid_fqdn(value) {
        vec![Candidate {
            fqdn: value.to_string(),
            path_hint: path.to_string(),
            origin: Origin::UrlField,
        }]
    } else {
        Vec::new()
    }
}

/// Authority of a URL-shaped string: the host, with an explicit non-default
/// port preserved. Unparseable values (templated URLs and the like) yield
/// nothing.
fn url_host(value: &str) -> Option<String> {
    let url = Url::parse(value).ok()?;
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

fn list_candidates(items: &[Value], path: &str) -> Vec<Candidate> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let s = item.as_str()?;
            if s.contains('.') && !s.starts_with("http") && is_valid_fqdn(s) {
                Some(Candidate {
                    fqdn: s.to_string(),
                    path_hint: format!("{}[{}]", path, i),
                    origin: Origin::ListField,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Best-effort signal that a string value is itself a serialized YAML
/// document (ConfigMap-style inline config). Free text can trip this; the
/// parse attempt below is the safety net.
fn looks_like_embedded_yaml(value: &str) -> bool {
    value.contains('\n') && value.contains(':')
}

/// Re-parse an embedded document and walk it, re-tagging everything found
/// inside as `Origin::EmbeddedYaml`. Parse failures are silently ignored.
fn embedded_candidates(value: &str, path: &str) -> Vec<Candidate> {
    let Ok(parsed) = serde_yaml::from_str::<Value>(value) else {
        return Vec::new();
    };
    if !has_structure(&parsed) {
        return Vec::new();
    }

    walker::walk(&parsed, path)
        .into_iter()
        .map(|candidate| Candidate {
            origin: Origin::EmbeddedYaml,
            ..candidate
        })
        .collect()
}

fn has_structure(value: &Value) -> bool {
    match value {
        Value::Mapping(mapping) => !mapping.is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        _ => false,
    }
}
