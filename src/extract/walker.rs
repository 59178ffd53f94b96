//! Recursive traversal of parsed YAML trees
//!
//! The walker owns shape dispatch (mapping/sequence/scalar); everything
//! key-specific lives in [`super::fields`].

use super::fields;
use super::Candidate;
use serde_yaml::Value;

/// Walk one document tree, harvesting hostname candidates from every
/// mapping entry in insertion order.
pub fn walk(node: &Value, path: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    match node {
        Value::Mapping(mapping) => {
            for (key, value) in mapping {
                match key.as_str() {
                    Some(name) => {
                        let entry_path = format!("{}.{}", path, name);
                        candidates.extend(fields::extract_entry(name, value, &entry_path));
                    }
                    // non-string keys carry no field semantics
                    None => candidates.extend(walk(value, path)),
                }
            }
        }
        Value::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                candidates.extend(walk(item, &format!("{}[{}]", path, i)));
            }
        }
        Value::Tagged(tagged) => candidates.extend(walk(&tagged.value, path)),
        _ => {}
    }

    candidates
}
