// FQDN extraction over parsed YAML trees
//
// Walks arbitrarily nested manifests and harvests hostname candidates from
// well-known field names, URL values, and embedded YAML documents.

pub mod fields;
pub mod validator;
pub mod walker;

pub use validator::is_valid_fqdn;
pub use walker::walk;

/// How a candidate was found in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A string field named after a hostname (`fqdn`, `host`, ...)
    DirectField,
    /// An item of a hostname list (`hosts`, `dnsNames`)
    ListField,
    /// A host recovered from a URL-bearing field (`issuer`, `url`, ...)
    UrlField,
    /// Found inside a string that was itself a serialized YAML document
    EmbeddedYaml,
}

/// A hostname harvested during a single document walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub fqdn: String,
    pub path_hint: String,
    pub origin: Origin,
}
