//! Engine Configuration
//!
//! Static, process-wide configuration: the whitelist prefix list and the
//! category toggles. Both are data loaded once at startup, never mutated
//! at runtime.

use serde::{Deserialize, Serialize};

use crate::rules::AttackCategory;

/// WAF configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WafConfig {
    /// Literal URL prefixes exempted from all inspection
    ///
    /// Matched against the raw `original_url` with a plain prefix
    /// comparison; see [`crate::whitelist::RouteWhitelist`] for the
    /// known imprecision of this scheme.
    pub exclude_paths: Vec<String>,
    /// Categories to disable entirely (default: none)
    pub disabled_categories: Vec<AttackCategory>,
}

impl Default for WafConfig {
    fn default() -> Self {
        Self {
            exclude_paths: default_exclude_paths(),
            disabled_categories: Vec::new(),
        }
    }
}

/// Routes that legitimately carry rich or free-form text, where the
/// pattern rules would produce unacceptable false-positive rates.
fn default_exclude_paths() -> Vec<String> {
    vec![
        "/api/blog".to_string(),
        "/api/auth/login".to_string(),
        "/api/auth/signup".to_string(),
        "/api/contact".to_string(),
    ]
}
