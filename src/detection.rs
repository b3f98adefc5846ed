//! Detection types
//!
//! Types for representing matches and the resulting allow/block decision.

use serde::Serialize;

use crate::rules::{AttackCategory, Rule};

/// Maximum number of characters of the matched value kept in a detection
pub const SAMPLE_MAX_CHARS: usize = 100;

/// Where in the request a match occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// A key inside a structured query/body value
    Key,
    /// A string value inside a structured query/body value
    Value,
    /// The decoded route path
    Path,
    /// The raw original URL (path + query string)
    Url,
    /// The query mapping as a whole
    Query,
    /// The body mapping as a whole
    Body,
    /// A named request header
    Header(String),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Key => write!(f, "key"),
            Location::Value => write!(f, "value"),
            Location::Path => write!(f, "path"),
            Location::Url => write!(f, "url"),
            Location::Query => write!(f, "query"),
            Location::Body => write!(f, "body"),
            Location::Header(name) => write!(f, "header:{}", name),
        }
    }
}

/// Result of a positive match
///
/// Only allocated when a rule matches; "no match" is the absence of a
/// `Detection`, never a sentinel object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// Category of the matching rule
    pub category: AttackCategory,
    /// Rule ID (diagnostic, internal only)
    pub rule_id: u32,
    /// Rule name (diagnostic, internal only)
    pub rule_name: String,
    /// Raw pattern source of the matching rule
    pub pattern: String,
    /// Matched value, truncated to [`SAMPLE_MAX_CHARS`] characters
    pub sample: String,
    /// Where the match occurred
    pub location: Location,
}

impl Detection {
    /// Build a detection from a matching rule and the offending value
    pub fn from_rule(rule: &Rule, value: &str, location: Location) -> Self {
        Self {
            category: rule.category,
            rule_id: rule.id,
            rule_name: rule.name.clone(),
            pattern: rule.pattern_str.clone(),
            sample: truncate_chars(value, SAMPLE_MAX_CHARS),
            location,
        }
    }
}

/// Terminal decision for a request
#[derive(Debug, Clone)]
pub enum WafDecision {
    /// Continue to downstream handling unchanged
    Allow,
    /// Terminate with the block response
    Block(Detection),
}

impl WafDecision {
    /// Whether this is a blocking decision
    pub fn is_block(&self) -> bool {
        matches!(self, WafDecision::Block(_))
    }

    /// The detection behind a block, if any
    pub fn detection(&self) -> Option<&Detection> {
        match self {
            WafDecision::Allow => None,
            WafDecision::Block(detection) => Some(detection),
        }
    }
}

/// Truncate a value to `max_chars` characters, appending `...` if cut
///
/// Char-aware: request payloads are arbitrary UTF-8 and a byte slice could
/// split a code point.
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &value[..byte_idx]),
        None => value.to_string(),
    }
}
