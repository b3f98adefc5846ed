//! Rule types and builder
//!
//! Defines the attack category enumeration and the Rule struct with a
//! builder that compiles patterns exactly once.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Attack category detected
///
/// A closed enumeration: every rule belongs to exactly one category, and
/// consumers iterate categories in this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackCategory {
    SqlInjection,
    NosqlInjection,
    Xss,
    PathTraversal,
    CommandInjection,
    ProtocolAttack,
    LdapInjection,
    Xxe,
    Ssrf,
    HttpResponseSplitting,
    NullByte,
}

impl AttackCategory {
    /// All categories, in fixed inspection order
    pub const ALL: [AttackCategory; 11] = [
        AttackCategory::SqlInjection,
        AttackCategory::NosqlInjection,
        AttackCategory::Xss,
        AttackCategory::PathTraversal,
        AttackCategory::CommandInjection,
        AttackCategory::ProtocolAttack,
        AttackCategory::LdapInjection,
        AttackCategory::Xxe,
        AttackCategory::Ssrf,
        AttackCategory::HttpResponseSplitting,
        AttackCategory::NullByte,
    ];
}

impl std::fmt::Display for AttackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackCategory::SqlInjection => write!(f, "SQL Injection"),
            AttackCategory::NosqlInjection => write!(f, "NoSQL Injection"),
            AttackCategory::Xss => write!(f, "Cross-Site Scripting"),
            AttackCategory::PathTraversal => write!(f, "Path Traversal"),
            AttackCategory::CommandInjection => write!(f, "Command Injection"),
            AttackCategory::ProtocolAttack => write!(f, "Protocol Attack"),
            AttackCategory::LdapInjection => write!(f, "LDAP Injection"),
            AttackCategory::Xxe => write!(f, "XML External Entity"),
            AttackCategory::Ssrf => write!(f, "Server-Side Request Forgery"),
            AttackCategory::HttpResponseSplitting => write!(f, "HTTP Response Splitting"),
            AttackCategory::NullByte => write!(f, "Null Byte Injection"),
        }
    }
}

/// Detection rule
///
/// Compiled once at startup and never mutated afterwards. `Regex::is_match`
/// carries no match-position state, so a single compiled rule is safe to
/// share across arbitrarily many concurrent inspections.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique rule ID (e.g., 942100)
    pub id: u32,
    /// Human-readable rule name
    pub name: String,
    /// Category this rule detects
    pub category: AttackCategory,
    /// Compiled pattern
    pub pattern: Regex,
    /// Raw pattern source (diagnostic representation in logs)
    pub pattern_str: String,
}

/// Builder for creating rules with a fluent API
pub struct RuleBuilder {
    id: u32,
    name: String,
    category: AttackCategory,
    pattern: String,
}

impl RuleBuilder {
    /// Create a new rule builder with required fields
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: AttackCategory::ProtocolAttack,
            pattern: String::new(),
        }
    }

    /// Set the attack category
    pub fn category(mut self, category: AttackCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the regex pattern
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// Build the rule, compiling the pattern
    pub fn build(self) -> Result<Rule, regex::Error> {
        let pattern = Regex::new(&self.pattern)?;
        Ok(Rule {
            id: self.id,
            name: self.name,
            category: self.category,
            pattern,
            pattern_str: self.pattern,
        })
    }
}
