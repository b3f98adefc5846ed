//! Rule Registry
//!
//! All detection rules organized by attack category. The registry is built
//! once at startup and is immutable for the process lifetime; adding a new
//! signature means appending to a category's list, never touching matching
//! logic.

pub mod injection;
pub mod protocol;
pub mod rule;
pub mod sqli;
pub mod traversal;
pub mod xss;

pub use rule::{AttackCategory, Rule, RuleBuilder};

use anyhow::Result;

use crate::config::WafConfig;
use crate::detection::{Detection, Location};

/// Immutable, categorized catalog of detection rules
///
/// Categories are held in fixed [`AttackCategory::ALL`] order; rules within
/// a category are tried in declaration order with the first match winning.
pub struct Registry {
    categories: Vec<AttackCategory>,
    rules: Vec<(AttackCategory, Vec<Rule>)>,
}

impl Registry {
    /// Build the registry from configuration, compiling every pattern once
    pub fn load(config: &WafConfig) -> Result<Self> {
        let mut rules = Vec::new();

        for category in AttackCategory::ALL {
            if config.disabled_categories.contains(&category) {
                continue;
            }
            let list = match category {
                AttackCategory::SqlInjection => sqli::sql_rules()?,
                AttackCategory::NosqlInjection => sqli::nosql_rules()?,
                AttackCategory::Xss => xss::rules()?,
                AttackCategory::PathTraversal => traversal::rules()?,
                AttackCategory::CommandInjection => injection::command_rules()?,
                AttackCategory::ProtocolAttack => protocol::protocol_rules()?,
                AttackCategory::LdapInjection => injection::ldap_rules()?,
                AttackCategory::Xxe => protocol::xxe_rules()?,
                AttackCategory::Ssrf => protocol::ssrf_rules()?,
                AttackCategory::HttpResponseSplitting => protocol::splitting_rules()?,
                AttackCategory::NullByte => protocol::null_byte_rules()?,
            };
            rules.push((category, list));
        }

        let categories = rules.iter().map(|(category, _)| *category).collect();
        Ok(Self { categories, rules })
    }

    /// Enabled categories, in fixed inspection order
    pub fn categories(&self) -> &[AttackCategory] {
        &self.categories
    }

    /// Ordered rule list for a category (empty if the category is disabled)
    pub fn rules_for(&self, category: AttackCategory) -> &[Rule] {
        self.rules
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of loaded rules
    pub fn rule_count(&self) -> usize {
        self.rules.iter().map(|(_, list)| list.len()).sum()
    }

    /// Test a single string value against one category's rules
    ///
    /// Rules are tried in order; the first match wins and later rules are
    /// not evaluated. Pure function of the value and the registry contents.
    pub fn detect(
        &self,
        value: &str,
        category: AttackCategory,
        location: Location,
    ) -> Option<Detection> {
        self.rules_for(category)
            .iter()
            .find(|rule| rule.pattern.is_match(value))
            .map(|rule| Detection::from_rule(rule, value, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::load(&WafConfig::default()).unwrap()
    }

    #[test]
    fn test_load_default_config() {
        let registry = registry();
        assert_eq!(registry.categories().len(), 11);
        assert!(registry.rule_count() > 40);
        for category in AttackCategory::ALL {
            assert!(
                !registry.rules_for(category).is_empty(),
                "no rules for {}",
                category
            );
        }
    }

    #[test]
    fn test_disabled_category_vanishes() {
        let config = WafConfig {
            disabled_categories: vec![AttackCategory::LdapInjection],
            ..Default::default()
        };
        let registry = Registry::load(&config).unwrap();
        assert!(!registry.categories().contains(&AttackCategory::LdapInjection));
        assert!(registry.rules_for(AttackCategory::LdapInjection).is_empty());
        assert!(registry
            .detect("*)(&", AttackCategory::LdapInjection, Location::Value)
            .is_none());
    }

    #[test]
    fn test_detect_first_match_wins() {
        let registry = registry();
        // Payload matches both the UNION rule and the tautology rule; the
        // UNION rule is declared first.
        let detection = registry
            .detect(
                "1' OR '1'='1 UNION SELECT password FROM users",
                AttackCategory::SqlInjection,
                Location::Value,
            )
            .unwrap();
        assert_eq!(detection.rule_id, 942100);
    }

    #[test]
    fn test_detect_no_match() {
        let registry = registry();
        assert!(registry
            .detect("hello world", AttackCategory::Xss, Location::Value)
            .is_none());
    }
}
