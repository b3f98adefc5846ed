//! Command and LDAP Injection Detection Rules
//!
//! Shell metacharacter chains, command substitution, Windows command
//! shells, and LDAP filter manipulation.

use super::{AttackCategory, Rule, RuleBuilder};
use anyhow::Result;

/// Command injection rules, in evaluation order
pub fn command_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(932100, "Command Injection: Metacharacter chain")
            .category(AttackCategory::CommandInjection)
            .pattern(
                r"(?i)[;&|`\n]\s*(cat|ls|id|pwd|whoami|uname|wget|curl|nc|ncat|bash|sh|zsh|python|perl|ruby|php|powershell|cmd)\b",
            )
            .build()?,
        RuleBuilder::new(932110, "Command Injection: Command substitution")
            .category(AttackCategory::CommandInjection)
            .pattern(r"\$\([\w\s./-]*\)|`[^`]{1,80}`")
            .build()?,
        RuleBuilder::new(932120, "Command Injection: Conditional chain")
            .category(AttackCategory::CommandInjection)
            .pattern(r"(?i)(&&|\|\|)\s*(cat|rm|curl|wget|chmod|chown|nc|bash|sh|echo|id)\b")
            .build()?,
        RuleBuilder::new(932130, "Command Injection: Shell path or redirection")
            .category(AttackCategory::CommandInjection)
            .pattern(r"(?i)/bin/(ba|z|da)?sh\b|/dev/(tcp|null)\b|\b2>&1\b")
            .build()?,
        RuleBuilder::new(932140, "Command Injection: Windows shell")
            .category(AttackCategory::CommandInjection)
            .pattern(r"(?i)\bcmd(\.exe)?\s*/c\b|\bpowershell(\.exe)?\s+-\w|\bnet\s+user\b|\breg\s+add\b")
            .build()?,
    ])
}

/// LDAP injection rules, in evaluation order
///
/// The generic parenthesis/star signature used by some rule sets is left
/// out on purpose: it flags any value containing `(` or `*`, which is an
/// unacceptable false-positive rate for free-form input.
pub fn ldap_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(933100, "LDAP Injection: Wildcard filter bypass")
            .category(AttackCategory::LdapInjection)
            .pattern(r"\*\)\s*\(\s*[&|]|\)\s*\(\s*\|\s*\(")
            .build()?,
        RuleBuilder::new(933110, "LDAP Injection: Boolean filter")
            .category(AttackCategory::LdapInjection)
            .pattern(r"(?i)\(\s*[&|!]\s*\(\s*[a-z]+\s*=")
            .build()?,
        RuleBuilder::new(933120, "LDAP Injection: Attribute wildcard probe")
            .category(AttackCategory::LdapInjection)
            .pattern(r"(?i)\(\s*(cn|uid|mail|objectclass|samaccountname)\s*=[^)]*\*")
            .build()?,
        RuleBuilder::new(933130, "LDAP Injection: Escaped filter metacharacter")
            .category(AttackCategory::LdapInjection)
            .pattern(r"(?i)\\(28|29|2a)")
            .build()?,
        RuleBuilder::new(933140, "LDAP Injection: Match-everything filter")
            .category(AttackCategory::LdapInjection)
            .pattern(r"(?i)\(\s*[a-z]+\s*=\s*\*\s*\)")
            .build()?,
    ])
}
