//! Path Traversal Detection Rules
//!
//! Dot-dot sequences, URL-encoded and overlong-UTF-8 variants, probes for
//! well-known sensitive files, and null-truncated extensions.

use super::{AttackCategory, Rule, RuleBuilder};
use anyhow::Result;

/// Path traversal rules, in evaluation order
pub fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(930100, "Path Traversal: Dot-dot sequence")
            .category(AttackCategory::PathTraversal)
            .pattern(r"\.\./|\.\.\\")
            .build()?,
        RuleBuilder::new(930110, "Path Traversal: Encoded dot-dot")
            .category(AttackCategory::PathTraversal)
            .pattern(r"(?i)%2e%2e(%2f|%5c|/|\\)|\.\.(%2f|%5c)|%252e|%c0%ae")
            .build()?,
        RuleBuilder::new(930120, "Path Traversal: Sensitive file probe")
            .category(AttackCategory::PathTraversal)
            .pattern(r"(?i)/etc/(passwd|shadow|group|hosts)\b|/proc/self|boot\.ini|win\.ini|system32")
            .build()?,
        RuleBuilder::new(930130, "Path Traversal: Null-truncated extension")
            .category(AttackCategory::PathTraversal)
            .pattern(r"(?i)\.(php|jsp|aspx?)%00")
            .build()?,
        RuleBuilder::new(930140, "Path Traversal: Obfuscated dot-dot")
            .category(AttackCategory::PathTraversal)
            .pattern(r"\.\.;/|\.{4,}[/\\]")
            .build()?,
    ])
}
