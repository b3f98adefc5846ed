//! Cross-Site Scripting Detection Rules
//!
//! Covers script tags, event-handler attributes, script-scheme URIs,
//! dangerous embedding tags, DOM sinks and URL-encoded variants.

use super::{AttackCategory, Rule, RuleBuilder};
use anyhow::Result;

/// XSS rules, in evaluation order
pub fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(941100, "XSS: Script tag")
            .category(AttackCategory::Xss)
            .pattern(r"(?i)<\s*/?\s*script\b")
            .build()?,
        RuleBuilder::new(941110, "XSS: Event handler attribute")
            .category(AttackCategory::Xss)
            .pattern(
                r"(?i)\bon(abort|blur|change|click|dblclick|error|focus|input|load|mouse(down|move|out|over|up)|key(down|press|up)|submit|wheel)\s*=",
            )
            .build()?,
        RuleBuilder::new(941120, "XSS: Script-scheme URI")
            .category(AttackCategory::Xss)
            .pattern(r"(?i)javascript\s*:|vbscript\s*:")
            .build()?,
        RuleBuilder::new(941130, "XSS: Dangerous embedding tag")
            .category(AttackCategory::Xss)
            .pattern(r"(?i)<\s*(iframe|embed|object|applet|meta|base|form|svg|math|link)\b")
            .build()?,
        RuleBuilder::new(941140, "XSS: DOM sink access")
            .category(AttackCategory::Xss)
            .pattern(
                r"(?i)\bdocument\s*\.\s*(cookie|write|location|domain)\b|\beval\s*\(|\bset(timeout|interval)\s*\(",
            )
            .build()?,
        RuleBuilder::new(941150, "XSS: Dialog function call")
            .category(AttackCategory::Xss)
            .pattern(r"(?i)\b(alert|prompt|confirm)\s*\(")
            .build()?,
        RuleBuilder::new(941160, "XSS: URL-encoded script tag")
            .category(AttackCategory::Xss)
            .pattern(r"(?i)%3c\s*/?\s*script|%3c%2f?script")
            .build()?,
        RuleBuilder::new(941170, "XSS: CSS expression or import")
            .category(AttackCategory::Xss)
            .pattern(r"(?i)\bexpression\s*\(|@import\b")
            .build()?,
        RuleBuilder::new(941180, "XSS: Injection-capable attribute")
            .category(AttackCategory::Xss)
            .pattern(r"(?i)\b(srcdoc|formaction)\s*=|data:text/html")
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile() {
        let rules = rules().unwrap();
        assert_eq!(rules.len(), 9);
        assert!(rules.iter().all(|r| r.category == AttackCategory::Xss));
    }

    #[test]
    fn test_script_tag_variants() {
        let rules = rules().unwrap();
        let script = &rules[0];
        assert!(script.pattern.is_match("<script>alert(1)</script>"));
        assert!(script.pattern.is_match("< ScRiPt src=//evil.example>"));
        assert!(!script.pattern.is_match("a javascript tutorial transcript"));
    }

    #[test]
    fn test_event_handlers() {
        let rules = rules().unwrap();
        let handler = &rules[1];
        assert!(handler.pattern.is_match("<img src=x onerror=alert(1)>"));
        assert!(handler.pattern.is_match("<body onload = stealCookies()>"));
        assert!(!handler.pattern.is_match("only available on weekends"));
    }

    #[test]
    fn test_encoded_script() {
        let rules = rules().unwrap();
        let encoded = &rules[6];
        assert!(encoded.pattern.is_match("%3Cscript%3Ealert(1)%3C%2Fscript%3E"));
    }
}
