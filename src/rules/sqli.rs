//! SQL and NoSQL Injection Detection Rules
//!
//! Covers union-based, boolean/tautology, comment-termination, stacked
//! query, time-based and error-based SQL injection, plus MongoDB-style
//! operator injection for NoSQL stores.

use super::{AttackCategory, Rule, RuleBuilder};
use anyhow::Result;

/// SQL injection rules, in evaluation order
pub fn sql_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(942100, "SQL Injection: UNION SELECT")
            .category(AttackCategory::SqlInjection)
            .pattern(r"(?i)\bunion\b[\s/*+]+(all[\s/*+]+)?select\b")
            .build()?,
        RuleBuilder::new(942110, "SQL Injection: Boolean tautology")
            .category(AttackCategory::SqlInjection)
            .pattern(r#"(?i)['"]\s*(or|and)\s+['"]?\w+['"]?\s*=\s*['"]?\w"#)
            .build()?,
        RuleBuilder::new(942120, "SQL Injection: Quote with comment or terminator")
            .category(AttackCategory::SqlInjection)
            .pattern(r#"(?i)['"]\s*(--|#|/\*)"#)
            .build()?,
        RuleBuilder::new(942130, "SQL Injection: Stacked query")
            .category(AttackCategory::SqlInjection)
            .pattern(r"(?i);\s*(select|insert|update|delete|drop|alter|create|truncate|exec)\b")
            .build()?,
        RuleBuilder::new(942140, "SQL Injection: Time-based blind")
            .category(AttackCategory::SqlInjection)
            .pattern(r"(?i)\b(sleep|benchmark|pg_sleep)\s*\(|\bwaitfor\s+delay\b")
            .build()?,
        RuleBuilder::new(942150, "SQL Injection: Error-based function")
            .category(AttackCategory::SqlInjection)
            .pattern(r"(?i)\b(extractvalue|updatexml)\s*\(|\bconvert\s*\(\s*int\s*,")
            .build()?,
        RuleBuilder::new(942160, "SQL Injection: System catalog access")
            .category(AttackCategory::SqlInjection)
            .pattern(r"(?i)\b(information_schema|sysobjects|mysql\.user|pg_catalog|all_tables)\b")
            .build()?,
        RuleBuilder::new(942170, "SQL Injection: Hex or CHAR() evasion")
            .category(AttackCategory::SqlInjection)
            .pattern(r"(?i)\b0x[0-9a-f]{8,}\b|\bchar\s*\(\s*\d+\s*(,\s*\d+\s*){2,}\)")
            .build()?,
    ])
}

/// NoSQL injection rules, in evaluation order
///
/// Operator list follows the MongoDB query operators most commonly abused
/// for authentication bypass and blind extraction.
pub fn nosql_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(943100, "NoSQL Injection: Comparison operator")
            .category(AttackCategory::NosqlInjection)
            .pattern(r"(?i)\$(where|ne|gt|gte|lt|lte|regex|elemmatch|exists)\b")
            .build()?,
        RuleBuilder::new(943110, "NoSQL Injection: Logical operator")
            .category(AttackCategory::NosqlInjection)
            .pattern(r#"(?i)\$(or|and|nor|not|in|nin)\s*["':\[]"#)
            .build()?,
        RuleBuilder::new(943120, "NoSQL Injection: JavaScript expression")
            .category(AttackCategory::NosqlInjection)
            .pattern(r"(?i)\bthis\.[a-z_$]\w*\s*==")
            .build()?,
        RuleBuilder::new(943130, "NoSQL Injection: Server-side function")
            .category(AttackCategory::NosqlInjection)
            .pattern(r"(?i)\$(function|accumulator)\b|\bmapreduce\b")
            .build()?,
        RuleBuilder::new(943140, "NoSQL Injection: Operator in object literal")
            .category(AttackCategory::NosqlInjection)
            .pattern(r#"\{\s*"?\$\w+"#)
            .build()?,
    ])
}
