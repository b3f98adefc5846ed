//! Protocol-Abuse Detection Rules
//!
//! Request smuggling and header smuggling, XXE, SSRF, HTTP response
//! splitting, and null-byte injection.

use super::{AttackCategory, Rule, RuleBuilder};
use anyhow::Result;

/// Protocol attack rules, in evaluation order
pub fn protocol_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(921100, "Protocol Attack: Smuggled framing header")
            .category(AttackCategory::ProtocolAttack)
            .pattern(r"(?i)\btransfer-encoding\s*:\s*chunked\b|\bcontent-length\s*:\s*\d")
            .build()?,
        RuleBuilder::new(921110, "Protocol Attack: Embedded request line")
            .category(AttackCategory::ProtocolAttack)
            .pattern(r"(?i)\b(get|post|head|put|delete|options|trace|connect)\s+/\S*\s+http/[01]\.[019]")
            .build()?,
        RuleBuilder::new(921120, "Protocol Attack: URL-override header")
            .category(AttackCategory::ProtocolAttack)
            .pattern(r"(?i)\b(x-original-url|x-rewrite-url|x-forwarded-host)\s*:")
            .build()?,
        RuleBuilder::new(921130, "Protocol Attack: WebDAV method probe")
            .category(AttackCategory::ProtocolAttack)
            .pattern(r"(?i)\b(propfind|proppatch|mkcol)\b")
            .build()?,
        RuleBuilder::new(921140, "Protocol Attack: Duplicate multipart boundary")
            .category(AttackCategory::ProtocolAttack)
            .pattern(r"(?i)boundary=.*boundary=")
            .build()?,
    ])
}

/// XML external entity rules, in evaluation order
pub fn xxe_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(929100, "XXE: DOCTYPE with internal subset")
            .category(AttackCategory::Xxe)
            .pattern(r"(?i)<!doctype\s[^>]*\[")
            .build()?,
        RuleBuilder::new(929110, "XXE: Entity declaration")
            .category(AttackCategory::Xxe)
            .pattern(r"(?i)<!entity\s")
            .build()?,
        RuleBuilder::new(929120, "XXE: External SYSTEM identifier")
            .category(AttackCategory::Xxe)
            .pattern(r#"(?i)system\s+["'](file|https?|ftp|php|expect|jar|netdoc):"#)
            .build()?,
        RuleBuilder::new(929130, "XXE: Parameter entity use")
            .category(AttackCategory::Xxe)
            .pattern(r"(?i)%[a-z][a-z0-9_]*;\s*\]")
            .build()?,
    ])
}

/// SSRF rules, in evaluation order
pub fn ssrf_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(934100, "SSRF: Loopback target")
            .category(AttackCategory::Ssrf)
            .pattern(r"(?i)\w+://(localhost|127\.\d{1,3}\.\d{1,3}\.\d{1,3}|0\.0\.0\.0|\[::1?\]|0x7f)")
            .build()?,
        RuleBuilder::new(934110, "SSRF: Private address range")
            .category(AttackCategory::Ssrf)
            .pattern(
                r"(?i)://(10\.\d{1,3}\.\d{1,3}\.\d{1,3}|192\.168\.\d{1,3}\.\d{1,3}|172\.(1[6-9]|2\d|3[01])\.\d{1,3}\.\d{1,3}|169\.254\.\d{1,3}\.\d{1,3})",
            )
            .build()?,
        RuleBuilder::new(934120, "SSRF: Cloud metadata endpoint")
            .category(AttackCategory::Ssrf)
            .pattern(r"(?i)169\.254\.169\.254|metadata\.google\.internal|metadata\.azure|100\.100\.100\.200")
            .build()?,
        RuleBuilder::new(934130, "SSRF: Exotic URL scheme")
            .category(AttackCategory::Ssrf)
            .pattern(r"(?i)\b(gopher|dict|file|expect|netdoc|jar|tftp)://")
            .build()?,
        RuleBuilder::new(934140, "SSRF: Obfuscated IP address")
            .category(AttackCategory::Ssrf)
            .pattern(r"(?i)://0x[0-9a-f]{6,8}\b|://\d{8,10}\b")
            .build()?,
    ])
}

/// HTTP response splitting rules, in evaluation order
///
/// A bare CR/LF is legitimate in free text, so the raw variant only fires
/// when followed by a header-like `name:` token; encoded CRLF always fires.
pub fn splitting_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(921500, "Response Splitting: Encoded CRLF")
            .category(AttackCategory::HttpResponseSplitting)
            .pattern(r"(?i)%0d%0a")
            .build()?,
        RuleBuilder::new(921510, "Response Splitting: Raw CRLF header injection")
            .category(AttackCategory::HttpResponseSplitting)
            .pattern(r"(?i)[\r\n]+\s*(set-cookie|location|content-(length|type)|x-[a-z-]+)\s*:")
            .build()?,
        RuleBuilder::new(921520, "Response Splitting: Encoded newline header injection")
            .category(AttackCategory::HttpResponseSplitting)
            .pattern(r"(?i)(%0d|%0a)+(set-cookie|location|content-(length|type))")
            .build()?,
        RuleBuilder::new(921530, "Response Splitting: Injected status line")
            .category(AttackCategory::HttpResponseSplitting)
            .pattern(r"(?i)\bhttp/1\.[01]\s+\d{3}\s")
            .build()?,
    ])
}

/// Null byte injection rules, in evaluation order
pub fn null_byte_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        RuleBuilder::new(921600, "Null Byte: URL-encoded")
            .category(AttackCategory::NullByte)
            .pattern(r"(?i)%00")
            .build()?,
        RuleBuilder::new(921610, "Null Byte: Raw NUL character")
            .category(AttackCategory::NullByte)
            .pattern(r"\x00")
            .build()?,
        RuleBuilder::new(921620, "Null Byte: Escaped sequence")
            .category(AttackCategory::NullByte)
            .pattern(r"(?i)\\x00|\\u0000|\\0\b")
            .build()?,
    ])
}
