//! Palisade
//!
//! An embeddable request threat-detection engine (a WAF layer) that
//! inspects inbound HTTP requests for injection and protocol-abuse
//! attempts before they reach application logic.
//!
//! # Features
//!
//! - **Categorized rule catalog**: SQLi, NoSQLi, XSS, path traversal,
//!   command injection, LDAP, XXE, SSRF, response splitting and more,
//!   compiled once at startup
//! - **Bounded structured scanning**: nested query/body mappings walked
//!   with an explicit work-stack and a hard depth ceiling
//! - **Fail-open boundary**: an engine fault allows traffic through and
//!   logs, never taking the site down
//! - **Fixed block response**: callers get a 403 with a constant body;
//!   rule identity stays in internal logs
//!
//! # Example
//!
//! ```
//! use palisade::{InspectionTarget, WafConfig, WafEngine};
//!
//! let engine = WafEngine::new(WafConfig::default())?;
//!
//! let target = InspectionTarget::new("GET", "/api/products")
//!     .original_url("/api/products?id=1' OR '1'='1")
//!     .client_ip("203.0.113.9");
//!
//! match engine.handle(&target) {
//!     Some(response) => assert_eq!(response.status, 403),
//!     None => unreachable!("payload should be blocked"),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod boundary;
pub mod config;
pub mod detection;
pub mod engine;
pub mod response;
pub mod rules;
pub mod scanner;
pub mod target;
pub mod whitelist;

// Re-exports for convenience
pub use boundary::{fail_open, WafError};
pub use config::WafConfig;
pub use detection::{Detection, Location, WafDecision, SAMPLE_MAX_CHARS};
pub use engine::{WafEngine, HEADER_CATEGORIES, INSPECTED_HEADERS};
pub use response::{BlockResponse, BLOCK_CONTENT_TYPE, BLOCK_STATUS};
pub use rules::{AttackCategory, Registry, Rule, RuleBuilder};
pub use scanner::MAX_SCAN_DEPTH;
pub use target::InspectionTarget;
pub use whitelist::RouteWhitelist;
