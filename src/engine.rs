//! WAF Engine
//!
//! The request inspector: orchestrates the whitelist gate, the ordered
//! single-string checks, the structured scans, and the header subset, and
//! wraps the whole pipeline in the fail-open boundary.

use anyhow::Result;
use tracing::{debug, info};

use crate::boundary::{fail_open, WafError};
use crate::config::WafConfig;
use crate::detection::{Detection, Location, WafDecision};
use crate::response::{emit, BlockResponse};
use crate::rules::{AttackCategory, Registry};
use crate::scanner;
use crate::target::InspectionTarget;
use crate::whitelist::RouteWhitelist;

/// Headers inspected for smuggled payloads
pub const INSPECTED_HEADERS: [&str; 3] = ["referer", "user-agent", "x-forwarded-for"];

/// Categories applied to headers
///
/// Deliberately narrower than the full set: legitimate header content
/// (crawler user-agent strings full of `/`, `;`, parentheses) trips the
/// broader rules far too often, while these three still catch
/// header-smuggled injection payloads.
pub const HEADER_CATEGORIES: [AttackCategory; 3] = [
    AttackCategory::SqlInjection,
    AttackCategory::Xss,
    AttackCategory::CommandInjection,
];

/// The core detection engine
///
/// Constructed once at process start; read-only afterwards, so a single
/// instance is safely shared across arbitrarily many concurrent requests
/// without locking.
pub struct WafEngine {
    registry: Registry,
    whitelist: RouteWhitelist,
    /// Active configuration
    pub config: WafConfig,
}

impl WafEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: WafConfig) -> Result<Self> {
        let registry = Registry::load(&config)?;
        let whitelist = RouteWhitelist::new(config.exclude_paths.clone());

        info!(
            rule_count = registry.rule_count(),
            categories = registry.categories().len(),
            exclude_paths = whitelist.prefixes().len(),
            "WAF engine initialized"
        );

        Ok(Self {
            registry,
            whitelist,
            config,
        })
    }

    /// The loaded rule registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The route whitelist
    pub fn whitelist(&self) -> &RouteWhitelist {
        &self.whitelist
    }

    /// Test one string value against one category's rules
    pub fn detect(
        &self,
        value: &str,
        category: AttackCategory,
        location: Location,
    ) -> Option<Detection> {
        self.registry.detect(value, category, location)
    }

    /// Run the full inspection pipeline
    ///
    /// Evaluated in fixed order — whitelist, path, url, query, body,
    /// header subset — returning on the first detection. The `Result`
    /// makes the fail-open path an explicit branch for the boundary.
    pub fn try_inspect(&self, target: &InspectionTarget) -> Result<Option<Detection>, WafError> {
        Ok(self.inspect_inner(target))
    }

    fn inspect_inner(&self, target: &InspectionTarget) -> Option<Detection> {
        // Whitelisted routes receive no inspection at all.
        if self.whitelist.is_whitelisted(&target.original_url) {
            debug!(url = %target.original_url, "URL whitelisted, skipping inspection");
            return None;
        }

        for &category in self.registry.categories() {
            if let Some(detection) = self.registry.detect(&target.path, category, Location::Path) {
                return Some(detection);
            }
        }

        for &category in self.registry.categories() {
            if let Some(detection) =
                self.registry
                    .detect(&target.original_url, category, Location::Url)
            {
                return Some(detection);
            }
        }

        if !target.query.is_null() {
            if let Some(detection) = scanner::scan(&self.registry, &target.query) {
                return Some(detection);
            }
        }

        if let Some(body) = &target.body {
            if let Some(detection) = scanner::scan(&self.registry, body) {
                return Some(detection);
            }
        }

        for name in INSPECTED_HEADERS {
            let Some(value) = target.header_value(name) else {
                continue;
            };
            for category in HEADER_CATEGORIES {
                if let Some(detection) =
                    self.registry
                        .detect(value, category, Location::Header(name.to_string()))
                {
                    return Some(detection);
                }
            }
        }

        None
    }

    /// Inspect under the fail-open boundary
    ///
    /// Any internal fault — error or panic — yields `Allow` plus an error
    /// log; an engine defect must never become a site-wide outage.
    pub fn decide(&self, target: &InspectionTarget) -> WafDecision {
        fail_open(target, || self.try_inspect(target))
    }

    /// Decide and emit in one step
    ///
    /// Returns the terminal 403 response for a block, or `None` when the
    /// request should continue to downstream handling.
    pub fn handle(&self, target: &InspectionTarget) -> Option<BlockResponse> {
        let decision = self.decide(target);
        emit(target, &decision)
    }
}
