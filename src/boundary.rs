//! Fail-Open Error Boundary
//!
//! Wraps the inspection pipeline so that any internal fault — a returned
//! error or a panic — results in "continue" rather than a blocked request
//! or a crashed worker. This is a deliberate availability-over-security
//! tradeoff: operators must treat the fault log as a security-relevant
//! signal, because repeated faults mean attacks may be passing through
//! undetected.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;
use tracing::error;

use crate::detection::{Detection, WafDecision};
use crate::target::InspectionTarget;

/// Internal engine fault
#[derive(Debug, Error)]
pub enum WafError {
    /// A rule or pipeline stage failed to evaluate
    #[error("inspection failed: {0}")]
    Inspection(String),
    /// The inspection pipeline panicked
    #[error("inspection panicked: {0}")]
    Panic(String),
}

/// Run an inspection closure under the fail-open policy
///
/// `Ok(Some(detection))` becomes a block, `Ok(None)` an allow, and both
/// `Err` and a panic become an allow plus an error log carrying the
/// request context.
pub fn fail_open<F>(target: &InspectionTarget, inspect: F) -> WafDecision
where
    F: FnOnce() -> Result<Option<Detection>, WafError>,
{
    match catch_unwind(AssertUnwindSafe(inspect)) {
        Ok(Ok(Some(detection))) => WafDecision::Block(detection),
        Ok(Ok(None)) => WafDecision::Allow,
        Ok(Err(err)) => {
            log_fault(target, &err);
            WafDecision::Allow
        }
        Err(payload) => {
            log_fault(target, &WafError::Panic(panic_message(payload.as_ref())));
            WafDecision::Allow
        }
    }
}

fn log_fault(target: &InspectionTarget, err: &WafError) {
    error!(
        error = %err,
        client_ip = %target.client_ip,
        method = %target.method,
        path = %target.path,
        "WAF inspection fault, allowing request"
    );
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
