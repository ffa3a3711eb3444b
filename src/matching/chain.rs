//! Chain assembly and evaluation.
//!
//! # Responsibilities
//! - Own the ordered list of handlers
//! - Compile declarative rule configs into an immutable chain
//! - Walk handlers front to back with sticky rejection
//!
//! # Design Decisions
//! - Handlers live in an owned Vec, not in per-node successor links,
//!   so cycles are impossible by construction
//! - Immutable after assembly (thread-safe without locks); assembly and
//!   evaluation must not overlap
//! - A rejected request still flows through the remaining handlers; each
//!   remaining step is a no-op, so the verdict matches an early return
//! - Explicit rejection rather than silent default

use crate::config::schema::RuleConfig;
use crate::request::Request;

use super::handler::Handler;
use super::rule::{CookieRule, MatchRule, RouteRule, VerbRule};

/// An ordered list of handlers evaluated front to back.
///
/// The result of [`Chain::handle`] is the request unchanged iff every
/// handler accepts it; one rejection anywhere makes the verdict `None`.
/// An empty chain accepts every request.
#[derive(Debug, Default)]
pub struct Chain {
    handlers: Vec<Handler>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile declarative rule configs into a chain, in config order.
    pub fn from_config(rules: &[RuleConfig]) -> Self {
        let handlers = rules
            .iter()
            .map(|rule| Handler::new(compile_rule(rule)))
            .collect();
        let chain = Self { handlers };
        tracing::info!(stages = chain.len(), "Chain compiled");
        chain
    }

    /// Append a rule as the new tail stage.
    pub fn with(mut self, rule: impl MatchRule + 'static) -> Self {
        self.handlers.push(Handler::from_rule(rule));
        self
    }

    /// Append an already-built handler as the new tail stage.
    pub fn push(&mut self, handler: Handler) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Evaluate the chain against one request.
    ///
    /// Every handler is visited in order; once one rejects, the rejection
    /// is sticky and the remaining visits no longer consult their rules.
    pub fn handle<'a>(&self, request: &'a Request) -> Option<&'a Request> {
        let mut outcome = Some(request);
        for (stage, handler) in self.handlers.iter().enumerate() {
            let had_value = outcome.is_some();
            outcome = handler.handle(outcome);
            if had_value && outcome.is_none() {
                tracing::trace!(stage, rule = ?handler.rule(), "Request rejected");
            }
        }
        outcome
    }

    /// Whether every stage accepts the request.
    pub fn accepts(&self, request: &Request) -> bool {
        self.handle(request).is_some()
    }
}

fn compile_rule(rule: &RuleConfig) -> Box<dyn MatchRule> {
    match rule {
        RuleConfig::Verb { expected } => Box::new(VerbRule::new(expected.clone())),
        RuleConfig::Route { expected } => Box::new(RouteRule::new(expected.clone())),
        RuleConfig::Cookie { key, expected } => {
            Box::new(CookieRule::new(key.clone(), expected.clone()))
        }
    }
}
