//! Chain node dispatch.
//!
//! # Responsibilities
//! - Pair one match rule with its position in the chain
//! - Propagate an upstream rejection without consulting the rule
//!
//! # Design Decisions
//! - Handlers are pure dispatch nodes, no side effects
//! - Successor wiring lives in the chain, not in the node

use std::fmt;

use super::rule::MatchRule;
use crate::request::Request;

/// One chain node wrapping a single match rule.
pub struct Handler {
    rule: Box<dyn MatchRule>,
}

impl Handler {
    /// Create a handler from a boxed rule.
    pub fn new(rule: Box<dyn MatchRule>) -> Self {
        Self { rule }
    }

    /// Create a handler from any concrete rule.
    pub fn from_rule(rule: impl MatchRule + 'static) -> Self {
        Self {
            rule: Box::new(rule),
        }
    }

    /// Apply this node's rule. An already-rejected request passes through
    /// untouched; the rule is never consulted for it.
    pub fn handle<'a>(&self, request: Option<&'a Request>) -> Option<&'a Request> {
        request.and_then(|r| self.rule.evaluate(r))
    }

    /// The rule this node dispatches to.
    pub fn rule(&self) -> &dyn MatchRule {
        &*self.rule
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.rule).finish()
    }
}
