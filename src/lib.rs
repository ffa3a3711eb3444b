//! Request matching chain library.
//!
//! A request gate evaluates opaque textual requests against an ordered
//! chain of match rules (verb, route, cookie). Every stage must accept
//! for the request to pass; one rejection anywhere is final.

pub mod config;
pub mod matching;
pub mod observability;
pub mod request;

pub use config::schema::GateConfig;
pub use matching::chain::Chain;
pub use matching::handler::Handler;
pub use matching::rule::{CookieRule, MatchRule, RouteRule, VerbRule};
pub use request::Request;
