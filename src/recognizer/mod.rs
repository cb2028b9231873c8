mod candidate;
mod core;
mod endpoint;
mod error;
mod imp;
mod params;
mod segment;
mod state;

pub use self::endpoint::{ConfigurableRoute, Endpoint, Parameter, RecognizedRoute};
pub use self::error::RecognizerError;
pub use self::params::Params;

use self::state::{EndpointId, Graph};
use crate::strmap::StrMap;

use std::sync::Arc;

use dashmap::DashMap;

type Cached<H> = Option<Arc<RecognizedRoute<H>>>;

/// Compiles route patterns into a shared transition graph and matches paths
/// against it.
///
/// Patterns are `/`-separated; `:name` captures up to the next `/`, `:name?`
/// may be omitted, `*name` captures the rest of the path including `/`, and
/// the empty pattern is the root route.
///
/// Registration takes `&mut self`; recognition takes `&self` and memoizes
/// results per input string until the next registration. Every distinct
/// input is cached, misses included, so the cache grows with the variety of
/// paths seen; call [`RouteRecognizer::clear_cache`] to bound it.
#[derive(Debug)]
pub struct RouteRecognizer<H> {
    graph: Graph,
    endpoints: Vec<Arc<Endpoint<H>>>,
    lookup: StrMap<EndpointId>,
    cache: DashMap<Box<str>, Cached<H>>,
}

impl<H> Default for RouteRecognizer<H> {
    fn default() -> Self {
        Self::new()
    }
}
