use super::endpoint::{ConfigurableRoute, Endpoint, RecognizedRoute};
use super::error::RecognizerError;
use super::state::Graph;
use super::RouteRecognizer;
use crate::strmap::StrMap;

use std::sync::Arc;

use dashmap::DashMap;

impl<H> RouteRecognizer<H> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            endpoints: Vec::new(),
            lookup: StrMap::new(),
            cache: DashMap::new(),
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Registers `route`.
    ///
    /// # Panics
    /// Panics if the path is already registered or the pattern is ambiguous
    /// with a registered one. See [`try_add`](Self::try_add).
    pub fn add(&mut self, route: ConfigurableRoute<H>) -> &mut Self {
        if let Err(e) = self.add_route(route) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_add(&mut self, route: ConfigurableRoute<H>) -> Result<&mut Self, RecognizerError> {
        self.add_route(route)?;
        Ok(self)
    }

    /// Registers every route in order.
    ///
    /// # Panics
    /// Panics on the first route [`try_add`](Self::try_add) would reject.
    pub fn add_all<I>(&mut self, routes: I) -> &mut Self
    where
        I: IntoIterator<Item = ConfigurableRoute<H>>,
    {
        for route in routes {
            self.add(route);
        }
        self
    }

    /// Registers every route in order, stopping at the first error. Routes
    /// before the failing one stay registered.
    pub fn try_add_all<I>(&mut self, routes: I) -> Result<&mut Self, RecognizerError>
    where
        I: IntoIterator<Item = ConfigurableRoute<H>>,
    {
        for route in routes {
            self.add_route(route)?;
        }
        Ok(self)
    }

    /// Finds the best matching route for `path` and captures its parameters.
    ///
    /// The input is percent-decoded, given a leading `/` and stripped of one
    /// trailing `/`. Results, including misses, are cached per input string,
    /// so repeated calls return the same `Arc`.
    pub fn recognize(&self, path: &str) -> Option<Arc<RecognizedRoute<H>>> {
        self.cached_recognize(path)
    }

    /// Looks up the endpoint registered under exactly `path`. No pattern
    /// matching takes place.
    pub fn get_endpoint(&self, path: &str) -> Option<&Arc<Endpoint<H>>> {
        let id = self.lookup.find(path)?;
        self.endpoints.get(id.0)
    }

    /// Registered endpoints in registration order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Arc<Endpoint<H>>> + '_ {
        self.endpoints.iter()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
