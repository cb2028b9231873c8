use super::candidate::RecognizeResult;
use super::endpoint::{ConfigurableRoute, Endpoint, Parameter, RecognizedRoute};
use super::error::RecognizerError;
use super::segment::Segment;
use super::state::{EndpointId, Graph};
use super::RouteRecognizer;

use std::borrow::Cow;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, trace};

const SLASH: char = '/';
const COLON: char = ':';
const STAR: char = '*';
const QUESTION: char = '?';

impl<H> RouteRecognizer<H> {
    pub(super) fn add_route(
        &mut self,
        route: ConfigurableRoute<H>,
    ) -> Result<(), RecognizerError> {
        let path: Box<str> = route.path().into();
        if self.lookup.contains(&path) {
            return Err(RecognizerError::duplicate(&path));
        }

        // empty tokens are ignored; a pattern without tokens is the root route
        let mut parts: SmallVec<[&str; 8]> =
            path.split(SLASH).filter(|p| !p.is_empty()).collect();
        if parts.is_empty() {
            parts.push("");
        }

        let case_sensitive = route.is_case_sensitive();
        let mut params: Vec<Parameter> = Vec::new();
        let mut state = Graph::ROOT;

        for &part in &parts {
            state = self.graph.append(state, None, "/");

            let segment = if let Some(rest) = part.strip_prefix(COLON) {
                let (name, optional) = match rest.strip_suffix(QUESTION) {
                    Some(name) => (name, true),
                    None => (rest, false),
                };
                params.push(Parameter::new(name, optional, false));
                Segment::Dynamic {
                    name: name.into(),
                    optional,
                }
            } else if let Some(name) = part.strip_prefix(STAR) {
                params.push(Parameter::new(name, true, true));
                Segment::Star { name: name.into() }
            } else {
                Segment::Static {
                    value: part.into(),
                    case_sensitive,
                }
            };
            state = segment.append_to(&mut self.graph, state);
        }

        let targets = self.graph.endpoint_targets(state);
        for &target in &targets {
            if let Some(existing) = self.graph.state(target).endpoint() {
                let existing = self.endpoints[existing.0].path();
                return Err(RecognizerError::ambiguous(&path, existing));
            }
        }

        let id = EndpointId(self.endpoints.len());
        for &target in &targets {
            self.graph.set_endpoint(target, id);
        }
        self.endpoints.push(Arc::new(Endpoint::new(route, params)));
        if self.lookup.try_insert(&path, id).is_err() {
            unreachable!("path uniqueness is checked before insertion");
        }

        debug!(
            path = &*path,
            endpoint = id.0,
            depth = self.graph.state(state).length(),
            states = self.graph.len(),
            "route registered"
        );

        if !self.cache.is_empty() {
            debug!(entries = self.cache.len(), "recognize cache invalidated");
            self.cache.clear();
        }

        Ok(())
    }

    pub(super) fn cached_recognize(&self, path: &str) -> Option<Arc<RecognizedRoute<H>>> {
        let hit = self.cache.get(path).map(|entry| entry.value().clone());
        if let Some(result) = hit {
            trace!(path, matched = result.is_some(), "recognize cache hit");
            return result;
        }

        let result = self.real_recognize(path).map(Arc::new);
        trace!(
            path,
            endpoint = result.as_ref().map(|r| r.endpoint().path()),
            "recognized"
        );
        self.cache.insert(path.into(), result.clone());
        result
    }

    fn real_recognize(&self, path: &str) -> Option<RecognizedRoute<H>> {
        let path = normalize(decode_path(path));

        let mut result = RecognizeResult::new(&self.graph);
        for ch in path.chars() {
            result.advance(ch, &self.graph);
            if result.is_empty() {
                return None;
            }
        }

        let candidate = result.into_solution(&self.graph)?;
        let endpoint = &self.endpoints[candidate.endpoint()?.0];
        let params = candidate.params(&self.graph, endpoint);
        Some(RecognizedRoute::new(Arc::clone(endpoint), params))
    }
}

/// Leading `/` added, a single trailing `/` dropped unless the path is `/`.
fn normalize(path: Cow<'_, str>) -> Cow<'_, str> {
    let mut path = if path.starts_with(SLASH) {
        path
    } else {
        Cow::Owned(format!("/{}", path))
    };
    if path.len() > 1 && path.ends_with(SLASH) {
        path.to_mut().pop();
    }
    path
}

#[cfg(feature = "percent-decode")]
fn decode_path(path: &str) -> Cow<'_, str> {
    match urlencoding::decode(path) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(path, error = %e, "percent-decoding failed, matching raw path");
            Cow::Borrowed(path)
        }
    }
}

#[cfg(not(feature = "percent-decode"))]
fn decode_path(path: &str) -> Cow<'_, str> {
    Cow::Borrowed(path)
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::recognizer::{ConfigurableRoute, RouteRecognizer};

    use std::borrow::Cow;

    #[test]
    fn recognize_leaves_graph_untouched() {
        let mut r = RouteRecognizer::new();
        r.add_all(vec![
            ConfigurableRoute::new("/a/:b?/:c?/d", 0),
            ConfigurableRoute::new("/files/*path", 1),
        ]);
        let states = r.graph.len();

        for _ in 0..2 {
            for path in ["/a/d", "/a/x/y/d", "/files", "/files/x/y", "/nowhere"].iter() {
                let _ = r.recognize(path);
            }
            assert_eq!(r.graph.len(), states);
            assert_eq!(r.cache.len(), 5);
        }

        r.clear_cache();
        assert!(r.recognize("/a/x/d").is_some());
        assert_eq!(r.graph.len(), states);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn normalization() {
        let cases = [
            ("", "/"),
            ("/", "/"),
            ("a", "/a"),
            ("/a/", "/a"),
            ("a/b/", "/a/b"),
            ("//", "/"),
            ("/a//", "/a/"),
        ];
        for &(input, expected) in cases.iter() {
            assert_eq!(normalize(Cow::Borrowed(input)), expected, "{:?}", input);
        }
    }
}
