use super::params::Params;

use std::sync::Arc;

/// A named capture declared by a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: Box<str>,
    pub is_optional: bool,
    pub is_star: bool,
}

impl Parameter {
    pub(super) fn new(name: &str, is_optional: bool, is_star: bool) -> Self {
        Self {
            name: name.into(),
            is_optional,
            is_star,
        }
    }
}

/// Route descriptor handed to the recognizer at configuration time.
///
/// Literal segments match case-insensitively unless
/// [`case_sensitive`](Self::case_sensitive) is switched on.
#[derive(Debug, Clone)]
pub struct ConfigurableRoute<H> {
    path: Box<str>,
    case_sensitive: bool,
    handler: H,
}

impl<H> ConfigurableRoute<H> {
    pub fn new(path: &str, handler: H) -> Self {
        Self {
            path: path.into(),
            case_sensitive: false,
            handler,
        }
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// A registered route together with the parameters its pattern declares.
#[derive(Debug)]
pub struct Endpoint<H> {
    route: ConfigurableRoute<H>,
    params: Vec<Parameter>,
}

impl<H> Endpoint<H> {
    pub(super) fn new(route: ConfigurableRoute<H>, params: Vec<Parameter>) -> Self {
        Self { route, params }
    }

    pub fn route(&self) -> &ConfigurableRoute<H> {
        &self.route
    }

    pub fn path(&self) -> &str {
        self.route.path()
    }

    pub fn handler(&self) -> &H {
        self.route.handler()
    }

    /// Declared parameters, in pattern order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

/// Result of a successful [`recognize`](crate::RouteRecognizer::recognize).
#[derive(Debug)]
pub struct RecognizedRoute<H> {
    endpoint: Arc<Endpoint<H>>,
    params: Params,
}

impl<H> RecognizedRoute<H> {
    pub(super) fn new(endpoint: Arc<Endpoint<H>>, params: Params) -> Self {
        Self { endpoint, params }
    }

    pub fn endpoint(&self) -> &Arc<Endpoint<H>> {
        &self.endpoint
    }

    pub fn handler(&self) -> &H {
        self.endpoint.handler()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}
