//! Route resolution and the current-route context.
use ahash::{HashMap, HashMapExt};

use crate::config::UrlClassification;
use crate::error::ResolutionFailure;

/// Parameters substituted into a route, in insertion order.
pub type RouteParams = [(String, String)];

/// Turns symbolic route names into URLs.
pub trait RouteResolver {
    /// Resolve `name` with `params`. When `absolute` is false the URL must
    /// be relative.
    fn resolve(
        &self,
        name: &str,
        params: &RouteParams,
        absolute: bool,
    ) -> Result<String, ResolutionFailure>;
}

/// Knows which route is currently being served.
pub trait CurrentRoute {
    fn current_route_name(&self) -> Option<&str>;
}

/// There is no current route, as outside of a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCurrentRoute;

impl CurrentRoute for NoCurrentRoute {
    fn current_route_name(&self) -> Option<&str> {
        None
    }
}

impl CurrentRoute for str {
    fn current_route_name(&self) -> Option<&str> {
        Some(self)
    }
}

impl CurrentRoute for String {
    fn current_route_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: CurrentRoute> CurrentRoute for Option<T> {
    fn current_route_name(&self) -> Option<&str> {
        self.as_ref()?.current_route_name()
    }
}

impl<T: CurrentRoute + ?Sized> CurrentRoute for &T {
    fn current_route_name(&self) -> Option<&str> {
        (**self).current_route_name()
    }
}

/// A link target: a literal URL or a symbolic route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Url(&'a str),
    Route(&'a str),
}

impl<'a> LinkTarget<'a> {
    /// Classify `target`. Literal URLs never reach a route resolver.
    pub fn classify(target: &'a str, classification: UrlClassification) -> Self {
        if classification.is_url(target) {
            LinkTarget::Url(target)
        } else {
            LinkTarget::Route(target)
        }
    }

    /// Whether this is the route `current` is serving.
    pub fn is_current<C: CurrentRoute + ?Sized>(&self, current: &C) -> bool {
        match self {
            LinkTarget::Url(_) => false,
            LinkTarget::Route(name) => current.current_route_name() == Some(*name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    fn parse(path: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            segments.push(Segment::Param(rest[start + 1..start + len].to_string()));
            rest = &rest[start + len + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        Self { segments }
    }

    fn generate(&self, name: &str, params: &RouteParams) -> Result<String, ResolutionFailure> {
        let mut url = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => url.push_str(literal),
                Segment::Param(param) => {
                    let (_, value) = params.iter().find(|(k, _)| k == param).ok_or_else(|| {
                        ResolutionFailure::new(name, format!("missing parameter '{}'", param))
                    })?;
                    url.push_str(value);
                }
            }
        }
        Ok(url)
    }
}

/// A route resolver backed by a table of named path patterns.
///
/// Patterns may contain `{param}` placeholders. Absolute URLs are made by
/// prefixing the base URL.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    base_url: String,
    routes: HashMap<String, Pattern>,
}

impl RouteTable {
    /// Create an empty table whose absolute URLs start with `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            routes: HashMap::new(),
        }
    }

    /// Register route `name` at `path`.
    pub fn add(&mut self, name: impl Into<String>, path: &str) -> &mut Self {
        self.routes.insert(name.into(), Pattern::parse(path));
        self
    }

    /// Whether route `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }
}

impl RouteResolver for RouteTable {
    fn resolve(
        &self,
        name: &str,
        params: &RouteParams,
        absolute: bool,
    ) -> Result<String, ResolutionFailure> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| ResolutionFailure::new(name, "route does not exist"))?;
        let path = pattern.generate(name, params)?;
        if absolute {
            Ok(format!("{}{}", self.base_url, path))
        } else {
            Ok(path)
        }
    }
}
