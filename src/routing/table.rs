//! Route table module
//!
//! An ordered mapping from URL pattern to route target. Registration happens
//! once at startup; resolution walks the table in registration order and the
//! first match wins.

/// URL pattern a route matches against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches the path exactly
    Exact(String),
    /// Matches the path itself and anything below it
    Prefix(String),
}

impl RoutePattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(pattern) => path == pattern,
            // Prefixes match on segment boundaries only: /store claims /store
            // and /store/x but not the unrelated sibling /storefront
            Self::Prefix(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
                None => false,
            },
        }
    }
}

/// What to do when a route matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Fixed greeting, plain text
    Home,
    /// Deployment status probe, JSON
    ApiStatus,
    /// Liveness probe, JSON
    Health,
    /// Product listing page, HTML
    ProductList,
    /// Delegate to an external interface via 302
    Redirect { target: String },
}

/// A registered route
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub target: RouteTarget,
}

/// Ordered route table, immutable after startup
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route; registration order is match order
    pub fn register(&mut self, pattern: RoutePattern, target: RouteTarget) {
        self.routes.push(Route { pattern, target });
    }

    /// Find the first matching route target for a path
    ///
    /// `None` means no route claims the path and the caller answers 404.
    pub fn resolve(&self, path: &str) -> Option<&RouteTarget> {
        self.routes
            .iter()
            .find(|route| route.pattern.matches(path))
            .map(|route| &route.target)
    }
}
