//! Routing module
//!
//! Ordered first-match route table and the default registrations.

mod table;

pub use table::{Route, RoutePattern, RouteTable, RouteTarget};

use crate::config::Config;

/// Build the route table for this deployment
///
/// The hello app keeps `/`; the storefront is mounted under `/store`.
pub fn default_routes(config: &Config) -> RouteTable {
    let mut table = RouteTable::new();
    table.register(RoutePattern::Exact("/".to_string()), RouteTarget::Home);
    table.register(
        RoutePattern::Exact("/api/status".to_string()),
        RouteTarget::ApiStatus,
    );
    table.register(RoutePattern::Exact("/health".to_string()), RouteTarget::Health);
    table.register(
        RoutePattern::Prefix("/store".to_string()),
        RouteTarget::ProductList,
    );
    table.register(
        RoutePattern::Prefix("/admin/".to_string()),
        RouteTarget::Redirect {
            target: config.store.admin_url.clone(),
        },
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_default_routes_cover_all_endpoints() {
        let config = Config::load_from("does-not-exist").unwrap();
        let table = default_routes(&config);

        assert_eq!(table.resolve("/"), Some(&RouteTarget::Home));
        assert_eq!(table.resolve("/api/status"), Some(&RouteTarget::ApiStatus));
        assert_eq!(table.resolve("/health"), Some(&RouteTarget::Health));
        assert_eq!(table.resolve("/store"), Some(&RouteTarget::ProductList));
        assert!(matches!(
            table.resolve("/admin/"),
            Some(&RouteTarget::Redirect { .. })
        ));
        assert_eq!(table.resolve("/nowhere"), None);
    }

    #[test]
    fn test_admin_redirect_uses_configured_url() {
        let config = Config::load_from("does-not-exist").unwrap();
        let table = default_routes(&config);
        let Some(RouteTarget::Redirect { target }) = table.resolve("/admin/users") else {
            panic!("expected a redirect for /admin/users");
        };
        assert_eq!(target, &config.store.admin_url);
    }
}
