// Application state module
// Read-only state shared by every request: configuration, the route table,
// and the product provider.

use crate::config::Config;
use crate::routing::RouteTable;
use crate::store::ProductProvider;

/// Application state, built once at startup and never mutated
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub catalog: Box<dyn ProductProvider>,
}

impl AppState {
    pub fn new(config: Config, routes: RouteTable, catalog: Box<dyn ProductProvider>) -> Self {
        Self {
            config,
            routes,
            catalog,
        }
    }
}
