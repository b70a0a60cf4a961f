use crate::error::{BuildError, Result};
use crate::handler::Handler;
use crate::path::{compose, validate_fragment};
use crate::scope::{ScopeId, ScopeTree};
use axum::http::Method;
use std::collections::HashMap;
use std::sync::Arc;

/// One registered route: the handler plus the scope that owns it.
#[derive(Clone)]
pub struct Route {
    pub handler: Arc<dyn Handler>,
    pub scope: ScopeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RouteKey {
    method: Method,
    path: String,
}

/// Exact-match table from (method, absolute path) to route.
///
/// Populated during the build phase and frozen before dispatch; pattern
/// matching (params, wildcards) is the surrounding router's concern.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<RouteKey, Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `fragment` under `scope`, composing the absolute path from
    /// the scope's prefix. A duplicate (method, path) key is a
    /// configuration error and is rejected, not overwritten.
    pub fn register(
        &mut self,
        tree: &ScopeTree,
        scope: ScopeId,
        method: Method,
        fragment: &str,
        handler: Arc<dyn Handler>,
    ) -> Result<()> {
        validate_fragment(fragment)?;
        let path = compose(tree.prefix(scope), fragment);
        let key = RouteKey {
            method: method.clone(),
            path: path.clone(),
        };
        if self.routes.contains_key(&key) {
            return Err(BuildError::duplicate_route(method, path));
        }
        self.routes.insert(key, Route { handler, scope });
        Ok(())
    }

    /// Exact-match lookup. `None` is the not-found outcome, handled by the
    /// surrounding framework — it is not a failure.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<&Route> {
        let key = RouteKey {
            method: method.clone(),
            path: path.to_string(),
        };
        self.routes.get(&key)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
