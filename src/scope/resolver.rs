//! Upward resolution of the error handler responsible for a failing route.

use super::{ScopeId, ScopeTree};
use crate::handler::ErrorHandler;
use std::sync::Arc;

impl ScopeTree {
    /// Find the error handler responsible for failures in `scope`.
    ///
    /// Walks parent links starting at `scope` itself (zero hops) and
    /// returns the first bound handler together with the scope it is bound
    /// on. The nearest binding always wins over anything further up, and
    /// siblings or descendants are never consulted. `None` when the walk
    /// passes the root without a match.
    pub fn resolve_error_handler(
        &self,
        scope: ScopeId,
    ) -> Option<(ScopeId, Arc<dyn ErrorHandler>)> {
        let mut cursor = Some(scope);
        while let Some(current) = cursor {
            if let Some(handler) = self.error_handler(current) {
                return Some((current, Arc::clone(handler)));
            }
            cursor = self.parent(current);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::error_handler_fn;
    use crate::response::Response;
    use serde_json::json;

    fn tagged_handler(tag: &'static str) -> Arc<dyn ErrorHandler> {
        error_handler_fn(move |_failure, _request| async move {
            Ok(Response::ok(json!({ "tag": tag })))
        })
    }

    #[test]
    fn no_handler_anywhere_resolves_to_none() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        let b = tree.child_of(a, "/b").unwrap();
        assert!(tree.resolve_error_handler(b).is_none());
    }

    #[test]
    fn the_owning_scope_itself_wins_at_zero_hops() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        tree.set_error_handler(tree.root(), tagged_handler("root"));
        let own = tagged_handler("a");
        tree.set_error_handler(a, Arc::clone(&own));
        let (found, handler) = tree.resolve_error_handler(a).unwrap();
        assert_eq!(found, a);
        assert!(Arc::ptr_eq(&handler, &own));
    }

    #[test]
    fn nearest_ancestor_wins_over_the_root() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        let b = tree.child_of(a, "/b").unwrap();
        tree.set_error_handler(tree.root(), tagged_handler("root"));
        let near = tagged_handler("a");
        tree.set_error_handler(a, Arc::clone(&near));
        let (found, handler) = tree.resolve_error_handler(b).unwrap();
        assert_eq!(found, a);
        assert!(Arc::ptr_eq(&handler, &near));
    }

    #[test]
    fn falls_through_unbound_scopes_to_the_root() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        let b = tree.child_of(a, "/b").unwrap();
        let root_handler = tagged_handler("root");
        tree.set_error_handler(tree.root(), Arc::clone(&root_handler));
        let (found, handler) = tree.resolve_error_handler(b).unwrap();
        assert_eq!(found, tree.root());
        assert!(Arc::ptr_eq(&handler, &root_handler));
    }

    #[test]
    fn sibling_handlers_are_never_consulted() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        let sibling = tree.child_of(tree.root(), "/other").unwrap();
        tree.set_error_handler(sibling, tagged_handler("sibling"));
        assert!(tree.resolve_error_handler(a).is_none());
    }
}
