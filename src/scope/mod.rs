//! The encapsulation tree: one node per registration boundary.

use crate::error::Result;
use crate::handler::ErrorHandler;
use crate::path::{compose, validate_fragment};
use std::sync::Arc;

pub mod resolver;

/// Index handle identifying a scope within its tree.
///
/// Only valid for the [`ScopeTree`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

struct ScopeNode {
    prefix: String,
    parent: Option<ScopeId>,
    error_handler: Option<Arc<dyn ErrorHandler>>,
    children: Vec<ScopeId>,
}

/// Arena-owned tree of scopes.
///
/// The tree exclusively owns every scope top-down through child links;
/// parent links are navigation only, so there are no ownership cycles.
/// Scopes are only added during the build phase — the tree is immutable
/// shared state once dispatch begins, and lives for the process lifetime.
pub struct ScopeTree {
    nodes: Vec<ScopeNode>,
}

impl ScopeTree {
    /// Create the tree with its root scope: empty prefix, no parent, no
    /// error handler.
    pub fn new() -> Self {
        Self {
            nodes: vec![ScopeNode {
                prefix: String::new(),
                parent: None,
                error_handler: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Create a child scope under `parent`.
    ///
    /// The child's absolute prefix is composed exactly once, here. An empty
    /// fragment leaves the prefix unchanged. Children keep declaration
    /// order, though resolution never depends on it.
    pub fn child_of(&mut self, parent: ScopeId, fragment: &str) -> Result<ScopeId> {
        validate_fragment(fragment)?;
        let prefix = compose(&self.nodes[parent.0].prefix, fragment);
        let id = ScopeId(self.nodes.len());
        self.nodes.push(ScopeNode {
            prefix,
            parent: Some(parent),
            error_handler: None,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Bind the error handler for `scope`.
    ///
    /// At most one handler per scope; rebinding overwrites the previous
    /// one. Build-phase only, never concurrent with dispatch.
    pub fn set_error_handler(&mut self, scope: ScopeId, handler: Arc<dyn ErrorHandler>) {
        self.nodes[scope.0].error_handler = Some(handler);
    }

    /// The scope's absolute path prefix
    pub fn prefix(&self, scope: ScopeId) -> &str {
        &self.nodes[scope.0].prefix
    }

    /// The enclosing scope; `None` for the root
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.nodes[scope.0].parent
    }

    /// The handler bound directly on `scope`, ignoring ancestors
    pub fn error_handler(&self, scope: ScopeId) -> Option<&Arc<dyn ErrorHandler>> {
        self.nodes[scope.0].error_handler.as_ref()
    }

    /// Child scopes in declaration order
    pub fn children(&self, scope: ScopeId) -> &[ScopeId] {
        &self.nodes[scope.0].children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the root always exists
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::error_handler_fn;
    use crate::response::Response;
    use serde_json::json;

    fn noop_handler() -> Arc<dyn ErrorHandler> {
        error_handler_fn(|_failure, _request| async { Ok(Response::ok(json!({}))) })
    }

    #[test]
    fn root_has_empty_prefix_and_no_parent() {
        let tree = ScopeTree::new();
        assert_eq!(tree.prefix(tree.root()), "");
        assert!(tree.parent(tree.root()).is_none());
        assert!(tree.error_handler(tree.root()).is_none());
    }

    #[test]
    fn child_prefixes_are_composed_at_creation() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        let b = tree.child_of(a, "/b").unwrap();
        assert_eq!(tree.prefix(a), "/a");
        assert_eq!(tree.prefix(b), "/a/b");
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.children(tree.root()), &[a]);
    }

    #[test]
    fn empty_fragment_keeps_the_parent_prefix() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        let anonymous = tree.child_of(a, "").unwrap();
        assert_eq!(tree.prefix(anonymous), "/a");
        assert_ne!(anonymous, a);
    }

    #[test]
    fn malformed_fragments_are_rejected() {
        let mut tree = ScopeTree::new();
        assert!(tree.child_of(tree.root(), "/a b").is_err());
        assert!(tree.child_of(tree.root(), "//a").is_err());
        // A rejected child must not be linked in.
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn children_keep_declaration_order() {
        let mut tree = ScopeTree::new();
        let a = tree.child_of(tree.root(), "/a").unwrap();
        let b = tree.child_of(tree.root(), "/b").unwrap();
        let c = tree.child_of(tree.root(), "/c").unwrap();
        assert_eq!(tree.children(tree.root()), &[a, b, c]);
    }

    #[test]
    fn rebinding_an_error_handler_overwrites() {
        let mut tree = ScopeTree::new();
        let first = noop_handler();
        let second = noop_handler();
        tree.set_error_handler(tree.root(), Arc::clone(&first));
        tree.set_error_handler(tree.root(), Arc::clone(&second));
        let bound = tree.error_handler(tree.root()).unwrap();
        assert!(Arc::ptr_eq(bound, &second));
        assert!(!Arc::ptr_eq(bound, &first));
    }
}
