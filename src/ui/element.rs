//! Element identities and parent links inside the title region

use crate::title::ElementId;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Parent links for every element the title creates
#[derive(Debug, Default)]
pub struct ElementTree {
    next_id: Cell<u32>,
    parents: RefCell<HashMap<ElementId, ElementId>>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self) -> ElementId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        ElementId(id)
    }

    /// Create an element without a parent
    pub fn create_root(&self) -> ElementId {
        self.allocate()
    }

    pub fn create_child(&self, parent: ElementId) -> ElementId {
        let id = self.allocate();
        self.parents.borrow_mut().insert(id, parent);
        id
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.parents.borrow().get(&id).copied()
    }

    /// Whether `node` is `ancestor` itself or one of its descendants
    pub fn is_descendant(&self, node: ElementId, ancestor: ElementId) -> bool {
        let parents = self.parents.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = parents.get(&id).copied();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendant_walks_up() {
        let tree = ElementTree::new();
        let root = tree.create_root();
        let toolbar = tree.create_child(root);
        let button = tree.create_child(toolbar);
        let label = tree.create_child(root);

        assert!(tree.is_descendant(button, toolbar));
        assert!(tree.is_descendant(button, root));
        assert!(tree.is_descendant(toolbar, toolbar));
        assert!(!tree.is_descendant(label, toolbar));
        assert!(!tree.is_descendant(root, toolbar));
        assert_eq!(tree.parent(button), Some(toolbar));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let tree = ElementTree::new();
        let a = tree.create_root();
        let b = tree.create_root();
        assert_ne!(a, b);
    }
}
