mod node;

pub use node::Node;

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no node with id `{0}` in the tree")]
    UnknownNode(String),
    #[error("`{child}` is not a child of `{parent}`")]
    NotAChild { parent: String, child: String },
    #[error("`{0}` is the root node")]
    IsRoot(String),
}

#[derive(Debug)]
struct Entry {
    node: Node,
    parent: Option<String>,
    children: Vec<String>,
}

/// A headless retained node tree. Styles and scroll offsets live on the
/// nodes; measured geometry comes from a separate [`Layout`](crate::Layout)
/// pass, so mutating a style never recomputes geometry by itself.
///
/// Node ids are expected to be unique within one tree.
#[derive(Debug)]
pub struct Dom {
    entries: HashMap<String, Entry>,
    root: String,
}

impl Dom {
    pub fn new(root: Node) -> Self {
        let root_id = root.id.clone();
        let mut entries = HashMap::new();
        entries.insert(
            root_id.clone(),
            Entry {
                node: root,
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            entries,
            root: root_id,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.entries.get(id).map(|entry| &entry.node)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.entries.get_mut(id).map(|entry| &mut entry.node)
    }

    /// Add a detached node to the tree. Returns its id.
    pub fn insert(&mut self, node: Node) -> String {
        let id = node.id.clone();
        self.entries.insert(
            id.clone(),
            Entry {
                node,
                parent: None,
                children: Vec::new(),
            },
        );
        id
    }

    pub fn parent(&self, id: &str) -> Option<&str> {
        self.entries.get(id)?.parent.as_deref()
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.entries
            .get(id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    pub fn append_child(&mut self, parent: &str, child: &str) -> Result<(), DomError> {
        self.check(parent)?;
        self.check(child)?;
        self.detach(child);
        if let Some(entry) = self.entries.get_mut(parent) {
            entry.children.push(child.to_string());
        }
        if let Some(entry) = self.entries.get_mut(child) {
            entry.parent = Some(parent.to_string());
        }
        Ok(())
    }

    /// Swap `new` into `old`'s position under `parent`. `old` stays in the
    /// tree, detached.
    pub fn replace_child(&mut self, parent: &str, old: &str, new: &str) -> Result<(), DomError> {
        self.check(parent)?;
        self.check(new)?;
        let is_child = self
            .entries
            .get(parent)
            .is_some_and(|entry| entry.children.iter().any(|id| id == old));
        if !is_child {
            return Err(DomError::NotAChild {
                parent: parent.to_string(),
                child: old.to_string(),
            });
        }
        if old == new {
            return Ok(());
        }
        // Detach first: `new` may be a sibling of `old`, which shifts positions
        self.detach(new);
        let position = self
            .entries
            .get(parent)
            .and_then(|entry| entry.children.iter().position(|id| id == old));
        if let Some(position) = position {
            if let Some(entry) = self.entries.get_mut(parent) {
                entry.children[position] = new.to_string();
            }
        }
        if let Some(entry) = self.entries.get_mut(old) {
            entry.parent = None;
        }
        if let Some(entry) = self.entries.get_mut(new) {
            entry.parent = Some(parent.to_string());
        }
        Ok(())
    }

    /// Detach `child` from `parent`. The child and its subtree stay in the
    /// tree.
    pub fn remove_child(&mut self, parent: &str, child: &str) -> Result<(), DomError> {
        self.check(parent)?;
        let is_child = self
            .entries
            .get(parent)
            .is_some_and(|entry| entry.children.iter().any(|id| id == child));
        if !is_child {
            return Err(DomError::NotAChild {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        }
        self.detach(child);
        Ok(())
    }

    /// Drop a node and its whole subtree from the tree, detaching it from
    /// its parent first. The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> Result<(), DomError> {
        self.check(id)?;
        if id == self.root {
            return Err(DomError::IsRoot(id.to_string()));
        }
        self.detach(id);
        let mut pending = vec![id.to_string()];
        while let Some(next) = pending.pop() {
            if let Some(entry) = self.entries.remove(&next) {
                pending.extend(entry.children);
            }
        }
        Ok(())
    }

    // Scroll offsets. Reads on unknown ids answer zero and writes are
    // dropped; offsets saturate at zero, clamping against content size is
    // a post-layout step (see `clamp_scroll`).

    pub fn scroll_left(&self, id: &str) -> u16 {
        self.get(id).map(|node| node.scroll.0).unwrap_or(0)
    }

    pub fn scroll_top(&self, id: &str) -> u16 {
        self.get(id).map(|node| node.scroll.1).unwrap_or(0)
    }

    pub fn set_scroll_left(&mut self, id: &str, value: u16) {
        if let Some(node) = self.get_mut(id) {
            node.scroll.0 = value;
        }
    }

    pub fn set_scroll_top(&mut self, id: &str, value: u16) {
        if let Some(node) = self.get_mut(id) {
            node.scroll.1 = value;
        }
    }

    // Attributes

    pub fn attr(&self, id: &str, key: &str) -> Option<&str> {
        self.get(id)?.get_attr(key)
    }

    pub fn set_attr(&mut self, id: &str, key: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.get_mut(id) {
            node.attrs.insert(key.into(), value.into());
        }
    }

    /// Iterate over all node ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    fn check(&self, id: &str) -> Result<(), DomError> {
        if self.entries.contains_key(id) {
            Ok(())
        } else {
            Err(DomError::UnknownNode(id.to_string()))
        }
    }

    fn detach(&mut self, id: &str) {
        let Some(parent) = self.entries.get(id).and_then(|entry| entry.parent.clone()) else {
            return;
        };
        if let Some(entry) = self.entries.get_mut(&parent) {
            entry.children.retain(|child| child != id);
        }
        if let Some(entry) = self.entries.get_mut(id) {
            entry.parent = None;
        }
    }
}
