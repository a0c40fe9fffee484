//! Snapshot-backed inventory resolver
//!
//! Answers listing queries from a JSON inventory snapshot: a tree of
//! `{name, kind, children}` nodes whose top level holds the datacenters.
//! Stands in for a live platform client behind the same resolver traits.

use std::path::Path;

use serde::Deserialize;
use wax::{Glob, Pattern};

use crate::error::{Result, VinvError};
use crate::inventory::{
    ContextHandle, ContextProvider, InventoryResolver, ManagedObjectKind, ResolvedElement,
};

/// One node of the snapshot tree.
#[derive(Debug, Deserialize)]
pub struct Node {
    name: String,
    kind: ManagedObjectKind,
    #[serde(default)]
    children: Vec<Node>,
}

/// Inventory read from a snapshot file, plus the selected datacenter name.
#[derive(Debug)]
pub struct SnapshotInventory {
    roots: Vec<Node>,
    datacenter: Option<String>,
}

impl SnapshotInventory {
    /// Load a snapshot file. The top-level JSON value is an array of nodes.
    pub fn load(path: &Path, datacenter: Option<String>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| VinvError::InventoryReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let roots: Vec<Node> =
            serde_json::from_str(&content).map_err(|e| VinvError::InventoryParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { roots, datacenter })
    }

    #[cfg(test)]
    fn from_roots(roots: Vec<Node>, datacenter: Option<String>) -> Self {
        Self { roots, datacenter }
    }

    /// Walk an absolute inventory path down to its node.
    fn node_at(&self, path: &str) -> Option<&Node> {
        let mut components = path.split('/').filter(|c| !c.is_empty() && *c != ".");

        let first = components.next()?;
        let mut current = self.roots.iter().find(|n| n.name == first)?;

        for component in components {
            current = current.children.iter().find(|n| n.name == component)?;
        }

        Some(current)
    }

    /// Expand one pattern to the nodes it names, relative to `root`.
    fn matches_for<'a>(
        &'a self,
        pattern: &str,
        root: &ContextHandle,
    ) -> Result<Vec<(String, &'a Node)>> {
        let absolute = pattern.starts_with('/');
        let components: Vec<&str> = pattern
            .split('/')
            .filter(|c| !c.is_empty() && *c != ".")
            .collect();

        let mut current: Vec<(String, &Node)> = if absolute {
            // Absolute patterns start above the datacenters, so the first
            // component selects among the top-level nodes.
            let glob = compile(pattern, components.first().copied().unwrap_or("*"))?;
            self.roots
                .iter()
                .filter(|n| glob.is_match(n.name.as_str()))
                .map(|n| (format!("/{}", n.name), n))
                .collect()
        } else {
            let node = self
                .node_at(root.path())
                .ok_or_else(|| VinvError::ContextUnavailable {
                    reason: format!("context root '{}' is not in the inventory", root.path()),
                })?;
            vec![(root.path().to_string(), node)]
        };

        let remaining = if absolute {
            components.get(1..).unwrap_or(&[])
        } else {
            &components[..]
        };
        for component in remaining {
            let glob = compile(pattern, component)?;
            let mut next = Vec::new();
            for (path, node) in &current {
                for child in &node.children {
                    if glob.is_match(child.name.as_str()) {
                        next.push((format!("{}/{}", path, child.name), child));
                    }
                }
            }
            current = next;
        }

        if current.is_empty() {
            return Err(VinvError::ResolutionFailed {
                pattern: pattern.to_string(),
                reason: "no such inventory path".to_string(),
            });
        }

        Ok(current)
    }

    /// List a matched node: containers expand to children, leaves to themselves.
    fn list_into(path: &str, node: &Node, recursive: bool, out: &mut Vec<ResolvedElement>) {
        if !node.kind.is_container() {
            out.push(ResolvedElement::new(path, node.kind));
            return;
        }

        for child in &node.children {
            let child_path = format!("{}/{}", path, child.name);
            out.push(ResolvedElement::new(child_path.as_str(), child.kind));
            if recursive && child.kind.is_container() {
                Self::subtree_into(&child_path, child, out);
            }
        }
    }

    fn subtree_into(path: &str, node: &Node, out: &mut Vec<ResolvedElement>) {
        for child in &node.children {
            let child_path = format!("{}/{}", path, child.name);
            out.push(ResolvedElement::new(child_path.as_str(), child.kind));
            if child.kind.is_container() {
                Self::subtree_into(&child_path, child, out);
            }
        }
    }
}

fn compile(pattern: &str, component: &str) -> Result<Glob<'static>> {
    Glob::new(component)
        .map(Glob::into_owned)
        .map_err(|e| VinvError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

impl ContextProvider for SnapshotInventory {
    fn current_root(&self) -> Result<ContextHandle> {
        let datacenters: Vec<&Node> = self
            .roots
            .iter()
            .filter(|n| n.kind == ManagedObjectKind::Datacenter)
            .collect();

        match &self.datacenter {
            Some(name) => datacenters
                .iter()
                .find(|n| &n.name == name)
                .map(|n| ContextHandle::new(format!("/{}", n.name)))
                .ok_or_else(|| VinvError::ContextUnavailable {
                    reason: format!("datacenter '{}' not found", name),
                }),
            // With a single datacenter there is nothing to choose.
            None => match datacenters.as_slice() {
                [only] => Ok(ContextHandle::new(format!("/{}", only.name))),
                [] => Err(VinvError::ContextUnavailable {
                    reason: "inventory has no datacenters".to_string(),
                }),
                _ => Err(VinvError::ContextUnavailable {
                    reason: "multiple datacenters, none selected".to_string(),
                }),
            },
        }
    }
}

impl InventoryResolver for SnapshotInventory {
    fn resolve(
        &self,
        patterns: &[String],
        recursive: bool,
        root: &ContextHandle,
    ) -> Result<Vec<ResolvedElement>> {
        let mut elements = Vec::new();

        for pattern in patterns {
            for (path, node) in self.matches_for(pattern, root)? {
                Self::list_into(&path, node, recursive, &mut elements);
            }
        }

        Ok(elements)
    }
}
