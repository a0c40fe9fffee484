//! Inventory data model and resolver seams
//!
//! The types here are the contract between the listing commands and whatever
//! backend answers inventory queries. The shipped backend is the snapshot
//! resolver in [`snapshot`]; a live platform client plugs into the same traits.

pub mod snapshot;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Kind of a managed inventory object.
///
/// Closed set of the kinds the renderer distinguishes; everything else the
/// platform exposes (resource pools, host systems, ...) lands in `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ManagedObjectKind {
    Folder,
    Datacenter,
    VirtualMachine,
    Network,
    ComputeResource,
    Datastore,
    Other,
}

impl From<String> for ManagedObjectKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "Folder" => ManagedObjectKind::Folder,
            "Datacenter" => ManagedObjectKind::Datacenter,
            "VirtualMachine" => ManagedObjectKind::VirtualMachine,
            "Network" => ManagedObjectKind::Network,
            "ComputeResource" => ManagedObjectKind::ComputeResource,
            "Datastore" => ManagedObjectKind::Datastore,
            _ => ManagedObjectKind::Other,
        }
    }
}

impl ManagedObjectKind {
    /// Suffix appended to the path in long listing format.
    ///
    /// Folders get a bare `/` like a directory listing; the remaining named
    /// kinds get their kind spelled out; `Other` gets no annotation.
    pub fn long_suffix(self) -> &'static str {
        match self {
            ManagedObjectKind::Folder => "/",
            ManagedObjectKind::Datacenter => " (Datacenter)",
            ManagedObjectKind::VirtualMachine => " (VirtualMachine)",
            ManagedObjectKind::Network => " (Network)",
            ManagedObjectKind::ComputeResource => " (ComputeResource)",
            ManagedObjectKind::Datastore => " (Datastore)",
            ManagedObjectKind::Other => "",
        }
    }

    /// Whether objects of this kind contain children in the inventory tree.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ManagedObjectKind::Folder
                | ManagedObjectKind::Datacenter
                | ManagedObjectKind::ComputeResource
        )
    }
}

/// One resolved inventory node: its full path and its object kind.
///
/// Produced only by resolvers; immutable for the lifetime of an invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedElement {
    pub path: String,
    pub object: ManagedObjectKind,
}

impl ResolvedElement {
    pub fn new(path: impl Into<String>, object: ManagedObjectKind) -> Self {
        Self {
            path: path.into(),
            object,
        }
    }
}

/// A listing request as handed to a resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    pub patterns: Vec<String>,
    pub recursive: bool,
    pub long_format: bool,
}

impl ListingRequest {
    /// Build a request from CLI input, defaulting empty patterns to `"."`.
    ///
    /// Resolvers may assume `patterns` is never empty.
    pub fn new(patterns: Vec<String>, recursive: bool, long_format: bool) -> Self {
        let patterns = if patterns.is_empty() {
            vec![".".to_string()]
        } else {
            patterns
        };
        Self {
            patterns,
            recursive,
            long_format,
        }
    }
}

/// Opaque handle to the inventory node relative paths resolve against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextHandle(String);

impl ContextHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Full inventory path of the context root.
    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Resolves path patterns against the inventory tree.
pub trait InventoryResolver {
    /// Resolve `patterns` relative to `root`, in pattern order.
    ///
    /// With `recursive` set, matched containers are expanded to their whole
    /// subtree instead of their direct children.
    fn resolve(
        &self,
        patterns: &[String],
        recursive: bool,
        root: &ContextHandle,
    ) -> Result<Vec<ResolvedElement>>;
}

/// Supplies the current datacenter context.
pub trait ContextProvider {
    /// The root node relative paths resolve against.
    ///
    /// Fails with `ContextUnavailable` when no datacenter can be determined.
    fn current_root(&self) -> Result<ContextHandle>;
}
