//! Common test utilities for vinv integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Single-datacenter inventory snapshot used by most tests
pub const SAMPLE_SNAPSHOT: &str = r#"[
  {
    "name": "dc1",
    "kind": "Datacenter",
    "children": [
      {
        "name": "vm",
        "kind": "Folder",
        "children": [
          { "name": "web01", "kind": "VirtualMachine" },
          { "name": "web02", "kind": "VirtualMachine" },
          { "name": "db01", "kind": "VirtualMachine" }
        ]
      },
      {
        "name": "host",
        "kind": "Folder",
        "children": [
          {
            "name": "cluster1",
            "kind": "ComputeResource",
            "children": [
              { "name": "Resources", "kind": "ResourcePool" }
            ]
          }
        ]
      },
      {
        "name": "network",
        "kind": "Folder",
        "children": [
          { "name": "VM Network", "kind": "Network" }
        ]
      },
      {
        "name": "datastore",
        "kind": "Folder",
        "children": [
          { "name": "ds1", "kind": "Datastore" }
        ]
      },
      { "name": "templates", "kind": "Folder", "children": [] }
    ]
  }
]"#;

/// Snapshot with two datacenters, so context selection matters
pub const TWO_DC_SNAPSHOT: &str = r#"[
  {
    "name": "dc1",
    "kind": "Datacenter",
    "children": [
      { "name": "vm", "kind": "Folder", "children": [] }
    ]
  },
  {
    "name": "dc2",
    "kind": "Datacenter",
    "children": [
      {
        "name": "vm",
        "kind": "Folder",
        "children": [
          { "name": "backup01", "kind": "VirtualMachine" }
        ]
      }
    ]
  }
]"#;

/// A snapshot file on disk for one test
#[allow(dead_code)]
pub struct TestInventory {
    /// Temporary directory holding the snapshot
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the snapshot file
    pub path: PathBuf,
}

impl TestInventory {
    /// Write the default single-datacenter snapshot
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_snapshot(SAMPLE_SNAPSHOT)
    }

    /// Write an arbitrary snapshot
    #[allow(dead_code)]
    pub fn with_snapshot(snapshot: &str) -> Self {
        let temp = TempDir::new().expect("failed to create temp dir");
        let path = temp.path().join("inventory.json");
        std::fs::write(&path, snapshot).expect("failed to write snapshot");
        Self { temp, path }
    }
}
