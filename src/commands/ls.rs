//! Ls command implementation
//!
//! Lists inventory paths relative to the current datacenter, like a flat
//! directory listing: matching only direct children, never the full subtree.

use crate::cli::LsArgs;
use crate::error::Result;
use crate::inventory::{ContextProvider, InventoryResolver, ListingRequest};
use crate::output::{ListingResult, ResultSink};

/// Run ls command
pub fn run(
    context: &dyn ContextProvider,
    resolver: &dyn InventoryResolver,
    sink: &ResultSink,
    args: LsArgs,
) -> Result<()> {
    let request = ListingRequest::new(args.paths, false, args.long);

    // Context resolution happens before any resolver work; without a
    // datacenter there is nothing to list against.
    let root = context.current_root()?;

    let elements = resolver.resolve(&request.patterns, request.recursive, &root)?;

    sink.emit(&ListingResult {
        elements,
        long: request.long_format,
    })
}
