//! Element model and rendering engine for OPL-style solver data files.
//!
//! This crate provides the building blocks that [`opldat`](https://docs.rs/opldat)
//! assembles into complete data files:
//!
//! - [`element`] - The element sum type and its compact/pretty rendering
//! - [`ids`] - Identifier generation for collections of domain objects
//! - [`builders`] - Object collections to named composite elements
//! - [`render`] - Layout configuration (pretty printing, indentation)
//!
//! ```
//! use opldat_core::{enumerate_item_ids, RenderOptions, Set};
//!
//! let ids = enumerate_item_ids(["x", "y"], "n");
//! assert_eq!(ids["x"], "n_0000");
//!
//! let set = Set::from_members(ids.values().cloned());
//! assert_eq!(set.render(&RenderOptions::compact(), 1), "{n_0000,n_0001}");
//! ```

pub mod builders;
pub mod element;
pub mod ids;
pub mod render;

pub use builders::{indexed_array, tuple_array};
pub use element::{Element, IndexedArray, NamedElement, Set, SetItem, Tuple};
pub use ids::{enumerate_item_ids, generate_item_ids, SequentialIds};
pub use render::{Indent, RenderOptions};
