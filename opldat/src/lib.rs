//! Data file writer for CPLEX-style optimization solvers.
//!
//! Callers assemble a [`DataFile`] from typed elements — scalar constants,
//! sets, named tuples, indexed arrays — and render it to the solver's
//! input-file syntax, compact or pretty-printed, then persist the result
//! wherever they like.
//!
//! # Example
//!
//! ```
//! use opldat::{enumerate_item_ids, tuple_array, DataFile, Element, Set};
//!
//! let plants = ["berlin", "hamburg"];
//! let ids = enumerate_item_ids(plants, "pl");
//!
//! let mut file = DataFile::new();
//! file.add("timeHorizon", 4);
//! file.add("plantIDs", Set::from_members(ids.values().cloned()));
//! file.push(tuple_array("plants", &ids, |name| {
//!     vec![Element::from(*name), Element::from(12.5)]
//! }));
//!
//! let contents = file.render();
//! assert!(contents.contains("timeHorizon = 4;"));
//! assert!(contents.contains("plantIDs"));
//! ```
//!
//! Rendering never performs I/O; [`DataFile::write`] and
//! [`DataFile::write_temp`] persist the rendered string and surface
//! filesystem failures as [`Error`].

pub mod datafile;
pub mod error;
mod write;

pub use datafile::DataFile;
pub use error::{Error, Result};
pub use opldat_core::{
    enumerate_item_ids, generate_item_ids, indexed_array, tuple_array, Element, Indent,
    IndexedArray, NamedElement, RenderOptions, SequentialIds, Set, SetItem, Tuple,
};
