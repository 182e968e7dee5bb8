//! Identifier generation for collections of domain objects.
//!
//! A generator is any `FnMut(&T, usize) -> String`: it receives the object
//! and its occurrence index (0-based, one per input item, duplicates
//! included) and must return an identifier that is valid in the data file
//! syntax and unique across the whole sequence. Uniqueness is the
//! generator's contract; the built-in [`SequentialIds`] policy gets it by
//! construction from the monotonic index.

use std::hash::Hash;

use indexmap::IndexMap;

/// The built-in identifier policy: `<prefix>_<index>` with the index
/// zero-padded to at least `width` digits.
///
/// An empty prefix is allowed and yields names like `_0000`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    width: usize,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            width: 4,
        }
    }

    /// Override the minimum digit width (default 4).
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// The identifier for the given occurrence index.
    pub fn id(&self, index: usize) -> String {
        format!("{}_{:0width$}", self.prefix, index, width = self.width)
    }
}

/// Generate identifiers for `items` with a custom generator.
///
/// The generator is called exactly once per input item, in input order,
/// with occurrence indices `0..n`. The result maps each distinct object to
/// an identifier, in first-occurrence order.
///
/// If `items` contains duplicates, the map keeps the identifier generated
/// at the *last* occurrence of that object. Callers that enumerate
/// deliberately deduplicated input never observe this; callers that pass
/// duplicates should expect earlier identifiers to be unused.
pub fn generate_item_ids<T, I, F>(items: I, mut generator: F) -> IndexMap<T, String>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> String,
{
    let items = items.into_iter();
    let mut ids = IndexMap::with_capacity(items.size_hint().0);
    for (index, item) in items.enumerate() {
        let id = generator(&item, index);
        ids.insert(item, id);
    }
    ids
}

/// Generate identifiers for `items` with the default sequential policy.
pub fn enumerate_item_ids<T, I>(items: I, prefix: &str) -> IndexMap<T, String>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let policy = SequentialIds::new(prefix);
    generate_item_ids(items, |_, index| policy.id(index))
}
