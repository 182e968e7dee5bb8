//! Builders that turn collections of application objects into named
//! composite elements.
//!
//! Both builders consume an `(object, identifier)` pairing, usually the map
//! produced by [`crate::ids::enumerate_item_ids`]. Items are appended in
//! the pairing's iteration order, nothing more: callers that need a
//! deterministic array order must supply an order-preserving mapping.

use crate::element::{Element, IndexedArray, NamedElement, Tuple};

/// Build a named indexed array from `items`, mapping each object to an
/// element and naming it with the paired identifier.
pub fn indexed_array<'a, T, I, F>(name: impl Into<String>, items: I, mut mapper: F) -> NamedElement
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = (&'a T, &'a String)>,
    F: FnMut(&T) -> Element,
{
    let mut array = IndexedArray::new();
    for (item, id) in items {
        array.push(NamedElement::new(id.clone(), mapper(item)));
    }
    NamedElement::new(name, array)
}

/// Build a named array of tuples from `items`, wrapping each object's
/// mapped value sequence into one tuple named with that object's
/// identifier.
///
/// The mapped sequences are not checked against each other: if they
/// disagree in arity or value kinds, the array still renders and the
/// mismatch surfaces in the consumer.
pub fn tuple_array<'a, T, I, F>(name: impl Into<String>, items: I, mut mapper: F) -> NamedElement
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = (&'a T, &'a String)>,
    F: FnMut(&T) -> Vec<Element>,
{
    indexed_array(name, items, |item| {
        Element::Tuple(Tuple::new(mapper(item)))
    })
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::render::RenderOptions;

    fn ids() -> IndexMap<&'static str, String> {
        IndexMap::from([
            ("berlin", "pl_0000".to_string()),
            ("hamburg", "pl_0001".to_string()),
        ])
    }

    #[test]
    fn test_indexed_array_names_children_from_mapping() {
        let array = indexed_array("capacities", &ids(), |_| Element::from(120));

        assert_eq!(array.name(), "capacities");
        let Element::Array(inner) = array.element() else {
            panic!("expected an indexed array");
        };
        assert_eq!(inner.len(), 2);
        assert_eq!(inner.items()[0].name(), "pl_0000");
        assert_eq!(inner.items()[1].name(), "pl_0001");
    }

    #[test]
    fn test_indexed_array_follows_mapping_iteration_order() {
        let mut reversed = IndexMap::new();
        reversed.insert("hamburg", "pl_0001".to_string());
        reversed.insert("berlin", "pl_0000".to_string());

        let array = indexed_array("plants", &reversed, |city| Element::from(*city));
        assert_eq!(
            array.render(&RenderOptions::compact(), 1),
            "[pl_0001: \"hamburg\",pl_0000: \"berlin\"]"
        );
    }

    #[test]
    fn test_mapper_receives_each_object() {
        let mut seen = Vec::new();
        indexed_array("plants", &ids(), |city| {
            seen.push(*city);
            Element::from(*city)
        });
        assert_eq!(seen, vec!["berlin", "hamburg"]);
    }

    #[test]
    fn test_tuple_array_wraps_values_into_tuples() {
        let array = tuple_array("plants", &ids(), |city| {
            vec![Element::from(*city), Element::from(1.5)]
        });

        assert_eq!(
            array.render(&RenderOptions::compact(), 1),
            "[pl_0000: <\"berlin\",1.5>,pl_0001: <\"hamburg\",1.5>]"
        );
    }
}
