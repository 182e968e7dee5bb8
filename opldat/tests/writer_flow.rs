//! End-to-end flow: enumerate identifiers, build composite elements,
//! assemble and render a complete data file.

use indexmap::IndexMap;
use opldat::{enumerate_item_ids, tuple_array, DataFile, Element, RenderOptions, Set};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Plant {
    name: &'static str,
    capacity_tenths: i64,
}

fn plants() -> Vec<Plant> {
    vec![
        Plant {
            name: "berlin",
            capacity_tenths: 1205,
        },
        Plant {
            name: "hamburg",
            capacity_tenths: 900,
        },
    ]
}

#[test]
fn builds_a_complete_data_file() {
    let plants = plants();
    let ids: IndexMap<&Plant, String> = enumerate_item_ids(plants.iter(), "pl");

    let mut file = DataFile::new();
    file.set_pretty_printing(false);
    file.set_prefix_line("generated by the nightly planning run");
    file.add("dataTitle", "network test");
    file.add("timeHorizon", 4);
    file.add("stepLength", 15.0);
    file.add("plantIDs", Set::from_members(ids.values().cloned()));
    file.push(tuple_array("plants", &ids, |plant| {
        vec![
            Element::from(plant.name),
            Element::from(plant.capacity_tenths as f64 / 10.0),
        ]
    }));

    let rendered = file.render();
    assert!(rendered.contains(" * generated by the nightly planning run\n"));
    assert!(rendered.contains("dataTitle = \"network test\";\n\n"));
    assert!(rendered.contains("timeHorizon = 4;\n\n"));
    assert!(rendered.contains("stepLength = 15.0;\n\n"));
    assert!(rendered.contains("plantIDs = {pl_0000,pl_0001};\n\n"));
    assert!(rendered.contains(
        "plants = [pl_0000: <\"berlin\",120.5>,pl_0001: <\"hamburg\",90.0>];\n\n"
    ));
}

#[test]
fn array_order_follows_id_map_order() {
    let plants = plants();
    let ids = enumerate_item_ids(plants.iter(), "pl");
    let array = tuple_array("plants", &ids, |plant| vec![Element::from(plant.name)]);

    let compact = array.render(&RenderOptions::compact(), 1);
    let berlin = compact.find("pl_0000").unwrap();
    let hamburg = compact.find("pl_0001").unwrap();
    assert!(berlin < hamburg);
}

/// Count commas that sit at bracket depth 1, ignoring quoted strings.
fn depth_one_commas(content: &str) -> usize {
    let mut depth = 0usize;
    let mut commas = 0usize;
    let mut in_string = false;
    for c in content.chars() {
        match c {
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' | '<' | '[' => depth += 1,
            '}' | '>' | ']' => depth -= 1,
            ',' if depth == 1 => commas += 1,
            _ => {}
        }
    }
    commas
}

#[test]
fn composite_children_sit_at_one_bracket_depth() {
    let element = Element::from(Set::from_members([1, 2, 3]));

    // Compact output separates k members with k-1 commas; pretty output
    // gives every member a trailing comma.
    let compact = element.render(&RenderOptions::compact(), 1);
    let pretty = element.render(&RenderOptions::default(), 1);
    assert_eq!(depth_one_commas(&compact), 2);
    assert_eq!(depth_one_commas(&pretty), 3);
}
