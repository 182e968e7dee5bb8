//! Snapshot tests for rendered data files.
//!
//! The header carries a creation timestamp, so snapshots cover the
//! statement body only.

use opldat::{enumerate_item_ids, tuple_array, DataFile, Element, Set};

fn sample(pretty: bool) -> DataFile {
    let ids = enumerate_item_ids(["berlin", "hamburg"], "pl");

    let mut file = DataFile::new();
    file.set_pretty_printing(pretty);
    file.add("timeHorizon", 4);
    file.add("plantIDs", Set::from_members(ids.values().cloned()));
    file.push(tuple_array("plants", &ids, |name| {
        let capacity = if *name == "berlin" { 120.5 } else { 90.0 };
        vec![Element::from(*name), Element::from(capacity)]
    }));
    file
}

/// Everything after the header comment block, without trailing newlines.
fn body(file: &DataFile) -> String {
    let rendered = file.render();
    let (_, body) = rendered.split_once("*/\n\n").expect("header present");
    body.trim_end().to_string()
}

#[test]
fn compact_document() {
    insta::assert_snapshot!("compact_document", body(&sample(false)));
}

#[test]
fn pretty_document() {
    insta::assert_snapshot!("pretty_document", body(&sample(true)));
}
