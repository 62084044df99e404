//! Document migration framework.
//!
//! Migrations work on the raw mapping so that older layouts never need a
//! typed representation of their own.

use serde_yaml::{Mapping, Value};

use crate::error::{FormatError, FormatResult};

pub const LATEST_VERSION: u32 = 3;
pub const OLDEST_VERSION: u32 = 1;

pub fn migrate_to_latest(doc: &mut Mapping, mut version: u32) -> FormatResult<()> {
    while version < LATEST_VERSION {
        migrate_one_version(doc, version)?;
        version += 1;
        tracing::debug!(version, "migrated project document");
    }
    doc.insert(Value::from("version"), Value::from(LATEST_VERSION));
    Ok(())
}

fn migrate_one_version(doc: &mut Mapping, version: u32) -> FormatResult<()> {
    match version {
        1 => migrate_v1_to_v2(doc),
        2 => migrate_v2_to_v3(doc),
        v => Err(FormatError::OldVersion {
            found: v,
            oldest: OLDEST_VERSION,
        }),
    }
}

/// v1 stored each box as `box: [x1, y1, z1, x2, y2, z2]`.
fn migrate_v1_to_v2(doc: &mut Mapping) -> FormatResult<()> {
    let Some(nodes) = doc.get_mut("nodes").and_then(Value::as_sequence_mut) else {
        return Ok(());
    };

    for node in nodes.iter_mut() {
        let Some(boxes) = node.get_mut("boxes").and_then(Value::as_sequence_mut) else {
            continue;
        };

        for nodebox in boxes.iter_mut() {
            let Some(fields) = nodebox.as_mapping_mut() else {
                continue;
            };
            let Some(packed) = fields.remove("box") else {
                continue;
            };

            let coords = packed
                .as_sequence()
                .filter(|seq| seq.len() == 6)
                .and_then(|seq| seq.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
                .ok_or_else(|| {
                    FormatError::Parse("v1 box must be a list of six numbers".to_string())
                })?;

            fields.insert(Value::from("min"), Value::from(coords[..3].to_vec()));
            fields.insert(Value::from("max"), Value::from(coords[3..].to_vec()));
        }
    }

    Ok(())
}

/// v2 had no media section.
fn migrate_v2_to_v3(doc: &mut Mapping) -> FormatResult<()> {
    if !doc.contains_key("media") {
        doc.insert(Value::from("media"), Value::Sequence(Vec::new()));
    }
    Ok(())
}
