//! Trajectory sink: serialize a completed run to JSON.
//!
//! Output shape is a map from body name to its ordered list of [x, y, z]
//! positions, one entry per completed step. This is pure consumption of the
//! engine's result; nothing here touches simulation state.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;

use crate::simulation::engine::Trajectories;

/// Write the recorded histories to `path` as a JSON object.
///
/// Bodies sharing a name collapse to one key; the engine keeps them distinct
/// internally, but the name-keyed export cannot.
pub fn write_json(path: &Path, trajectories: &Trajectories) -> Result<()> {
    let map: BTreeMap<&str, &[[f64; 3]]> = trajectories
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), trajectories.history(i)))
        .collect();

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, &map)?;
    Ok(())
}
