// core/src/analyzer.rs
//
// JSON-inngangen til kjernen: samme kontrakt som Python-bindingen bruker,
// men uten Python-runtime – testbar rett fra Rust.
use serde::Deserialize;
use serde_json::{json, Value};
use serde_path_to_error as spte;

use std::collections::BTreeMap;

use crate::models::ShotRecord;
use crate::report::build_zone_rows;
use crate::simulation::{baseline_stats, simulate};
use crate::types::{Zone, ZoneStats};
use crate::zones::{BASELINE_ARC_FT, CORNER_ARC_OFFSET_FT};

#[derive(Debug, Deserialize)]
struct SimulateArcIn {
    /// Radene parses tolerant – ShotRecord har aliaser for NBA-kolonnenavn
    shots: Vec<ShotRecord>,
    #[serde(alias = "threePtDistance", default = "default_arc")]
    arc_distance_ft: f64,
    #[serde(default = "default_true")]
    include_baseline: bool,
    /// Merkede rader er store – ta dem med bare når plotting trenger dem
    #[serde(default)]
    include_shots: bool,
}

fn default_arc() -> f64 {
    BASELINE_ARC_FT
}

fn default_true() -> bool {
    true
}

/// Kjør hele pipelinen fra en JSON-payload og returnér sonerapporten som JSON.
pub fn simulate_arc_from_json(json_in: &str) -> Result<String, String> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let parsed: SimulateArcIn = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (SimulateArcIn) at {}: {}", e.path(), e))?;

    let sim = simulate(&parsed.shots, parsed.arc_distance_ft).map_err(|e| e.to_string())?;

    let baseline = if parsed.include_baseline {
        Some(baseline_stats(&parsed.shots).map_err(|e| e.to_string())?)
    } else {
        None
    };
    let empty: BTreeMap<Zone, ZoneStats> = BTreeMap::new();
    let rows = build_zone_rows(&sim.stats, baseline.as_ref().unwrap_or(&empty));

    let zones: Vec<Value> = rows
        .iter()
        .map(|r| {
            json!({
                "rank": r.rank,
                "zone": r.label,
                "pps": r.pps,
                "volume_share_pct": r.volume_share_pct,
                "delta_vs_baseline": r.delta_vs_baseline,
                "color": r.color.map(|c| c.to_string()),
                "active": r.pps.is_some(),
            })
        })
        .collect();

    let mut resp = json!({
        "source": "rust_core",
        "arc_distance_ft": sim.arc_distance_ft,
        "corner_distance_ft": sim.arc_distance_ft - CORNER_ARC_OFFSET_FT,
        "baseline_arc_ft": BASELINE_ARC_FT,
        "total_attempts": sim.shots.len(),
        "zones": zones,
    });

    if parsed.include_shots {
        if let Value::Object(ref mut obj) = resp {
            obj.insert(
                "shots".into(),
                serde_json::to_value(&sim.shots).map_err(|e| e.to_string())?,
            );
        }
    }

    Ok(resp.to_string())
}
