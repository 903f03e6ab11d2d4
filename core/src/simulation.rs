use std::collections::BTreeMap;

use log::debug;

use crate::aggregate::aggregate;
use crate::models::ShotRecord;
use crate::types::{ArcSimulation, SimError, ValuedShot, Zone, ZoneStats};
use crate::valuation::shot_points;
use crate::zones::{classify, normalize_distance_ft, BASELINE_ARC_FT};

/// Klassifiser og verdsett hele batchen under én buelengde.
///
/// Rader med attempted=false hoppes over. Én ugyldig rad avbryter batchen
/// med InvalidRecord (fail fast-policyen, se ShotRecord::validate) – kalleren
/// avgjør om hele batchen skal forkastes.
pub fn label_shots(
    records: &[ShotRecord],
    arc_distance_ft: f64,
) -> Result<Vec<ValuedShot>, SimError> {
    let mut out = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        if !r.attempted {
            continue;
        }
        r.validate(i)?;
        let zone = classify(r, arc_distance_ft);
        out.push(ValuedShot {
            loc_x: r.loc_x,
            loc_y: r.loc_y,
            distance_ft: normalize_distance_ft(r.distance_units),
            made: r.made,
            zone,
            points: shot_points(zone, r.made),
        });
    }
    Ok(out)
}

/// Hele pipelinen (classify → value → aggregate) som én referensielt
/// transparent funksjon av (records, arc_distance_ft). Ingen delt tilstand;
/// samtidige kall med ulik buelengde påvirker ikke hverandre.
pub fn simulate(records: &[ShotRecord], arc_distance_ft: f64) -> Result<ArcSimulation, SimError> {
    let shots = label_shots(records, arc_distance_ft)?;
    let stats = aggregate(&shots);
    debug!(
        "simulate: arc={:.2} ft, {} skudd, {} aktive soner",
        arc_distance_ft,
        shots.len(),
        stats.len()
    );
    Ok(ArcSimulation {
        arc_distance_ft,
        shots,
        stats,
    })
}

/// Referansestatistikk ved dagens bue (23.75 fot).
pub fn baseline_stats(records: &[ShotRecord]) -> Result<BTreeMap<Zone, ZoneStats>, SimError> {
    Ok(simulate(records, BASELINE_ARC_FT)?.stats)
}
