use std::collections::BTreeMap;

use crate::aggregate::rank_zones;
use crate::color::pps_color;
use crate::types::{Zone, ZoneRow, ZoneStats};

/// Bygg rangerte rapportrader for visningslaget.
///
/// Delta beregnes kun for buelengde-avhengige soner der både kjøringen og
/// baseline har data; mangler én av dem rapporteres delta som utilgjengelig
/// (None), ikke som 0. Faste soner (Paint, Short Mid-Range) vises alltid
/// uten delta – de er trivielt identiske med baseline.
pub fn build_zone_rows(
    stats: &BTreeMap<Zone, ZoneStats>,
    baseline: &BTreeMap<Zone, ZoneStats>,
) -> Vec<ZoneRow> {
    let order = rank_zones(stats);
    let mut rows = Vec::with_capacity(order.len());
    let mut rank = 0u32;

    for zone in order {
        match stats.get(&zone) {
            Some(s) => {
                rank += 1;
                let delta = if zone.arc_independent() {
                    None
                } else {
                    baseline.get(&zone).map(|b| s.mean_pps - b.mean_pps)
                };
                rows.push(ZoneRow {
                    rank: Some(rank),
                    zone,
                    label: zone.label(),
                    pps: Some(s.mean_pps),
                    volume_share_pct: Some(s.volume_share_pct),
                    delta_vs_baseline: delta,
                    color: Some(pps_color(s.mean_pps)),
                });
            }
            None => {
                // "Sonen er ikke aktiv ved denne avstanden" – gyldig utfall
                rows.push(ZoneRow {
                    rank: None,
                    zone,
                    label: zone.label(),
                    pps: None,
                    volume_share_pct: None,
                    delta_vs_baseline: None,
                    color: None,
                });
            }
        }
    }
    rows
}
