use std::collections::BTreeMap;

use crate::types::{ValuedShot, Zone, ZoneStats};

/// Reduser en batch klassifiserte skudd til per-sone statistikk.
///
/// Tomt input gir tomt map – ikke en feil, og ingen divisjon på null.
/// Idempotent: samme input gir bit-identisk output, så resultatet kan
/// memoiseres trygt per buelengde.
pub fn aggregate(shots: &[ValuedShot]) -> BTreeMap<Zone, ZoneStats> {
    let total = shots.len();
    if total == 0 {
        return BTreeMap::new();
    }

    // (forsøk, poengsum) per sone
    let mut sums: BTreeMap<Zone, (u64, u64)> = BTreeMap::new();
    for s in shots {
        let e = sums.entry(s.zone).or_insert((0, 0));
        e.0 += 1;
        e.1 += s.points as u64;
    }

    sums.into_iter()
        .map(|(zone, (attempts, points))| {
            let stats = ZoneStats {
                attempts,
                mean_pps: points as f64 / attempts as f64,
                volume_share_pct: attempts as f64 / total as f64 * 100.0,
            };
            (zone, stats)
        })
        .collect()
}

/// Rangér soner etter PPS synkende for visning; soner uten data legges sist
/// i den faste fallback-rekkefølgen (Zone::ALL).
pub fn rank_zones(stats: &BTreeMap<Zone, ZoneStats>) -> Vec<Zone> {
    let mut ranked: Vec<Zone> = Zone::ALL
        .iter()
        .copied()
        .filter(|z| stats.contains_key(z))
        .collect();

    // stabil sort → likt PPS beholder fast rekkefølge
    ranked.sort_by(|a, b| stats[b].mean_pps.partial_cmp(&stats[a].mean_pps).unwrap());

    ranked.extend(Zone::ALL.iter().copied().filter(|z| !stats.contains_key(z)));
    ranked
}
