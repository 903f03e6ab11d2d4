use crate::models::ShotRecord;
use crate::report::build_zone_rows;
use crate::simulation::{baseline_stats, simulate};

/// Skriv rangert sonerapport til stdout.
pub fn print_zone_report(records: &[ShotRecord], arc_distance_ft: f64) {
    let sim = match simulate(records, arc_distance_ft) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("simulering feilet: {e}");
            return;
        }
    };
    let baseline = match baseline_stats(records) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("baseline feilet: {e}");
            return;
        }
    };

    let rows = build_zone_rows(&sim.stats, &baseline);

    println!("--- Zone Report ({:.2} ft arc) ---", arc_distance_ft);
    for row in rows {
        match (row.rank, row.pps, row.volume_share_pct) {
            (Some(rank), Some(pps), Some(share)) => {
                let delta = row
                    .delta_vs_baseline
                    .map(|d| format!("{d:+.3} vs baseline"))
                    .unwrap_or_default();
                println!(
                    "#{rank} {:<16} {pps:.3} pts/att  {share:>5.1}%  {delta}",
                    row.label
                );
            }
            _ => println!("–  {:<16} N/A (ikke aktiv ved denne avstanden)", row.label),
        }
    }
}
