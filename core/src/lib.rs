// ArcSim-kjernen: soneklassifisering, poengverdsetting og PPS-aggregering
// for en hypotetisk flyttet trepoengsbue. Python-dashbordet konsumerer
// kjernen via pyo3-bindingene i py/.

pub mod aggregate;
pub mod analyzer;
pub mod cache;
pub mod cli;
pub mod color;
pub mod models;
pub mod py;
pub mod report;
pub mod shots_api;
pub mod simulation;
pub mod storage;
pub mod types;
pub mod valuation;
pub mod zones;

pub use aggregate::{aggregate, rank_zones};
pub use analyzer::simulate_arc_from_json;
pub use cache::SimCache;
pub use color::{pps_color, pps_to_hsl, HslColor};
pub use models::{ShotDataset, ShotRecord};
pub use report::build_zone_rows;
pub use simulation::{baseline_stats, label_shots, simulate};
pub use storage::{load_shots, save_shots};
pub use types::{ArcSimulation, SimError, ValuedShot, Zone, ZoneRow, ZoneStats};
pub use valuation::shot_points;
pub use zones::{classify, normalize_distance_ft, BASELINE_ARC_FT};
