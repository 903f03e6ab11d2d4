use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::SimError;

/// Godta både bool og 0/1-flagg (NBA-eksporten bruker 0/1).
fn flag_bool<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Num(f64),
    }

    Ok(match Flag::deserialize(de)? {
        Flag::Bool(b) => b,
        Flag::Num(n) => n != 0.0,
    })
}

fn default_attempted() -> bool {
    true
}

/// Én historisk skuddrad slik datakilden leverer den.
/// Aliaser matcher kolonnenavnene i NBA stats-eksporten.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Rå avstand – fot ELLER desifot (tvetydig enhet, se zones::normalize_distance_ft)
    #[serde(alias = "SHOT_DISTANCE")]
    pub distance_units: f64,
    /// Banekoordinat i desifot; origo i kurven, x symmetrisk om kurvaksen
    #[serde(alias = "LOC_X")]
    pub loc_x: f64,
    /// Banekoordinat i desifot; y øker bort fra kurven
    #[serde(alias = "LOC_Y")]
    pub loc_y: f64,
    #[serde(alias = "SHOT_MADE_FLAG", deserialize_with = "flag_bool")]
    pub made: bool,
    /// Rader med attempted=false telles ikke som forsøk
    #[serde(
        default = "default_attempted",
        alias = "SHOT_ATTEMPTED_FLAG",
        deserialize_with = "flag_bool"
    )]
    pub attempted: bool,
}

impl ShotRecord {
    /// Feil raskt på ikke-endelige felt i stedet for å la NaN propagere stille.
    /// Kilden er i utgangspunktet betrodd; dette er en innstramming av den tilliten.
    pub fn validate(&self, index: usize) -> Result<(), SimError> {
        for (name, v) in [
            ("distance_units", self.distance_units),
            ("loc_x", self.loc_x),
            ("loc_y", self.loc_y),
        ] {
            if !v.is_finite() {
                return Err(SimError::InvalidRecord {
                    index,
                    reason: format!("{name} is not finite ({v})"),
                });
            }
        }
        Ok(())
    }
}

/// Datasett med proveniens fra leverandørkjeden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotDataset {
    pub records: Vec<ShotRecord>,
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}
