use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::color::HslColor;

/// Seks gjensidig utelukkende kurtsoner. Deklarasjonsrekkefølgen er den faste
/// fallback-rekkefølgen for visning (soner uten data sorteres i denne).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Paint,
    ShortMidRange,
    LongMidRange,
    Wing3,
    Corner3,
    TopOfKey3,
}

impl Zone {
    pub const ALL: [Zone; 6] = [
        Zone::Paint,
        Zone::ShortMidRange,
        Zone::LongMidRange,
        Zone::Wing3,
        Zone::Corner3,
        Zone::TopOfKey3,
    ];

    /// Visningsnavn slik dashbordet viser dem.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Paint => "Paint",
            Zone::ShortMidRange => "Short Mid-Range",
            Zone::LongMidRange => "Long Mid-Range",
            Zone::Wing3 => "Wing 3",
            Zone::Corner3 => "Corner 3",
            Zone::TopOfKey3 => "Top of Key 3",
        }
    }

    /// Treersonene gir 3 poeng ved scoring; alle andre gir 2.
    pub fn is_three(&self) -> bool {
        matches!(self, Zone::Wing3 | Zone::Corner3 | Zone::TopOfKey3)
    }

    /// Paint og Short Mid-Range defineres uavhengig av buelengden og er
    /// derfor unntatt fra delta-visning mot baseline.
    pub fn arc_independent(&self) -> bool {
        matches!(self, Zone::Paint | Zone::ShortMidRange)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Klassifisert og verdsatt skudd – flatet ut slik at visningslaget kan
/// plotte loc_x/loc_y direkte mot points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuedShot {
    pub loc_x: f64,       // desifot
    pub loc_y: f64,       // desifot
    pub distance_ft: f64, // normalisert avstand i fot
    pub made: bool,
    pub zone: Zone,
    pub points: u8, // simulerte poeng (0/2/3)
}

/// Per-sone statistikk. Fravær i mappet betyr "sonen er ikke aktiv ved denne
/// buelengden" – ikke null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneStats {
    pub attempts: u64,
    pub mean_pps: f64,         // poeng per forsøk
    pub volume_share_pct: f64, // andel av alle forsøk, i %
}

/// Resultatet av én full pipeline-kjøring: begge utdataene (skalar-sammendrag
/// og merket radsett) konsumeres uavhengig av hverandre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcSimulation {
    pub arc_distance_ft: f64,
    pub shots: Vec<ValuedShot>,
    pub stats: BTreeMap<Zone, ZoneStats>,
}

/// Én rad i den rangerte sonerapporten. Inaktive soner har rank=None og
/// ligger etter alle aktive rader.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneRow {
    pub rank: Option<u32>,
    pub zone: Zone,
    pub label: &'static str,
    pub pps: Option<f64>,
    pub volume_share_pct: Option<f64>,
    /// Kun for buelengde-avhengige soner der både kjøring og baseline har data
    pub delta_vs_baseline: Option<f64>,
    pub color: Option<HslColor>,
}

#[derive(Debug, Error)]
pub enum SimError {
    /// Ugyldig (ikke-endelig) felt i en skuddrad – avbryter batchen (fail fast).
    #[error("invalid shot record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    /// Datakilden svarte uten rader. Distinkt og gjenopprettbar: aggregering
    /// over tomt input gir tomt map, ingen divisjon på null.
    #[error("empty dataset: no attempted shot records")]
    EmptyInput,
}
