// core/src/zones.rs
use crate::models::ShotRecord;
use crate::types::Zone;

/// Dagens NBA-bue (fot) – referansen alle delta-verdier måles mot.
pub const BASELINE_ARC_FT: f64 = 23.75;
/// Hjørnebuen ligger alltid 1.75 fot nærmere kurven enn toppbuen.
pub const CORNER_ARC_OFFSET_FT: f64 = 1.75;
/// Høyden på det rette hjørnesegmentet før buen svinger (desifot).
pub const CORNER_BREAK_Y_DFT: f64 = 92.5;
/// Rå avstand over denne tolkes som desifot – ingen ekte skudd er lengre
/// enn 100 fot. Terskel-hacket fra kildedataene, må bevares eksakt.
pub const DISTANCE_UNIT_SPLIT: f64 = 100.0;
/// Halv banebredde (desifot); skudd utenfor denne finnes ikke i datasettet.
pub const COURT_HALF_WIDTH_DFT: f64 = 250.0;

const PAINT_MAX_FT: f64 = 8.0;
const SHORT_MID_MAX_FT: f64 = 16.0;

/// Normaliser tvetydig rå avstand til fot (>100 ⇒ desifot, del på 10).
#[inline]
pub fn normalize_distance_ft(raw: f64) -> f64 {
    if raw > DISTANCE_UNIT_SPLIT {
        raw / 10.0
    } else {
        raw
    }
}

/// Polarvinkel i grader; ca. 0–180 gitt loc_y >= 0-konvensjonen.
#[inline]
fn shot_angle_deg(loc_x: f64, loc_y: f64) -> f64 {
    loc_y.atan2(loc_x).to_degrees()
}

/// Klassifiser ett skudd under en hypotetisk buelengde.
///
/// Ren og deterministisk funksjon, total over endelige input. Grensene er
/// strenge `<`/`>=` uten toleranse – retningen avgjør sonetellingen nær
/// buen og må ikke endres. For arc_distance_ft godt over dagens bue kan
/// hjørnesonen bli geometrisk tom; det er et gyldig utfall, ikke en feil.
pub fn classify(record: &ShotRecord, arc_distance_ft: f64) -> Zone {
    let dist = normalize_distance_ft(record.distance_units);

    // Faste soner – uavhengige av buelengden
    if dist < PAINT_MAX_FT {
        return Zone::Paint;
    }
    if dist < SHORT_MID_MAX_FT {
        return Zone::ShortMidRange;
    }

    let corner_cutoff_ft = arc_distance_ft - CORNER_ARC_OFFSET_FT;
    let is_corner_area = record.loc_y < CORNER_BREAK_Y_DFT;

    let is_three = (is_corner_area && dist >= corner_cutoff_ft)
        || (!is_corner_area && dist >= arc_distance_ft);

    if !is_three {
        // "Ekspansjonssonen": alt forbi 16 fot men innenfor den nye buen
        return Zone::LongMidRange;
    }
    if is_corner_area {
        return Zone::Corner3;
    }

    // Over break-høyden: del treerne i wing-bånd og resten (bak kurven
    // på vinkelen: <=22°, [70°,110°], >=158°)
    let angle = shot_angle_deg(record.loc_x, record.loc_y);
    if (22.0 < angle && angle < 70.0) || (110.0 < angle && angle < 158.0) {
        Zone::Wing3
    } else {
        Zone::TopOfKey3
    }
}
