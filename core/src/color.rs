use std::fmt;

/// Standard fargeskala-grenser for PPS i dashbordet.
pub const PPS_VMIN: f64 = 0.6;
pub const PPS_VMAX: f64 = 1.2;

// Fast metning/lyshet – kun hue varierer med PPS
const SATURATION_PCT: u8 = 75;
const LIGHTNESS_PCT: u8 = 42;

/// HSL-farge klar for rendering; Display gir css-formen "hsl(h, s%, l%)".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColor {
    pub hue: u16, // 0 (rød) .. 120 (grønn)
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl serde::Serialize for HslColor {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Lineær klem av PPS inn i [vmin, vmax] → hue-sveip rød(0)→grønn(120).
/// Monotont: høyere PPS innenfor skalaen gir aldri lavere hue.
pub fn pps_to_hsl(pps: f64, vmin: f64, vmax: f64) -> HslColor {
    let clamped = ((pps - vmin) / (vmax - vmin)).clamp(0.0, 1.0);
    HslColor {
        hue: (clamped * 120.0) as u16,
        saturation: SATURATION_PCT,
        lightness: LIGHTNESS_PCT,
    }
}

/// Standardskalaen brukt av rapportlaget.
pub fn pps_color(pps: f64) -> HslColor {
    pps_to_hsl(pps, PPS_VMIN, PPS_VMAX)
}
