use arcsim_core::color::{pps_color, pps_to_hsl, PPS_VMAX, PPS_VMIN};

#[test]
fn test_clamps_below_and_above_scale() {
    assert_eq!(pps_to_hsl(0.2, PPS_VMIN, PPS_VMAX).hue, 0);
    assert_eq!(pps_to_hsl(5.0, PPS_VMIN, PPS_VMAX).hue, 120);
}

#[test]
fn test_scale_endpoints() {
    // vmin er rød (hue 0), vmax er grønn (hue 120)
    assert_eq!(pps_color(PPS_VMIN).hue, 0);
    assert_eq!(pps_color(PPS_VMAX).hue, 120);
    assert!(pps_color(PPS_VMIN).hue < pps_color(PPS_VMAX).hue);
}

#[test]
fn test_midpoint_is_yellow() {
    assert_eq!(pps_to_hsl(0.9, 0.6, 1.2).hue, 60);
}

#[test]
fn test_hue_is_monotonic_in_pps() {
    let mut prev = pps_color(PPS_VMIN).hue;
    let mut pps = PPS_VMIN;
    while pps <= PPS_VMAX {
        let hue = pps_color(pps).hue;
        assert!(hue >= prev, "hue falt ved pps={pps}");
        prev = hue;
        pps += 0.05;
    }
}

#[test]
fn test_css_format() {
    assert_eq!(pps_color(PPS_VMAX).to_string(), "hsl(120, 75%, 42%)");
    assert_eq!(pps_color(0.0).to_string(), "hsl(0, 75%, 42%)");
}
