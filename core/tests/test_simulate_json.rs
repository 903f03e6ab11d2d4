// JSON-inngangen Python-laget bruker – testet uten Python-runtime.
use arcsim_core::simulate_arc_from_json;
use serde_json::json;

fn nba_payload(arc: f64) -> String {
    json!({
        "shots": [
            {"SHOT_DISTANCE": 5,   "LOC_X": 20,   "LOC_Y": 40,  "SHOT_MADE_FLAG": 1},
            {"SHOT_DISTANCE": 24,  "LOC_X": 235,  "LOC_Y": 10,  "SHOT_MADE_FLAG": 1},
            {"SHOT_DISTANCE": 250, "LOC_X": 0,    "LOC_Y": 248, "SHOT_MADE_FLAG": 0},
        ],
        "threePtDistance": arc
    })
    .to_string()
}

#[test]
fn test_smoke_nba_payload() {
    let out = simulate_arc_from_json(&nba_payload(25.0)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["source"], "rust_core");
    assert_eq!(v["arc_distance_ft"].as_f64().unwrap(), 25.0);
    assert_eq!(v["corner_distance_ft"].as_f64().unwrap(), 23.25);
    assert_eq!(v["total_attempts"].as_u64().unwrap(), 3);

    // alle seks sonene rapporteres, aktive først med rank
    let zones = v["zones"].as_array().unwrap();
    assert_eq!(zones.len(), 6);
    assert_eq!(zones[0]["rank"].as_u64().unwrap(), 1);
    assert!(zones[0]["color"].as_str().unwrap().starts_with("hsl("));

    // inaktive soner markeres eksplisitt
    assert!(zones.iter().any(|z| z["active"] == false));
}

#[test]
fn test_include_shots_gives_labeled_rows() {
    let payload = json!({
        "shots": [{"SHOT_DISTANCE": 5, "LOC_X": 20, "LOC_Y": 40, "SHOT_MADE_FLAG": 1}],
        "arc_distance_ft": 23.75,
        "include_shots": true
    })
    .to_string();

    let out = simulate_arc_from_json(&payload).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    let shots = v["shots"].as_array().unwrap();
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0]["zone"], "Paint");
    assert_eq!(shots[0]["points"].as_u64().unwrap(), 2);
}

#[test]
fn test_default_arc_is_current_line() {
    let payload = json!({
        "shots": [{"SHOT_DISTANCE": 5, "LOC_X": 20, "LOC_Y": 40, "SHOT_MADE_FLAG": 1}]
    })
    .to_string();

    let out = simulate_arc_from_json(&payload).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["arc_distance_ft"].as_f64().unwrap(), 23.75);
}

#[test]
fn test_parse_error_reports_path() {
    let payload = r#"{"shots": [{"SHOT_DISTANCE": "langt", "LOC_X": 0, "LOC_Y": 0, "SHOT_MADE_FLAG": 1}]}"#;
    let err = simulate_arc_from_json(payload).unwrap_err();
    assert!(err.starts_with("parse error (SimulateArcIn) at "));
}

#[test]
fn test_invalid_record_surfaces_as_error() {
    let payload = json!({
        "shots": [{"distance_units": null, "loc_x": 0, "loc_y": 0, "made": true}],
        "arc_distance_ft": 25.0
    })
    .to_string();

    // null-avstand stoppes allerede i parsingen
    assert!(simulate_arc_from_json(&payload).is_err());
}
