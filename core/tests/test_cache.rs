use std::sync::Arc;

use arcsim_core::cache::{SimCache, SIM_CACHE_HIT_TOTAL, SIM_CACHE_MISS_TOTAL};
use arcsim_core::models::ShotRecord;

fn mk(distance_units: f64, loc_x: f64, loc_y: f64, made: bool) -> ShotRecord {
    ShotRecord {
        distance_units,
        loc_x,
        loc_y,
        made,
        attempted: true,
    }
}

fn dataset() -> Vec<ShotRecord> {
    vec![
        mk(5.0, 20.0, 40.0, true),
        mk(12.0, 80.0, 90.0, false),
        mk(24.0, 235.0, 10.0, true),
        mk(25.0, 177.0, 177.0, false),
    ]
}

#[test]
fn test_hit_returns_shared_result() {
    let records = dataset();
    let cache = SimCache::new(4);

    // tellerne er globale for prosessen – mål bare endringen
    let hits_before = SIM_CACHE_HIT_TOTAL.get();
    let miss_before = SIM_CACHE_MISS_TOTAL.get();

    let a = cache.get_or_compute(&records, 25.0).unwrap();
    let b = cache.get_or_compute(&records, 25.0).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.arc_distance_ft, 25.0);
    assert!(SIM_CACHE_HIT_TOTAL.get() >= hits_before + 1);
    assert!(SIM_CACHE_MISS_TOTAL.get() >= miss_before + 1);
}

#[test]
fn test_distinct_arcs_do_not_interfere() {
    let records = dataset();
    let cache = SimCache::new(8);

    let near = cache.get_or_compute(&records, 23.75).unwrap();
    let far = cache.get_or_compute(&records, 30.0).unwrap();

    // hjørneskuddet er treer ved baseline men ikke ved 30 fot
    assert!(near
        .shots
        .iter()
        .any(|s| s.zone == arcsim_core::types::Zone::Corner3));
    assert!(!far
        .shots
        .iter()
        .any(|s| s.zone == arcsim_core::types::Zone::Corner3));
}

#[test]
fn test_lru_eviction_is_bounded() {
    let records = dataset();
    let cache = SimCache::new(2);

    let first = cache.get_or_compute(&records, 22.0).unwrap();
    cache.get_or_compute(&records, 23.0).unwrap();
    cache.get_or_compute(&records, 24.0).unwrap(); // kaster ut 22.0
    assert_eq!(cache.len(), 2);

    // 22.0 må beregnes på nytt → ny Arc
    let recomputed = cache.get_or_compute(&records, 22.0).unwrap();
    assert!(!Arc::ptr_eq(&first, &recomputed));
    assert_eq!(*first, *recomputed); // men bit-identisk innhold
}

#[test]
fn test_hit_refreshes_lru_position() {
    let records = dataset();
    let cache = SimCache::new(2);

    let a22 = cache.get_or_compute(&records, 22.0).unwrap();
    cache.get_or_compute(&records, 23.0).unwrap();
    cache.get_or_compute(&records, 22.0).unwrap(); // 22.0 blir nyligst brukt
    cache.get_or_compute(&records, 24.0).unwrap(); // kaster ut 23.0, ikke 22.0

    let still_cached = cache.get_or_compute(&records, 22.0).unwrap();
    assert!(Arc::ptr_eq(&a22, &still_cached));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_invalid_record_error_propagates() {
    let records = vec![mk(f64::NAN, 0.0, 0.0, true)];
    let cache = SimCache::default();
    assert!(cache.get_or_compute(&records, 25.0).is_err());
}
