use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use log::debug;
use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use prometheus::{register_int_counter, IntCounter};

use crate::models::ShotRecord;
use crate::simulation::simulate;
use crate::types::{ArcSimulation, SimError};

pub static SIM_CACHE_HIT_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("sim_cache_hit_total", "Cache-treff i simuleringscachen")
        .expect("register sim_cache_hit_total")
});

pub static SIM_CACHE_MISS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("sim_cache_miss_total", "Cache-bom i simuleringscachen")
        .expect("register sim_cache_miss_total")
});

/// Liten fast kapasitet: UI-driveren er kontinuerlig og de fleste
/// buelengder besøkes bare én gang.
pub const DEFAULT_CAPACITY: usize = 16;

/// Eksplisitt memoisering av hele pipelinen, nøklet på buelengden.
/// Begrenset LRU-eviction; trådtrygg bak Mutex (&self-API, kan deles).
pub struct SimCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

struct Inner {
    map: HashMap<OrderedFloat<f64>, Arc<ArcSimulation>>,
    lru: VecDeque<OrderedFloat<f64>>,
}

impl SimCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner {
                map: HashMap::new(),
                lru: VecDeque::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hent cachet simulering eller beregn og legg inn. Pipelinen er
    /// referensielt transparent, så samme (datasett, buelengde) gir
    /// identisk resultat – delt Arc er trygt.
    pub fn get_or_compute(
        &self,
        records: &[ShotRecord],
        arc_distance_ft: f64,
    ) -> Result<Arc<ArcSimulation>, SimError> {
        let key = OrderedFloat(arc_distance_ft);
        let mut inner = self.inner.lock().unwrap();

        if let Some(hit) = inner.map.get(&key).cloned() {
            SIM_CACHE_HIT_TOTAL.inc();
            // flytt nøkkelen bakerst (mest nylig brukt)
            if let Some(pos) = inner.lru.iter().position(|k| *k == key) {
                inner.lru.remove(pos);
            }
            inner.lru.push_back(key);
            return Ok(hit);
        }

        SIM_CACHE_MISS_TOTAL.inc();
        let sim = Arc::new(simulate(records, arc_distance_ft)?);
        inner.map.insert(key, sim.clone());
        inner.lru.push_back(key);

        while inner.map.len() > self.capacity {
            match inner.lru.pop_front() {
                Some(evicted) => {
                    inner.map.remove(&evicted);
                    debug!("SimCache: kastet ut arc={:.2}", evicted.0);
                }
                None => break,
            }
        }

        Ok(sim)
    }
}

impl Default for SimCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
