// core/src/shots_api.rs
use chrono::Utc;
use log::{info, warn};
use serde::Deserialize;
use ureq::Agent;

use crate::models::{ShotDataset, ShotRecord};
use crate::types::SimError;

/// Leverandør av skudd-datasett (prod: StatsApiClient, test: StaticShotProvider).
pub trait ShotProvider {
    fn name(&self) -> &'static str;
    fn get_league_shots(&self, season: &str) -> Option<Vec<ShotRecord>>;
}

/// Tolerant respons: enten { "shots": [...] } eller en rå array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShotsResp {
    Wrapped { shots: Vec<ShotRecord> },
    Bare(Vec<ShotRecord>),
}

impl ShotsResp {
    fn into_records(self) -> Vec<ShotRecord> {
        match self {
            ShotsResp::Wrapped { shots } => shots,
            ShotsResp::Bare(rows) => rows,
        }
    }
}

/// Stats-API-klient – enkel blocking-versjon (ureq).
pub struct StatsApiClient {
    agent: Agent,
    base_url: String,
}

impl StatsApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // En enkel agent; ureq bruker rustls når "tls" er aktivert
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(10))
            .build();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }
}

impl ShotProvider for StatsApiClient {
    fn name(&self) -> &'static str {
        "stats_api"
    }

    fn get_league_shots(&self, season: &str) -> Option<Vec<ShotRecord>> {
        let url = format!("{}/league_shots?season={}", self.base_url, season);

        let resp = self.agent.get(&url).call().ok()?;
        let body: ShotsResp = resp.into_json().ok()?;
        let records = body.into_records();

        info!("[StatsApi] season={} => {} skuddrader", season, records.len());
        Some(records)
    }
}

/// Lokal fil-leverandør (JSON-eksport av liga-datasettet).
pub struct FileShotProvider {
    pub path: String,
}

impl ShotProvider for FileShotProvider {
    fn name(&self) -> &'static str {
        "local_file"
    }

    fn get_league_shots(&self, _season: &str) -> Option<Vec<ShotRecord>> {
        match crate::storage::load_shots(&self.path) {
            Ok(records) => Some(records),
            Err(e) => {
                warn!("FileShotProvider: {}", e);
                None
            }
        }
    }
}

/// Statisk leverandør for tester.
pub struct StaticShotProvider {
    pub records: Vec<ShotRecord>,
}

impl ShotProvider for StaticShotProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    fn get_league_shots(&self, _season: &str) -> Option<Vec<ShotRecord>> {
        Some(self.records.clone())
    }
}

/// Leverandørkjede: prøv i rekkefølge, første kilde med rader vinner.
/// Feiler alle ⇒ fatal, beskrivende feil – kjernen gjør ingen retry;
/// backoff hører hjemme hos datakilde-kollaboratøren.
pub fn load_league_shots(
    providers: &[&dyn ShotProvider],
    season: &str,
) -> anyhow::Result<ShotDataset> {
    for p in providers {
        match p.get_league_shots(season) {
            Some(records) if records.is_empty() => {
                // Kilde som svarer men uten rader – meld distinkt og prøv neste
                warn!("leverandør {} ga tomt datasett for {}", p.name(), season);
            }
            Some(records) => {
                return Ok(ShotDataset {
                    records,
                    source: p.name().to_string(),
                    fetched_at: Utc::now(),
                });
            }
            None => {}
        }
    }

    Err(anyhow::Error::new(SimError::EmptyInput)
        .context(format!("ingen skuddkilde tilgjengelig for sesong {season}")))
}
