use std::error::Error;
use std::path::Path;

use crate::models::ShotRecord;

/// Leser inn skuddrader fra disk (JSON-array).
/// Manglende fil er en kollaboratør-feil – rapporteres oppover med
/// beskrivende melding, ingen retry her.
pub fn load_shots(path: &str) -> Result<Vec<ShotRecord>, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("fant ikke skudd-datasett på {path}").into());
    }
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<ShotRecord> = serde_json::from_str(&contents)?;
    println!("📂 Lastet {} skuddrader fra {}", records.len(), path);
    Ok(records)
}

/// Lagrer skuddrader til disk som JSON (pretty-print).
pub fn save_shots(records: &[ShotRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    println!("✅ Lagret {} skuddrader til {}", records.len(), path);
    Ok(())
}
