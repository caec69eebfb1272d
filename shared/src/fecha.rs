//! Date display helpers.
//!
//! The server reports timestamps as plain strings, usually MySQL style
//! (`2024-05-01 13:45:00`) but occasionally RFC 3339. The UI shows them in
//! the local convention `dd/MM/yyyy HH:mm`.

use chrono::NaiveDateTime;

const FORMATOS_ENTRADA: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parsear(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    // RFC 3339 with offset first, then the naive formats.
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    FORMATOS_ENTRADA
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `dd/MM/yyyy HH:mm`, or `-` when the value is absent or unparseable.
pub fn fecha_hora(valor: Option<&str>) -> String {
    match valor.and_then(parsear) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Date-only variant used in the purchases table.
pub fn fecha_corta(valor: Option<&str>) -> String {
    match valor.and_then(parsear) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}
