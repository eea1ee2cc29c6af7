use crate::model::Minute;
use chrono::{NaiveTime, Timelike};

/// Parse une heure `HH:MM` (24h) en minute de la journée.
pub fn parse_hhmm(raw: &str) -> Result<Minute, chrono::ParseError> {
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M")?;
    Ok((time.num_seconds_from_midnight() / 60) as Minute)
}

/// Formate une minute de la journée en `HH:MM`.
pub fn format_hhmm(minute: Minute) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Sérialisation serde des minutes sous forme `HH:MM`.
pub mod hhmm {
    use super::{format_hhmm, parse_hhmm};
    use crate::model::Minute;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minute: &Minute, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_hhmm(*minute))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Minute, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_hhmm(&raw).map_err(|err| D::Error::custom(format!("invalid time {raw:?}: {err}")))
    }
}
