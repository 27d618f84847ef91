// Response types for the AlAdhan API.
//
// The service wraps every payload in a `{code, status, data}` envelope and
// reports failures inside an HTTP 200 body, so `data` is decoded in a second
// step after the envelope code is checked (see client.rs).

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// The `{code, status, data}` envelope around every AlAdhan response.
///
/// On failure `data` is a plain string describing the problem, so it is
/// kept as a raw `serde_json::Value` until the code has been checked.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub code: u16,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One day's worth of timings plus its dual-calendar date.
///
/// The same shape is used by `timingsByCity` (a single entry) and
/// `hijriCalendarByCity` (an array of entries).
#[derive(Debug, Clone, Deserialize)]
pub struct DayEntry {
    /// Prayer name -> time-of-day string, in upstream order. Values may
    /// carry a timezone suffix (e.g. `"18:02 (EET)"`).
    pub timings: IndexMap<String, String>,
    pub date: DateInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateInfo {
    #[serde(default)]
    pub readable: Option<String>,
    pub gregorian: GregorianDate,
    pub hijri: HijriDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GregorianDate {
    /// Zero-padded `DD-MM-YYYY`.
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HijriDate {
    /// Zero-padded `DD-MM-YYYY` in the Hijri calendar.
    pub date: String,
    /// The service serializes the year as a JSON string ("1447").
    #[serde(deserialize_with = "year_from_string_or_number")]
    pub year: i32,
    #[serde(default)]
    pub month: Option<HijriMonth>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HijriMonth {
    pub number: u32,
    #[serde(default)]
    pub en: Option<String>,
}

/// AlAdhan's Hijri year arrives as `"1447"`; tolerate a bare number too.
fn year_from_string_or_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("non-numeric hijri year {s:?}: {e}"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn day_entry_parses_string_year() {
        let entry: DayEntry = serde_json::from_value(serde_json::json!({
            "timings": {"Fajr": "04:45", "Maghrib": "18:02 (EET)"},
            "date": {
                "gregorian": {"date": "01-03-2026"},
                "hijri": {"date": "12-09-1447", "year": "1447",
                          "month": {"number": 9, "en": "Ramaḍān"}}
            }
        }))
        .unwrap();

        assert_eq!(entry.date.hijri.year, 1447);
        assert_eq!(entry.timings.get("Fajr").unwrap(), "04:45");
    }

    #[test]
    fn timings_preserve_upstream_order() {
        let entry: DayEntry = serde_json::from_str(
            r#"{
                "timings": {"Imsak": "04:35", "Fajr": "04:45", "Maghrib": "18:02"},
                "date": {
                    "gregorian": {"date": "01-03-2026"},
                    "hijri": {"date": "12-09-1447", "year": "1447"}
                }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = entry.timings.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Imsak", "Fajr", "Maghrib"]);
    }

    #[test]
    fn non_numeric_year_is_an_error() {
        let result: Result<HijriDate, _> = serde_json::from_value(serde_json::json!({
            "date": "12-09-1447",
            "year": "soon"
        }));
        assert!(result.is_err());
    }
}
