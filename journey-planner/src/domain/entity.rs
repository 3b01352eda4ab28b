//! Entity records decoded from JourneyPlanner responses.
//!
//! Each record mirrors the selection of the matching fragment in
//! [`crate::fragments`]. The server omits or nulls fields freely, so
//! everything except identifiers is optional and lists decode `null` as
//! empty.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::mode::{TransportMode, TransportSubmode};

/// A notice attached to a line, journey pattern, service journey or call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: Option<String>,
    pub text: Option<String>,
    pub public_code: Option<String>,
}

/// A line, e.g. "RE11 Skien - Eidsvoll".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: String,
    pub name: Option<String>,
    pub public_code: Option<String>,
    pub description: Option<String>,
    pub flexible_line_type: Option<String>,
    pub transport_mode: Option<TransportMode>,
    pub transport_submode: Option<TransportSubmode>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notices: Vec<Notice>,
}

/// A text in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultilingualString {
    pub value: String,
    pub language: Option<String>,
}

/// Period in which a situation applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidityPeriod {
    #[serde(default, deserialize_with = "optional_datetime")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub end_time: Option<DateTime<FixedOffset>>,
}

/// A disruption message (SIRI situation exchange).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Situation {
    pub situation_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: Vec<MultilingualString>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: Vec<MultilingualString>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub advice: Vec<MultilingualString>,
    pub report_type: Option<String>,
    pub validity_period: Option<ValidityPeriod>,
}

/// A boarding position (platform, bay, gate) within a stop place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quay {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub public_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub situations: Vec<Situation>,
}

/// A named stop, grouping one or more quays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPlace {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wheelchair_boarding: Option<String>,
    pub weighting: Option<String>,
    pub transport_mode: Option<TransportMode>,
    pub transport_submode: Option<TransportSubmode>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quays: Vec<Quay>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub situations: Vec<Situation>,
}

/// The ordered stop pattern a service journey follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPattern {
    pub line: Line,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notices: Vec<Notice>,
}

/// A single run of a vehicle along a journey pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJourney {
    pub id: String,
    pub journey_pattern: Option<JourneyPattern>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notices: Vec<Notice>,
    pub public_code: Option<String>,
    pub transport_submode: Option<TransportSubmode>,
}

/// Headsign shown on the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDisplay {
    pub front_text: Option<String>,
}

/// A service journey's call at a quay, with aimed and real-time times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedCall {
    #[serde(default, deserialize_with = "optional_datetime")]
    pub aimed_arrival_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub aimed_departure_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub expected_arrival_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub expected_departure_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub actual_arrival_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub actual_departure_time: Option<DateTime<FixedOffset>>,
    pub date: Option<NaiveDate>,
    pub cancellation: Option<bool>,
    pub realtime: Option<bool>,
    pub for_boarding: Option<bool>,
    pub for_alighting: Option<bool>,
    pub request_stop: Option<bool>,
    pub destination_display: Option<DestinationDisplay>,
    pub quay: Option<Quay>,
    pub service_journey: Option<ServiceJourney>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notices: Vec<Notice>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub situations: Vec<Situation>,
}

impl EstimatedCall {
    /// Best known departure time: actual, then expected, then aimed.
    pub fn departure_time(&self) -> Option<DateTime<FixedOffset>> {
        self.actual_departure_time
            .or(self.expected_departure_time)
            .or(self.aimed_departure_time)
    }

    /// Departure delay against the timetable, if both times are known.
    pub fn departure_delay(&self) -> Option<chrono::Duration> {
        Some(self.departure_time()? - self.aimed_departure_time?)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The API writes offsets without a colon (`+0100`); accept RFC 3339 too.
fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    DateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(&raw))
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid datetime {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_stop_place() {
        let stop: StopPlace =
            serde_json::from_value(json!({ "id": "NSR:StopPlace:1", "name": "Oslo S" })).unwrap();

        assert_eq!(stop.id, "NSR:StopPlace:1");
        assert_eq!(stop.name.as_deref(), Some("Oslo S"));
        assert_eq!(stop.latitude, None);
        assert!(stop.quays.is_empty());
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let line: Line = serde_json::from_value(json!({
            "id": "NSB:Line:L1",
            "notices": null,
            "transportMode": "rail",
        }))
        .unwrap();

        assert!(line.notices.is_empty());
        assert_eq!(line.transport_mode, Some(TransportMode::Rail));
    }

    #[test]
    fn stop_place_with_quays() {
        let stop: StopPlace = serde_json::from_value(json!({
            "id": "NSR:StopPlace:337",
            "name": "Oslo S",
            "latitude": 59.910357,
            "longitude": 10.753051,
            "transportMode": "rail",
            "transportSubmode": "airportLinkRail",
            "quays": [
                { "id": "NSR:Quay:550", "publicCode": "13", "situations": [] }
            ]
        }))
        .unwrap();

        assert_eq!(stop.transport_submode, Some(TransportSubmode::AirportLinkRail));
        assert_eq!(stop.quays.len(), 1);
        assert_eq!(stop.quays[0].public_code.as_deref(), Some("13"));
    }

    #[test]
    fn service_journey_with_journey_pattern() {
        let journey: ServiceJourney = serde_json::from_value(json!({
            "id": "NSB:ServiceJourney:1-2",
            "journeyPattern": {
                "line": { "id": "NSB:Line:L1", "notices": [{ "text": "Line notice" }] },
                "notices": [{ "text": "Pattern notice" }]
            },
            "notices": [],
            "publicCode": "2101",
            "transportSubmode": "touristRailway"
        }))
        .unwrap();

        let pattern = journey.journey_pattern.unwrap();
        assert_eq!(pattern.line.id, "NSB:Line:L1");
        assert_eq!(pattern.line.notices[0].text.as_deref(), Some("Line notice"));
        assert_eq!(pattern.notices[0].text.as_deref(), Some("Pattern notice"));
    }

    #[test]
    fn estimated_call_times() {
        let call: EstimatedCall = serde_json::from_value(json!({
            "aimedDepartureTime": "2019-03-05T12:00:00+0100",
            "expectedDepartureTime": "2019-03-05T12:03:00+01:00",
            "date": "2019-03-05",
            "realtime": true,
            "notices": null
        }))
        .unwrap();

        assert_eq!(call.date, NaiveDate::from_ymd_opt(2019, 3, 5));
        assert_eq!(
            call.departure_time().unwrap().to_rfc3339(),
            "2019-03-05T12:03:00+01:00"
        );
        assert_eq!(call.departure_delay(), Some(chrono::Duration::minutes(3)));
        assert!(call.notices.is_empty());
    }

    #[test]
    fn invalid_datetime_is_rejected() {
        let result: Result<EstimatedCall, _> =
            serde_json::from_value(json!({ "aimedDepartureTime": "noon" }));
        assert!(result.is_err());
    }
}
