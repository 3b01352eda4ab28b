//! JourneyPlanner client.
//!
//! Each accessor issues exactly one query: build variables, take the
//! operation's composed document, execute it, then normalize the response.
//! Nothing is retried and nothing is cached between calls.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    BoundingBox, Coordinates, DEFAULT_DISTANCE_M, EstimatedCall, Line, Quay, ServiceJourney,
    StopPlace,
};
use crate::error::{EntityKind, Error};
use crate::normalize::{self, ResponseEnvelope};
use crate::query::{
    DEPARTURES_FOR_SERVICE_JOURNEY, LINE_BY_ID, Operation, QUAYS_FOR_STOP_PLACE,
    SERVICE_JOURNEY_BY_ID, STOP_PLACE_BY_ID, STOP_PLACES_BY_BBOX,
};
use crate::transport::{HttpTransport, Transport, TransportError, Variables};

/// Default JourneyPlanner GraphQL endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.entur.io/journey-planner/v2/graphql";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the JourneyPlanner client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Identifies the calling application, e.g. "acme-departure-board".
    /// Sent as the `ET-Client-Name` header.
    pub client_name: String,
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Extra headers sent with every request
    pub headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Create a new config for the given client name.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            headers: Vec::new(),
        }
    }

    /// Set a custom endpoint (for testing, or another deployment).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Typed accessors over the JourneyPlanner API.
///
/// Generic over the [`Transport`] so tests can run without a network. The
/// client holds no mutable state; concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct JourneyPlannerClient<T = HttpTransport> {
    transport: T,
}

impl JourneyPlannerClient<HttpTransport> {
    /// Create a client that talks HTTP to the configured endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }
}

impl<T: Transport> JourneyPlannerClient<T> {
    /// Create a client over an existing transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute an operation and wrap whatever came back in an envelope.
    async fn execute(
        &self,
        operation: &Operation,
        variables: Variables,
    ) -> Result<ResponseEnvelope, Error> {
        debug!(
            operation = operation.name(),
            variables = variables.len(),
            "executing JourneyPlanner query"
        );

        let response = self
            .transport
            .execute(operation.document(), &variables)
            .await?;

        Ok(ResponseEnvelope::from_value(response))
    }

    async fn fetch_one<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        kind: EntityKind,
        id: &str,
    ) -> Result<R, Error> {
        let envelope = self.execute(operation, id_variables(id)).await?;
        normalize::one(envelope, operation.path(), kind, id)
    }

    /// Get a stop place by its NSR id, e.g. `NSR:StopPlace:337`.
    ///
    /// Fails with [`Error::NotFound`] if the API has no such stop place.
    pub async fn get_stop_place(&self, id: &str) -> Result<StopPlace, Error> {
        self.fetch_one(&STOP_PLACE_BY_ID, EntityKind::StopPlace, id)
            .await
    }

    /// Get the stop places within `distance` metres of a position.
    ///
    /// `distance` defaults to 500 m. An area with no stop places yields an
    /// empty list. A negative or non-finite distance fails with
    /// [`Error::InvalidDistance`] before any request is made.
    pub async fn get_stop_places_by_position(
        &self,
        coordinates: Coordinates,
        distance: Option<f64>,
    ) -> Result<Vec<StopPlace>, Error> {
        let distance = distance.unwrap_or(DEFAULT_DISTANCE_M);
        let bbox = BoundingBox::around(coordinates, distance)?;
        self.get_stop_places_by_bbox(bbox).await
    }

    /// Get the stop places inside a bounding box.
    pub async fn get_stop_places_by_bbox(
        &self,
        bbox: BoundingBox,
    ) -> Result<Vec<StopPlace>, Error> {
        let envelope = self
            .execute(&STOP_PLACES_BY_BBOX, bbox_variables(&bbox))
            .await?;
        normalize::many(envelope, STOP_PLACES_BY_BBOX.path(), EntityKind::StopPlace)
    }

    /// Get the quays of a stop place.
    ///
    /// Fails with [`Error::NotFound`] if the stop place does not exist; a
    /// stop place without quays yields an empty list.
    pub async fn get_quays_for_stop_place(&self, id: &str) -> Result<Vec<Quay>, Error> {
        #[derive(Deserialize)]
        struct StopPlaceQuays {
            #[serde(default)]
            quays: Option<Vec<Quay>>,
        }

        let stop: StopPlaceQuays = self
            .fetch_one(&QUAYS_FOR_STOP_PLACE, EntityKind::StopPlace, id)
            .await?;
        Ok(stop.quays.unwrap_or_default())
    }

    /// Get a service journey by id.
    pub async fn get_service_journey(&self, id: &str) -> Result<ServiceJourney, Error> {
        self.fetch_one(&SERVICE_JOURNEY_BY_ID, EntityKind::ServiceJourney, id)
            .await
    }

    /// Get a line by id.
    pub async fn get_line(&self, id: &str) -> Result<Line, Error> {
        self.fetch_one(&LINE_BY_ID, EntityKind::Line, id).await
    }

    /// Get the calls of a service journey on a date (the server defaults
    /// to today).
    ///
    /// An unknown service journey yields an empty list.
    pub async fn get_departures_for_service_journey(
        &self,
        id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<EstimatedCall>, Error> {
        let mut variables = id_variables(id);
        if let Some(date) = date {
            variables.insert(
                "date".to_string(),
                Value::from(date.format("%Y-%m-%d").to_string()),
            );
        }

        let envelope = self
            .execute(&DEPARTURES_FOR_SERVICE_JOURNEY, variables)
            .await?;
        normalize::many(
            envelope,
            DEPARTURES_FOR_SERVICE_JOURNEY.path(),
            EntityKind::EstimatedCall,
        )
    }
}

fn id_variables(id: &str) -> Variables {
    let mut variables = Variables::new();
    variables.insert("id".to_string(), Value::from(id));
    variables
}

/// The box's fields are named after the query's variables.
fn bbox_variables(bbox: &BoundingBox) -> Variables {
    match serde_json::to_value(bbox) {
        Ok(Value::Object(variables)) => variables,
        _ => Variables::new(),
    }
}
