//! JourneyPlanner GraphQL client.
//!
//! Typed accessors over the public transit JourneyPlanner API: stop places,
//! quays, service journeys, lines and their calls. Each entity declares its
//! own GraphQL fragment and the fragments it nests; query documents are
//! composed so every fragment is defined exactly once.
//!
//! ```no_run
//! use journey_planner::{ClientConfig, Coordinates, JourneyPlannerClient};
//!
//! # async fn example() -> Result<(), journey_planner::Error> {
//! let client = JourneyPlannerClient::new(&ClientConfig::new("acme-departure-board"))?;
//!
//! let oslo_s = client.get_stop_place("NSR:StopPlace:337").await?;
//! let nearby = client
//!     .get_stop_places_by_position(Coordinates::new(59.91, 10.75), None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domain;
pub mod error;
pub mod fragments;
pub mod normalize;
pub mod query;
pub mod transport;

pub use client::{ClientConfig, JourneyPlannerClient};
pub use domain::{BoundingBox, Coordinates, InvalidDistance};
pub use error::{EntityKind, Error};
pub use transport::{HttpTransport, Transport, TransportError, Variables};
