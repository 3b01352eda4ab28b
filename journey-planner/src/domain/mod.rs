//! Domain types for the JourneyPlanner client.
//!
//! This module contains the mode vocabulary, positions, and the entity
//! records that accessors return. Records are plain data: built fresh from
//! each response and never mutated by the client.

mod coordinates;
mod entity;
mod mode;

pub use coordinates::{BoundingBox, Coordinates, DEFAULT_DISTANCE_M, InvalidDistance};
pub use entity::{
    DestinationDisplay, EstimatedCall, JourneyPattern, Line, MultilingualString, Notice, Quay,
    ServiceJourney, Situation, StopPlace, ValidityPeriod,
};
pub use mode::{LegMode, QueryMode, TransportMode, TransportSubmode, UnknownLiteral};
