//! Client error types.

use std::fmt;

use crate::domain::InvalidDistance;
use crate::transport::TransportError;

/// The kind of entity an accessor was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    StopPlace,
    Quay,
    ServiceJourney,
    Line,
    EstimatedCall,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::StopPlace => "stop place",
            EntityKind::Quay => "quay",
            EntityKind::ServiceJourney => "service journey",
            EntityKind::Line => "line",
            EntityKind::EstimatedCall => "estimated call",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`JourneyPlannerClient`](crate::JourneyPlannerClient) accessors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single-entity lookup found nothing for the requested id
    #[error("could not find {kind} with ID {id:?}")]
    NotFound { kind: EntityKind, id: String },

    /// The request itself failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response had the expected field but not the expected shape
    #[error("could not decode {kind}: {message}")]
    Decode { kind: EntityKind, message: String },

    /// A position search was given a distance no box can be built from
    #[error(transparent)]
    InvalidDistance(#[from] InvalidDistance),
}

impl Error {
    /// Returns true if this is a [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
