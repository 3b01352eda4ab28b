//! Transport mode vocabulary.
//!
//! These are closed sets of the literals the JourneyPlanner schema accepts
//! and returns. Each enumeration round-trips through its literal via
//! [`FromStr`](std::str::FromStr), [`Display`](std::fmt::Display) and serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a literal that is not part of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} literal: {value:?}")]
pub struct UnknownLiteral {
    kind: &'static str,
    value: String,
}

impl UnknownLiteral {
    /// The enumeration that rejected the literal.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected literal.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Declares a closed string enumeration.
///
/// Variant attributes are forwarded, so a variant can carry `#[serde(other)]`
/// to absorb literals the server adds after this table was written.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $literal)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The literal the API uses for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $literal, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $literal => Ok($name::$variant), )+
                    _ => Err(UnknownLiteral {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

literal_enum! {
    /// Mode of a transit line or stop place.
    pub enum TransportMode {
        Air => "air",
        Bus => "bus",
        Cableway => "cableway",
        Coach => "coach",
        Funicular => "funicular",
        Lift => "lift",
        Metro => "metro",
        Rail => "rail",
        Tram => "tram",
        Water => "water",
        // serde requires the fallback variant to come last
        #[serde(other)]
        Unknown => "unknown",
    }
}

literal_enum! {
    /// All valid values for the `mode` parameter of a trip query.
    pub enum QueryMode {
        Air => "air",
        Bicycle => "bicycle",
        Bus => "bus",
        Cableway => "cableway",
        Car => "car",
        CarDropoff => "car_dropoff",
        CarPark => "car_park",
        CarPickup => "car_pickup",
        Coach => "coach",
        Foot => "foot",
        Funicular => "funicular",
        Lift => "lift",
        Metro => "metro",
        Rail => "rail",
        Tram => "tram",
        Transit => "transit",
        Water => "water",
    }
}

literal_enum! {
    /// Mode of a single trip leg: any transport mode, or a street mode.
    pub enum LegMode {
        Air => "air",
        Bus => "bus",
        Cableway => "cableway",
        Coach => "coach",
        Funicular => "funicular",
        Lift => "lift",
        Metro => "metro",
        Rail => "rail",
        Tram => "tram",
        Unknown => "unknown",
        Water => "water",
        Bicycle => "bicycle",
        Car => "car",
        Foot => "foot",
    }
}

literal_enum! {
    /// Finer classification within a [`TransportMode`].
    pub enum TransportSubmode {
        AirportLinkRail => "airportLinkRail",
        HighSpeedPassengerService => "highSpeedPassengerService",
        HighSpeedVehicleService => "highSpeedVehicleService",
        InternationalCarFerry => "internationalCarFerry",
        LocalCarFerry => "localCarFerry",
        LocalPassengerFerry => "localPassengerFerry",
        NationalCarFerry => "nationalCarFerry",
        RailReplacementBus => "railReplacementBus",
        RegionalCarFerry => "regionalCarFerry",
        TouristRailway => "touristRailway",
        AirportLinkBus => "airportLinkBus",
        CityTram => "cityTram",
        #[serde(other)]
        Unknown => "unknown",
    }
}

impl From<TransportMode> for LegMode {
    fn from(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Air => LegMode::Air,
            TransportMode::Bus => LegMode::Bus,
            TransportMode::Cableway => LegMode::Cableway,
            TransportMode::Coach => LegMode::Coach,
            TransportMode::Funicular => LegMode::Funicular,
            TransportMode::Lift => LegMode::Lift,
            TransportMode::Metro => LegMode::Metro,
            TransportMode::Rail => LegMode::Rail,
            TransportMode::Tram => LegMode::Tram,
            TransportMode::Unknown => LegMode::Unknown,
            TransportMode::Water => LegMode::Water,
        }
    }
}
