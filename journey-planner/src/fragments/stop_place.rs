//! Stop place fragment.
//!
//! Situations are selected both on the stop place and on each quay; the
//! shared definition is emitted once.

use super::Fragment;
use super::quay::QUAY;
use super::situation::SITUATION;

pub static STOP_PLACE: Fragment = Fragment {
    name: "stopPlaceFields",
    text: "fragment stopPlaceFields on StopPlace {
    id
    name
    description
    latitude
    longitude
    wheelchairBoarding
    weighting
    transportMode
    transportSubmode
    quays {
        ...quayFields
    }
    situations {
        ...situationFields
    }
}
",
    dependencies: &[&QUAY, &SITUATION],
};
