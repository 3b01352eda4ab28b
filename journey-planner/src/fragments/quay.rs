//! Quay fragment.

use super::Fragment;
use super::situation::SITUATION;

pub static QUAY: Fragment = Fragment {
    name: "quayFields",
    text: "fragment quayFields on Quay {
    id
    name
    description
    publicCode
    latitude
    longitude
    situations {
        ...situationFields
    }
}
",
    dependencies: &[&SITUATION],
};
