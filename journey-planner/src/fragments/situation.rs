//! Situation (disruption message) fragment.

use super::Fragment;

pub static SITUATION: Fragment = Fragment {
    name: "situationFields",
    text: "fragment situationFields on PtSituationElement {
    situationNumber
    summary {
        value
        language
    }
    description {
        value
        language
    }
    advice {
        value
        language
    }
    reportType
    validityPeriod {
        startTime
        endTime
    }
}
",
    dependencies: &[],
};
