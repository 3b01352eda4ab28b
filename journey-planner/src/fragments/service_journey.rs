//! Service journey fragment.

use super::Fragment;
use super::line::LINE;
use super::notice::NOTICE;

pub static SERVICE_JOURNEY: Fragment = Fragment {
    name: "serviceJourneyFields",
    text: "fragment serviceJourneyFields on ServiceJourney {
    id
    journeyPattern {
        line {
            ...lineFields
        }
        notices {
            ...noticeFields
        }
    }
    notices {
        ...noticeFields
    }
    publicCode
    transportSubmode
}
",
    dependencies: &[&NOTICE, &LINE],
};
