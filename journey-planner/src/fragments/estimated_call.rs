//! Estimated call fragment.

use super::Fragment;
use super::notice::NOTICE;
use super::quay::QUAY;
use super::service_journey::SERVICE_JOURNEY;
use super::situation::SITUATION;

pub static ESTIMATED_CALL: Fragment = Fragment {
    name: "estimatedCallFields",
    text: "fragment estimatedCallFields on EstimatedCall {
    actualArrivalTime
    actualDepartureTime
    aimedArrivalTime
    aimedDepartureTime
    cancellation
    date
    destinationDisplay {
        frontText
    }
    expectedArrivalTime
    expectedDepartureTime
    forAlighting
    forBoarding
    notices {
        ...noticeFields
    }
    quay {
        ...quayFields
    }
    realtime
    requestStop
    serviceJourney {
        ...serviceJourneyFields
    }
    situations {
        ...situationFields
    }
}
",
    dependencies: &[&NOTICE, &QUAY, &SERVICE_JOURNEY, &SITUATION],
};
