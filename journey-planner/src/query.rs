//! Query document composition.
//!
//! A document is the operation definition followed by every fragment its
//! selection needs, each defined once. Documents for the client's
//! operations are composed on first use and then shared.

use std::sync::OnceLock;

use crate::fragments::{
    ESTIMATED_CALL, Fragment, FragmentSet, LINE, QUAY, SERVICE_JOURNEY, STOP_PLACE, spread_names,
};

/// Assemble a `query` document from its parts.
///
/// `variables` are the operation's variable definitions without the
/// surrounding parentheses (empty for none). Every spread in `selection`
/// must name a fragment in `fragments`.
pub fn compose(name: &str, variables: &str, selection: &str, fragments: &FragmentSet) -> String {
    debug_assert!(
        spread_names(selection).all(|spread| fragments.contains(spread)),
        "selection of {name} spreads a fragment that is not in the set"
    );
    debug_assert!(fragments.unresolved().is_empty());

    let mut document = if variables.is_empty() {
        format!("query {name} {{\n    {selection}\n}}\n")
    } else {
        format!("query {name}({variables}) {{\n    {selection}\n}}\n")
    };

    for text in fragments.texts() {
        document.push('\n');
        document.push_str(text);
    }

    document
}

/// A named query the client issues, and where its result lives.
pub struct Operation {
    name: &'static str,
    variables: &'static str,
    selection: &'static str,
    roots: &'static [&'static Fragment],
    path: &'static [&'static str],
    document: OnceLock<String>,
}

impl Operation {
    /// The GraphQL operation name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Path from `data` to the operation's payload.
    pub fn path(&self) -> &'static [&'static str] {
        self.path
    }

    /// Fragments the document defines.
    pub fn fragments(&self) -> FragmentSet {
        FragmentSet::resolve(self.roots.iter().copied())
    }

    /// The full document, composed once per process.
    pub fn document(&self) -> &str {
        self.document.get_or_init(|| {
            compose(self.name, self.variables, self.selection, &self.fragments())
        })
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish()
    }
}

pub static STOP_PLACE_BY_ID: Operation = Operation {
    name: "StopPlace",
    variables: "$id: String!",
    selection: "stopPlace(id: $id) {
        ...stopPlaceFields
    }",
    roots: &[&STOP_PLACE],
    path: &["stopPlace"],
    document: OnceLock::new(),
};

pub static STOP_PLACES_BY_BBOX: Operation = Operation {
    name: "StopPlacesByBbox",
    variables: "$minimumLatitude: Float, $minimumLongitude: Float, \
                $maximumLatitude: Float, $maximumLongitude: Float",
    selection: "stopPlacesByBbox(
        minimumLatitude: $minimumLatitude
        minimumLongitude: $minimumLongitude
        maximumLatitude: $maximumLatitude
        maximumLongitude: $maximumLongitude
    ) {
        ...stopPlaceFields
    }",
    roots: &[&STOP_PLACE],
    path: &["stopPlacesByBbox"],
    document: OnceLock::new(),
};

pub static QUAYS_FOR_STOP_PLACE: Operation = Operation {
    name: "QuaysForStopPlace",
    variables: "$id: String!",
    selection: "stopPlace(id: $id) {
        id
        quays {
            ...quayFields
        }
    }",
    roots: &[&QUAY],
    path: &["stopPlace"],
    document: OnceLock::new(),
};

pub static SERVICE_JOURNEY_BY_ID: Operation = Operation {
    name: "ServiceJourney",
    variables: "$id: String!",
    selection: "serviceJourney(id: $id) {
        ...serviceJourneyFields
    }",
    roots: &[&SERVICE_JOURNEY],
    path: &["serviceJourney"],
    document: OnceLock::new(),
};

pub static LINE_BY_ID: Operation = Operation {
    name: "Line",
    variables: "$id: ID!",
    selection: "line(id: $id) {
        ...lineFields
    }",
    roots: &[&LINE],
    path: &["line"],
    document: OnceLock::new(),
};

pub static DEPARTURES_FOR_SERVICE_JOURNEY: Operation = Operation {
    name: "DeparturesForServiceJourney",
    variables: "$id: String!, $date: Date",
    selection: "serviceJourney(id: $id) {
        estimatedCalls(date: $date) {
            ...estimatedCallFields
        }
    }",
    roots: &[&ESTIMATED_CALL],
    path: &["serviceJourney", "estimatedCalls"],
    document: OnceLock::new(),
};

/// Every operation the client issues.
pub static OPERATIONS: &[&Operation] = &[
    &STOP_PLACE_BY_ID,
    &STOP_PLACES_BY_BBOX,
    &QUAYS_FOR_STOP_PLACE,
    &SERVICE_JOURNEY_BY_ID,
    &LINE_BY_ID,
    &DEPARTURES_FOR_SERVICE_JOURNEY,
];
