//! GraphQL fragments for each JourneyPlanner entity.
//!
//! Every entity declares one [`Fragment`]: its name, its GraphQL text, and
//! the fragments its text spreads. A query document must define each
//! fragment it uses exactly once, even when several entities in the
//! selection tree nest the same one (`Notice` appears under `Line`,
//! `JourneyPattern`, `ServiceJourney` and `EstimatedCall`). [`FragmentSet`]
//! walks the dependency graph once and keeps the first occurrence of each
//! name, so entity modules only list their direct dependencies.

mod estimated_call;
mod line;
mod notice;
mod quay;
mod service_journey;
mod situation;
mod stop_place;

use std::collections::HashSet;
use std::fmt;

pub use estimated_call::ESTIMATED_CALL;
pub use line::LINE;
pub use notice::NOTICE;
pub use quay::QUAY;
pub use service_journey::SERVICE_JOURNEY;
pub use situation::SITUATION;
pub use stop_place::STOP_PLACE;

/// Every entity fragment the crate defines.
pub static ENTITY_FRAGMENTS: &[&Fragment] = &[
    &NOTICE,
    &LINE,
    &SITUATION,
    &QUAY,
    &STOP_PLACE,
    &SERVICE_JOURNEY,
    &ESTIMATED_CALL,
];

/// A named GraphQL fragment and the fragments it spreads.
///
/// Names are unique across the schema and each name has exactly one text,
/// so a fragment is identified by its name alone.
#[derive(PartialEq, Eq)]
pub struct Fragment {
    name: &'static str,
    text: &'static str,
    dependencies: &'static [&'static Fragment],
}

impl Fragment {
    /// The name used in `fragment <name> on ...` and `...<name>`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The full fragment definition.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Fragments spread directly by this one, in declaration order.
    pub fn dependencies(&self) -> &'static [&'static Fragment] {
        self.dependencies
    }

    /// Names spread anywhere in this fragment's text.
    pub fn spreads(&self) -> impl Iterator<Item = &'static str> {
        spread_names(self.text)
    }

    /// This fragment followed by everything it needs, each exactly once.
    pub fn fragments(&'static self) -> FragmentSet {
        FragmentSet::resolve([self])
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({})", self.name)
    }
}

/// An ordered list of fragments with no repeated names.
///
/// Order is deterministic: each root, then its dependencies depth-first in
/// declaration order, skipping any name already present. This is the same
/// list as concatenating `[own, ...deps' lists]` and dropping later
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    fragments: Vec<&'static Fragment>,
}

impl FragmentSet {
    /// Flatten the dependency graphs under `roots` into one deduplicated set.
    pub fn resolve(roots: impl IntoIterator<Item = &'static Fragment>) -> Self {
        let mut seen = HashSet::new();
        let mut fragments = Vec::new();

        for root in roots {
            collect(root, &mut seen, &mut fragments);
        }

        Self { fragments }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Fragment> + '_ {
        self.fragments.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(Fragment::name)
    }

    pub fn texts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(Fragment::text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// Spread names used in the set that no fragment in the set defines.
    ///
    /// Empty for any set built by [`FragmentSet::resolve`].
    pub fn unresolved(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for name in self.iter().flat_map(Fragment::spreads) {
            if !self.contains(name) && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }
}

fn collect(
    fragment: &'static Fragment,
    seen: &mut HashSet<&'static str>,
    out: &mut Vec<&'static Fragment>,
) {
    if !seen.insert(fragment.name) {
        return;
    }
    out.push(fragment);
    for dependency in fragment.dependencies {
        collect(dependency, seen, out);
    }
}

/// Names of the fragment spreads (`...name`) in a GraphQL text.
///
/// Inline fragments (`... on Type`) are not spreads and are skipped.
pub fn spread_names(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices("...").filter_map(move |(idx, _)| {
        let rest = &text[idx + 3..];
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        let name = &rest[..end];
        (!name.is_empty() && name != "on").then_some(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &FragmentSet) -> Vec<&'static str> {
        set.names().collect()
    }

    /// Every fragment reachable from `root`, counted by name.
    fn reachable(root: &'static Fragment, acc: &mut HashSet<&'static str>) {
        acc.insert(root.name);
        for dep in root.dependencies {
            reachable(dep, acc);
        }
    }

    #[test]
    fn leaf_fragment_resolves_to_itself() {
        assert_eq!(names(&NOTICE.fragments()), vec!["noticeFields"]);
    }

    #[test]
    fn own_fragment_comes_first() {
        for fragment in ENTITY_FRAGMENTS {
            let set = fragment.fragments();
            assert_eq!(set.iter().next(), Some(*fragment));
        }
    }

    #[test]
    fn service_journey_deduplicates_notice() {
        // Notice is nested directly and again through Line
        let set = SERVICE_JOURNEY.fragments();
        assert_eq!(
            names(&set),
            vec!["serviceJourneyFields", "noticeFields", "lineFields"]
        );
    }

    #[test]
    fn estimated_call_deduplicates_across_paths() {
        let set = ESTIMATED_CALL.fragments();
        assert_eq!(
            names(&set),
            vec![
                "estimatedCallFields",
                "noticeFields",
                "quayFields",
                "situationFields",
                "serviceJourneyFields",
                "lineFields",
            ]
        );
    }

    #[test]
    fn every_entity_has_each_fragment_exactly_once() {
        for fragment in ENTITY_FRAGMENTS {
            let set = fragment.fragments();

            let mut distinct = HashSet::new();
            reachable(fragment, &mut distinct);
            assert_eq!(set.fragments.len(), distinct.len(), "{fragment:?}");

            let texts: HashSet<_> = set.texts().collect();
            assert_eq!(texts.len(), set.fragments.len(), "{fragment:?} has a repeated text");
        }
    }

    #[test]
    fn every_entity_set_is_complete() {
        for fragment in ENTITY_FRAGMENTS {
            let set = fragment.fragments();
            assert!(set.unresolved().is_empty(), "{fragment:?}: {:?}", set.unresolved());
        }
    }

    #[test]
    fn texts_declare_their_own_name() {
        for fragment in ENTITY_FRAGMENTS {
            let header = format!("fragment {} on ", fragment.name());
            assert!(
                fragment.text().trim_start().starts_with(&header),
                "{fragment:?} does not start with {header:?}"
            );
        }
    }

    #[test]
    fn spreads_match_declared_dependencies() {
        for fragment in ENTITY_FRAGMENTS {
            let spreads: HashSet<_> = fragment.spreads().collect();
            let deps: HashSet<_> = fragment.dependencies().iter().map(|d| d.name()).collect();
            assert_eq!(spreads, deps, "{fragment:?}");
        }
    }

    #[test]
    fn names_are_globally_unique() {
        let names: HashSet<_> = ENTITY_FRAGMENTS.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), ENTITY_FRAGMENTS.len());
    }

    #[test]
    fn resolve_merges_several_roots() {
        let set = FragmentSet::resolve([&STOP_PLACE, &SERVICE_JOURNEY]);
        assert_eq!(
            names(&set),
            vec![
                "stopPlaceFields",
                "quayFields",
                "situationFields",
                "serviceJourneyFields",
                "noticeFields",
                "lineFields",
            ]
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        assert_eq!(ESTIMATED_CALL.fragments(), ESTIMATED_CALL.fragments());
    }

    #[test]
    fn unresolved_reports_missing_definitions() {
        let set = FragmentSet {
            fragments: vec![&SERVICE_JOURNEY],
        };
        assert_eq!(set.unresolved(), vec!["lineFields", "noticeFields"]);
    }

    #[test]
    fn spread_names_skip_inline_fragments() {
        let text = "{ ... on Quay { id } ...quayFields ...on Line { id } ...a_b1 }";
        let spreads: Vec<_> = spread_names(text).collect();
        assert_eq!(spreads, vec!["quayFields", "a_b1"]);
    }

    #[test]
    fn every_dependency_is_spread_by_its_dependent() {
        for fragment in ENTITY_FRAGMENTS {
            for dependency in fragment.dependencies() {
                assert!(
                    fragment.spreads().any(|s| s == dependency.name()),
                    "{fragment:?} lists {dependency:?} but never spreads it"
                );
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Build a random DAG of leaked fragments. Node `i` may only depend on
    /// nodes with a smaller index, which keeps the graph acyclic.
    fn build_dag(edges: &[Vec<usize>]) -> Vec<&'static Fragment> {
        let mut nodes: Vec<&'static Fragment> = Vec::new();
        for (i, deps) in edges.iter().enumerate() {
            let dependencies: Vec<&'static Fragment> = deps
                .iter()
                .filter(|&&d| d < i)
                .map(|&d| nodes[d])
                .collect();
            let name: &'static str = Box::leak(format!("f{i}").into_boxed_str());
            let spreads: String = dependencies.iter().map(|d| format!(" ...{}", d.name)).collect();
            let text: &'static str =
                Box::leak(format!("fragment {name} on T {{{spreads} }}").into_boxed_str());
            nodes.push(Box::leak(Box::new(Fragment {
                name,
                text,
                dependencies: Box::leak(dependencies.into_boxed_slice()),
            })));
        }
        nodes
    }

    /// Own text first, then each dependency's list, later duplicates dropped.
    fn concat_then_dedup(fragment: &'static Fragment) -> Vec<&'static str> {
        let mut all = vec![fragment.text];
        for dep in fragment.dependencies {
            all.extend(concat_then_dedup(dep));
        }
        let mut seen = HashSet::new();
        all.retain(|t| seen.insert(*t));
        all
    }

    fn dag_edges() -> impl Strategy<Value = Vec<Vec<usize>>> {
        prop::collection::vec(prop::collection::vec(0usize..12, 0..4), 1..12)
    }

    proptest! {
        #[test]
        fn resolve_equals_concat_then_dedup(edges in dag_edges()) {
            let nodes = build_dag(&edges);
            let root = *nodes.last().unwrap();

            let resolved: Vec<_> = root.fragments().texts().collect();
            prop_assert_eq!(resolved, concat_then_dedup(root));
        }

        #[test]
        fn resolved_names_are_unique(edges in dag_edges()) {
            let nodes = build_dag(&edges);
            let set = nodes.last().unwrap().fragments();

            let distinct: HashSet<_> = set.names().collect();
            prop_assert_eq!(distinct.len(), set.fragments.len());
        }

        #[test]
        fn resolved_sets_are_complete(edges in dag_edges()) {
            let nodes = build_dag(&edges);
            let set = nodes.last().unwrap().fragments();
            prop_assert!(set.unresolved().is_empty());
        }

        #[test]
        fn resolving_every_node_covers_the_graph(edges in dag_edges()) {
            let nodes = build_dag(&edges);
            let set = FragmentSet::resolve(nodes.iter().copied());
            prop_assert_eq!(set.fragments.len(), nodes.len());
        }
    }
}
