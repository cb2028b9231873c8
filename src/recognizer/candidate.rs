use super::endpoint::Endpoint;
use super::params::Params;
use super::state::{EndpointId, Graph, StateId};

use std::cmp::Ordering;
use std::mem;

use smallvec::SmallVec;

/// States bypassed by one skipped optional segment.
type SkipEntry = SmallVec<[StateId; 4]>;

type Matches = SmallVec<[(StateId, Option<SkipEntry>); 4]>;

/// One in-progress attempt to match the input against the graph.
#[derive(Debug, Clone)]
pub(super) struct Candidate {
    /// Consumed characters paired with the State each one moved into.
    trail: Vec<(char, StateId)>,
    skipped: Vec<SkipEntry>,
    head: StateId,
    endpoint: Option<EndpointId>,
}

impl Candidate {
    fn new(graph: &Graph, head: StateId) -> Self {
        Self {
            trail: Vec::new(),
            skipped: Vec::new(),
            head,
            endpoint: graph.state(head).endpoint(),
        }
    }

    pub(super) fn endpoint(&self) -> Option<EndpointId> {
        self.endpoint
    }

    /// Consumes `ch`. Ambiguous transitions beyond the first are pushed to
    /// `forks`. Returns `false` when nothing matched.
    fn advance(&mut self, ch: char, graph: &Graph, forks: &mut Vec<Candidate>) -> bool {
        let head = graph.state(self.head);
        let mut matches = Matches::new();

        if head.is_dynamic() {
            self.collect(graph, ch, self.head, None, &mut matches);
        }
        for &next in head.next() {
            self.collect(graph, ch, next, None, &mut matches);
        }

        let mut iter = matches.into_iter();
        let (first, first_skip) = match iter.next() {
            Some(m) => m,
            None => return false,
        };
        for (target, skip) in iter {
            let mut fork = self.clone();
            fork.push(graph, ch, target, skip);
            forks.push(fork);
        }
        self.push(graph, ch, first, first_skip);
        true
    }

    fn collect(
        &self,
        graph: &Graph,
        ch: char,
        target: StateId,
        skip: Option<&SkipEntry>,
        matches: &mut Matches,
    ) {
        let state = graph.state(target);
        if state.is_match(ch) {
            matches.push((target, skip.cloned()));
        }

        // an optional segment directly after a bare separator may be bypassed
        if graph.state(self.head).segment().is_none()
            && state.is_optional()
            && !state.next().is_empty()
        {
            assert_eq!(
                state.next().len(),
                1,
                "optional segment must be followed by a single separator"
            );
            let sep = state.next()[0];
            assert!(
                graph.state(sep).is_separator(),
                "optional segment must be followed by a separator"
            );

            let mut entry = skip.cloned().unwrap_or_default();
            entry.push(target);
            entry.push(sep);
            for &next in graph.state(sep).next() {
                self.collect(graph, ch, next, Some(&entry), matches);
            }
        }
    }

    fn push(&mut self, graph: &Graph, ch: char, target: StateId, skip: Option<SkipEntry>) {
        self.trail.push((ch, target));
        self.head = target;
        if let Some(endpoint) = graph.state(target).endpoint() {
            self.endpoint = Some(endpoint);
        }
        if let Some(entry) = skip {
            self.skipped.push(entry);
        }
    }

    /// Records trailing optional segments reachable from the head without
    /// consuming input.
    fn finalize(&mut self, graph: &Graph) {
        let mut walked = SkipEntry::new();
        collect_skipped(graph, self.head, &mut walked, &mut self.skipped);
    }

    pub(super) fn params<H>(&self, graph: &Graph, endpoint: &Endpoint<H>) -> Params {
        let mut params = Params::declare(endpoint.params());
        for &(ch, id) in &self.trail {
            let state = graph.state(id);
            if !state.is_dynamic() {
                continue;
            }
            if let Some(name) = state.param_name() {
                params.push_char(name, ch);
            }
        }
        params
    }

    /// Ranking order: `Less` means `self` is the better match.
    fn compare(&self, other: &Self, graph: &Graph) -> Ordering {
        let a = &self.trail;
        let b = &other.trail;
        let end = a.len().max(b.len());

        let (mut ia, mut ib) = (0, 0);
        while ia < end {
            let mut ka = match a.get(ia) {
                Some(&(_, id)) => graph.state(id).kind(),
                None => return Ordering::Greater,
            };
            let mut kb = match b.get(ib) {
                Some(&(_, id)) => graph.state(id).kind(),
                None => return Ordering::Less,
            };

            match (ka, kb) {
                (None, None) => {
                    ia += 1;
                    ib += 1;
                    continue;
                }
                (None, Some(_)) => {
                    ia += 1;
                    ka = match a.get(ia) {
                        Some(&(_, id)) => graph.state(id).kind(),
                        None => return Ordering::Greater,
                    };
                }
                (Some(_), None) => {
                    ib += 1;
                    kb = match b.get(ib) {
                        Some(&(_, id)) => graph.state(id).kind(),
                        None => return Ordering::Less,
                    };
                }
                (Some(_), Some(_)) => {}
            }

            match kb.cmp(&ka) {
                Ordering::Equal => {}
                ord => return ord,
            }
            ia += 1;
            ib += 1;
        }

        match other.skipped.len().cmp(&self.skipped.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (x, y) in self.skipped.iter().zip(other.skipped.iter()) {
            match y.len().cmp(&x.len()) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

fn collect_skipped(graph: &Graph, id: StateId, walked: &mut SkipEntry, out: &mut Vec<SkipEntry>) {
    let next = graph.state(id).next();
    if let &[only] = next {
        if graph.state(only).segment().is_none() {
            walked.push(only);
            collect_skipped(graph, only, walked, out);
            return;
        }
    }

    for &candidate in next {
        let state = graph.state(candidate);
        if state.is_optional() && state.endpoint().is_some() {
            let mut entry = mem::take(walked);
            entry.push(candidate);
            out.push(entry);
            for &after in state.next() {
                let mut walked = SkipEntry::new();
                if graph.state(after).is_separator() {
                    walked.push(after);
                }
                collect_skipped(graph, after, &mut walked, out);
            }
            break;
        }
    }
}

/// Pool of live Candidates for one recognize call.
#[derive(Debug)]
pub(super) struct RecognizeResult {
    candidates: Vec<Candidate>,
}

impl RecognizeResult {
    pub(super) fn new(graph: &Graph) -> Self {
        Self {
            candidates: vec![Candidate::new(graph, Graph::ROOT)],
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub(super) fn advance(&mut self, ch: char, graph: &Graph) {
        let mut forks = Vec::new();
        self.candidates
            .retain_mut(|candidate| candidate.advance(ch, graph, &mut forks));
        for fork in forks {
            self.add(fork);
        }
    }

    fn add(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Best full match among the surviving candidates. Earlier candidates win ties.
    pub(super) fn into_solution(self, graph: &Graph) -> Option<Candidate> {
        self.candidates
            .into_iter()
            .filter(|c| graph.state(c.head).endpoint().is_some())
            .map(|mut c| {
                c.finalize(graph);
                c
            })
            .reduce(|best, c| match c.compare(&best, graph) {
                Ordering::Less => c,
                _ => best,
            })
    }
}
