use super::segment::{Segment, SegmentKind};

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct StateId(pub(super) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct EndpointId(pub(super) usize);

/// One node of the transition graph: "one more character consumed".
#[derive(Debug)]
pub(super) struct State {
    prev: Option<StateId>,
    segment: Option<Segment>,
    value: Box<str>,
    next: Vec<StateId>,
    endpoint: Option<EndpointId>,

    is_separator: bool,
    is_dynamic: bool,
    is_optional: bool,
    length: usize,
}

impl State {
    fn new(prev: Option<(StateId, &State)>, segment: Option<Segment>, value: &str) -> Self {
        let prev_len = prev.map_or(0, |(_, s)| s.length);
        let (is_separator, is_dynamic, is_optional, length) = match &segment {
            Some(Segment::Dynamic { optional, .. }) => (false, true, *optional, prev_len + 1),
            Some(Segment::Star { .. }) => (false, true, false, prev_len + 1),
            Some(Segment::Static { .. }) => (false, false, false, prev_len + 1),
            None => (true, false, false, prev_len),
        };
        Self {
            prev: prev.map(|(id, _)| id),
            segment,
            value: value.into(),
            next: Vec::new(),
            endpoint: None,
            is_separator,
            is_dynamic,
            is_optional,
            length,
        }
    }

    pub(super) fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    pub(super) fn kind(&self) -> Option<SegmentKind> {
        self.segment.as_ref().map(Segment::kind)
    }

    pub(super) fn param_name(&self) -> Option<&str> {
        self.segment.as_ref().and_then(Segment::name)
    }

    pub(super) fn next(&self) -> &[StateId] {
        &self.next
    }

    pub(super) fn endpoint(&self) -> Option<EndpointId> {
        self.endpoint
    }

    pub(super) fn is_separator(&self) -> bool {
        self.is_separator
    }

    pub(super) fn is_dynamic(&self) -> bool {
        self.is_dynamic
    }

    pub(super) fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Number of segment characters on the path from the root.
    pub(super) fn length(&self) -> usize {
        self.length
    }

    pub(super) fn is_match(&self, ch: char) -> bool {
        match self.segment {
            Some(Segment::Dynamic { .. }) => !self.value.contains(ch),
            Some(Segment::Star { .. }) => true,
            Some(Segment::Static { .. }) | None => self.value.contains(ch),
        }
    }
}

/// Append-only arena of States rooted at a synthetic root.
#[derive(Debug)]
pub(super) struct Graph {
    states: Vec<State>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub(super) const ROOT: StateId = StateId(0);

    pub(super) fn new() -> Self {
        Self {
            states: vec![State::new(None, None, "")],
        }
    }

    pub(super) fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub(super) fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns the successor of `tail` for `segment`/`value`, creating it if
    /// no equal successor exists yet. `None` appends a bare separator.
    pub(super) fn append(
        &mut self,
        tail: StateId,
        segment: Option<&Segment>,
        value: &str,
    ) -> StateId {
        let existing = self.states[tail.0].next.iter().copied().find(|&id| {
            let state = &self.states[id.0];
            match (segment, &state.segment) {
                (None, None) => &*state.value == value,
                (Some(a), Some(b)) => a.equals(b),
                _ => false,
            }
        });
        if let Some(id) = existing {
            return id;
        }

        let id = StateId(self.states.len());
        let state = State::new(Some((tail, &self.states[tail.0])), segment.cloned(), value);
        self.states.push(state);
        self.states[tail.0].next.push(id);
        id
    }

    /// States that receive an endpoint attached at `terminal`. A trailing
    /// optional or star segment also terminates at its separator and at the
    /// State before that separator.
    pub(super) fn endpoint_targets(&self, terminal: StateId) -> SmallVec<[StateId; 4]> {
        let mut targets = SmallVec::new();
        let mut id = terminal;
        loop {
            targets.push(id);
            let state = self.state(id);
            let is_star = matches!(state.segment, Some(Segment::Star { .. }));
            if !state.is_optional && !is_star {
                break;
            }
            let prev = match state.prev {
                Some(prev) => prev,
                None => break,
            };
            targets.push(prev);
            let sep = self.state(prev);
            assert!(sep.is_separator, "omissible segment must follow a separator");
            match sep.prev {
                Some(before) => id = before,
                None => break,
            }
        }
        targets
    }

    pub(super) fn set_endpoint(&mut self, id: StateId, endpoint: EndpointId) {
        self.states[id.0].endpoint = Some(endpoint);
    }
}
