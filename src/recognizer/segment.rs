use super::state::{Graph, StateId};

/// Specificity rank of a segment. Later variants rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum SegmentKind {
    Star = 1,
    Dynamic = 2,
    Static = 3,
}

/// One `/`-delimited token of a route pattern.
#[derive(Debug, Clone)]
pub(super) enum Segment {
    Static { value: Box<str>, case_sensitive: bool },
    Dynamic { name: Box<str>, optional: bool },
    Star { name: Box<str> },
}

impl Segment {
    pub(super) fn kind(&self) -> SegmentKind {
        match self {
            Self::Static { .. } => SegmentKind::Static,
            Self::Dynamic { .. } => SegmentKind::Dynamic,
            Self::Star { .. } => SegmentKind::Star,
        }
    }

    /// Parameter name captured by this segment, if any.
    pub(super) fn name(&self) -> Option<&str> {
        match self {
            Self::Static { .. } => None,
            Self::Dynamic { name, .. } | Self::Star { name } => Some(&**name),
        }
    }

    /// Whether two declarations at the same graph position collapse into one State.
    pub(super) fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Static {
                    value: a,
                    case_sensitive: sa,
                },
                Self::Static {
                    value: b,
                    case_sensitive: sb,
                },
            ) => match (*sa, *sb) {
                (true, true) => a == b,
                (false, false) => a.to_lowercase() == b.to_lowercase(),
                _ => false,
            },
            (
                Self::Dynamic {
                    name: a,
                    optional: oa,
                },
                Self::Dynamic {
                    name: b,
                    optional: ob,
                },
            ) => a == b && oa == ob,
            (Self::Star { name: a }, Self::Star { name: b }) => a == b,
            _ => false,
        }
    }

    /// Extends the graph from `tail` with the States of this segment and
    /// returns the new tail.
    pub(super) fn append_to(&self, graph: &mut Graph, mut tail: StateId) -> StateId {
        match self {
            Self::Static {
                value,
                case_sensitive: true,
            } => {
                let mut buf = [0u8; 4];
                for ch in value.chars() {
                    tail = graph.append(tail, Some(self), ch.encode_utf8(&mut buf));
                }
                tail
            }
            Self::Static {
                value,
                case_sensitive: false,
            } => {
                for ch in value.chars() {
                    let accept: String = ch.to_uppercase().chain(ch.to_lowercase()).collect();
                    tail = graph.append(tail, Some(self), &accept);
                }
                tail
            }
            // the separator is the one character a named parameter refuses
            Self::Dynamic { .. } => graph.append(tail, Some(self), "/"),
            Self::Star { .. } => graph.append(tail, Some(self), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Segment, SegmentKind};

    fn stat(value: &str, case_sensitive: bool) -> Segment {
        Segment::Static {
            value: value.into(),
            case_sensitive,
        }
    }

    #[test]
    fn kind_ranking() {
        assert!(SegmentKind::Static > SegmentKind::Dynamic);
        assert!(SegmentKind::Dynamic > SegmentKind::Star);
        assert_eq!(SegmentKind::Static as u8, 3);
    }

    #[test]
    fn static_equality() {
        assert!(stat("About", false).equals(&stat("about", false)));
        assert!(!stat("About", true).equals(&stat("about", true)));
        assert!(!stat("about", true).equals(&stat("about", false)));
        assert!(!stat("about", false).equals(&Segment::Star {
            name: "about".into()
        }));
    }

    #[test]
    fn dynamic_equality() {
        let id = Segment::Dynamic {
            name: "id".into(),
            optional: false,
        };
        let opt = Segment::Dynamic {
            name: "id".into(),
            optional: true,
        };
        assert!(id.equals(&id.clone()));
        assert!(!id.equals(&opt));
        assert_eq!(opt.name(), Some("id"));
    }
}
