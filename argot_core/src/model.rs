/// The kind of an argument, which determines how the parser matches it against the input tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A by-name flag which takes no value (ex: `--verbose`).
    Switch,
    /// A by-name argument which takes a value (ex: `--output out.txt` or `--output=out.txt`).
    Valued,
    /// An argument matched by position.
    Positional,
    /// A flag which only applies when it is the sole token (ex: `--help`, `--version`).
    Exclusive,
    /// The argument whose value selects a sub-command.
    SubcommandSelector,
}

impl Kind {
    pub(crate) fn default_bound(&self) -> Bound {
        match self {
            Kind::Switch | Kind::Valued | Kind::Exclusive => Bound::Range(0, 1),
            Kind::Positional | Kind::SubcommandSelector => Bound::Range(1, 1),
        }
    }
}

/// The cardinality of an argument: how many times it may occur during a single parse.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// `N`: Precisely `N` occurrences.
    Precisely(usize),
    /// `*`: Any number of occurrences, including `0`.
    Any,
    /// `+`: At least one occurrence.
    AtLeastOne,
    /// At most `N` occurrences.
    AtMost(usize),
    /// At least `N` occurrences.
    AtLeast(usize),
    /// Between `min` and `max` occurrences (inclusive).
    Between(usize, usize),
}

impl std::fmt::Display for Nargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Bound {
    Range(usize, usize),
    Lower(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct InvalidBound {
    pub min: usize,
    pub max: usize,
}

impl TryFrom<Nargs> for Bound {
    type Error = InvalidBound;

    fn try_from(value: Nargs) -> Result<Self, Self::Error> {
        match value {
            Nargs::Precisely(n) => Ok(Bound::Range(n, n)),
            Nargs::Any => Ok(Bound::Lower(0)),
            Nargs::AtLeastOne => Ok(Bound::Lower(1)),
            Nargs::AtMost(n) => Ok(Bound::Range(0, n)),
            Nargs::AtLeast(n) => Ok(Bound::Lower(n)),
            Nargs::Between(min, max) if min <= max => Ok(Bound::Range(min, max)),
            Nargs::Between(min, max) => Err(InvalidBound { min, max }),
        }
    }
}

impl Bound {
    pub(crate) fn min(&self) -> usize {
        match self {
            Bound::Range(min, _) => *min,
            Bound::Lower(min) => *min,
        }
    }

    /// `None` represents an unlimited maximum.
    pub(crate) fn max(&self) -> Option<usize> {
        match self {
            Bound::Range(_, max) => Some(*max),
            Bound::Lower(_) => None,
        }
    }

    /// Whether another occurrence may be appended on top of `provided`.
    pub(crate) fn is_open(&self, provided: usize) -> bool {
        match self {
            Bound::Range(_, max) => provided < *max,
            Bound::Lower(_) => true,
        }
    }

    pub(crate) fn is_repeatable(&self) -> bool {
        self.max().map_or(true, |max| max > 1)
    }
}
