use std::fmt;
use std::ops::Add;

use serde::Serialize;

/// A single point in source text.
///
/// `line` and `column` are 1-based, `offset` is the 0-based character index.
/// Ordering decisions only ever look at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The earlier of two positions. Ties resolve to `other`.
    pub fn min(self, other: Position) -> Position {
        if self.offset < other.offset {
            self
        } else {
            other
        }
    }

    /// The later of two positions. Ties resolve to `other`.
    pub fn max(self, other: Position) -> Position {
        if self.offset > other.offset {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span between two positions, `start.offset <= end.offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "range start {} is past its end {}",
            start.offset,
            end.offset
        );
        Self { start, end }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Where a token (or anything built from tokens) sits in the source:
/// either a single point or a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    Position(Position),
    Range(Range),
}

impl Location {
    /// Merge two locations into the smallest location covering both.
    ///
    /// Combining a location with itself returns it unchanged. Any other
    /// combination yields a `Range` from the earliest start to the latest end.
    pub fn combine(self, other: Location) -> Location {
        if self == other {
            return self;
        }

        match (self, other) {
            (Location::Position(a), Location::Position(b)) => Range::new(a.min(b), a.max(b)).into(),
            (Location::Position(p), Location::Range(r))
            | (Location::Range(r), Location::Position(p)) => {
                Range::new(p.min(r.start), p.max(r.end)).into()
            }
            (Location::Range(a), Location::Range(b)) => {
                Range::new(a.start.min(b.start), a.end.max(b.end)).into()
            }
        }
    }

    pub fn start(&self) -> Position {
        match self {
            Location::Position(p) => *p,
            Location::Range(r) => r.start,
        }
    }

    pub fn end(&self) -> Position {
        match self {
            Location::Position(p) => *p,
            Location::Range(r) => r.end,
        }
    }
}

impl From<Position> for Location {
    fn from(position: Position) -> Self {
        Location::Position(position)
    }
}

impl From<Range> for Location {
    fn from(range: Range) -> Self {
        Location::Range(range)
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, other: Location) -> Location {
        self.combine(other)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Position(p) => p.fmt(f),
            Location::Range(r) => r.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Positions on a single line, so line/column stay consistent with offset.
    fn at(offset: usize) -> Position {
        Position::new(1, offset + 1, offset)
    }

    fn span(start: usize, end: usize) -> Location {
        Range::new(at(start), at(end)).into()
    }

    #[test]
    fn test_min_max_by_offset() {
        assert_eq!(at(2).min(at(5)), at(2));
        assert_eq!(at(5).min(at(2)), at(2));
        assert_eq!(at(2).max(at(5)), at(5));
        assert_eq!(at(5).max(at(2)), at(5));
    }

    #[test]
    fn test_min_max_ignore_line_and_column() {
        let early = Position::new(3, 9, 4);
        let late = Position::new(1, 1, 7);
        assert_eq!(early.min(late), early);
        assert_eq!(early.max(late), late);
    }

    #[test]
    fn test_combine_with_self() {
        let p: Location = at(3).into();
        assert_eq!(p.combine(p), p);
        let r = span(1, 4);
        assert_eq!(r.combine(r), r);
    }

    #[test]
    fn test_combine_two_positions() {
        let a: Location = at(7).into();
        let b: Location = at(2).into();
        assert_eq!(a.combine(b), span(2, 7));
        assert_eq!(b.combine(a), span(2, 7));
    }

    #[test]
    fn test_combine_position_inside_range() {
        let p: Location = at(3).into();
        assert_eq!(p.combine(span(1, 6)), span(1, 6));
        assert_eq!(span(1, 6).combine(p), span(1, 6));
    }

    #[test]
    fn test_combine_position_extends_range() {
        let before: Location = at(0).into();
        let after: Location = at(9).into();
        assert_eq!(before.combine(span(2, 4)), span(0, 4));
        assert_eq!(span(2, 4).combine(after), span(2, 9));
    }

    #[test]
    fn test_combine_ranges_takes_latest_end_of_either() {
        assert_eq!(span(0, 8).combine(span(2, 4)), span(0, 8));
        assert_eq!(span(2, 4).combine(span(0, 8)), span(0, 8));
        assert_eq!(span(0, 3).combine(span(5, 9)), span(0, 9));
    }

    #[test]
    fn test_add_operator() {
        let first: Location = at(0).into();
        let last = span(4, 6);
        assert_eq!(first + last, span(0, 6));
    }

    #[test]
    fn test_start_end() {
        let p: Location = at(4).into();
        assert_eq!(p.start(), at(4));
        assert_eq!(p.end(), at(4));
        assert_eq!(span(1, 3).start(), at(1));
        assert_eq!(span(1, 3).end(), at(3));
    }

    #[test]
    fn test_display() {
        let p: Location = Position::new(2, 5, 11).into();
        assert_eq!(p.to_string(), "2:5");
        let r: Location = Range::new(Position::new(1, 1, 0), Position::new(1, 4, 3)).into();
        assert_eq!(r.to_string(), "1:1-1:4");
    }

    mod proptest_combine {
        use super::{at, span};
        use crate::location::Location;
        use proptest::prelude::*;

        fn location() -> impl Strategy<Value = Location> {
            prop_oneof![
                (0usize..64).prop_map(|o| Location::from(at(o))),
                (0usize..64, 0usize..64).prop_map(|(a, b)| span(a.min(b), a.max(b))),
            ]
        }

        proptest! {
            #[test]
            fn combine_is_span_union(a in location(), b in location()) {
                let merged = a.combine(b);
                prop_assert_eq!(merged.start().offset, a.start().offset.min(b.start().offset));
                prop_assert_eq!(merged.end().offset, a.end().offset.max(b.end().offset));
            }

            #[test]
            fn combine_is_commutative(a in location(), b in location()) {
                prop_assert_eq!(a.combine(b), b.combine(a));
            }

            #[test]
            fn combine_is_associative(a in location(), b in location(), c in location()) {
                prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
            }
        }
    }
}
