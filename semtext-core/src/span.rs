//! Half-open character ranges and the span-set validator.
//!
//! Every positioned entity in a text ([`Term`](crate::Term),
//! [`Sentence`](crate::Sentence)) exposes its bounds through [`HasSpan`].
//! Offsets count chars of the root text.
//!
//! ```text
//! I see
//! 012345
//! [   )   "I se" = Span { start: 0, end: 4 }
//!     []  empty span at 4 = Span { start: 4, end: 4 }
//! ```

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};

/// A half-open interval `[start, end)` over char offsets.
///
/// Construction guarantees `start <= end`; an empty span has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span, failing when `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        check_span(start, end, "Invalid span")?;
        Ok(Self { start, end })
    }

    /// Zero-width span at `offset`.
    #[must_use]
    pub const fn empty(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Inclusive start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of chars covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width spans.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `Range`.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// True when `other` lies entirely within this span (shared bounds allowed).
    #[must_use]
    pub fn encloses(&self, other: &impl HasSpan) -> bool {
        self.start <= other.start() && other.end() <= self.end
    }

    /// True when the two spans share at least one char.
    ///
    /// Touching spans do not overlap. A zero-width span overlaps a span only
    /// when it sits strictly inside it.
    #[must_use]
    pub fn overlaps(&self, other: &impl HasSpan) -> bool {
        self.start < other.end() && other.start() < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl TryFrom<Range<usize>> for Span {
    type Error = Error;

    fn try_from(range: Range<usize>) -> Result<Self> {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

/// Anything positioned by a [`Span`].
pub trait HasSpan {
    /// The bounds of this value.
    fn span(&self) -> Span;

    /// Inclusive start offset.
    fn start(&self) -> usize {
        self.span().start()
    }

    /// Exclusive end offset.
    fn end(&self) -> usize {
        self.span().end()
    }
}

impl HasSpan for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl<T: HasSpan + ?Sized> HasSpan for &T {
    fn span(&self) -> Span {
        (**self).span()
    }
}

/// Check that `start <= end`.
pub fn check_span(start: usize, end: usize, context: &str) -> Result<()> {
    if start > end {
        return Err(Error::invalid_span(start as i64, end as i64, context));
    }
    Ok(())
}

/// Validate an ordered span list against its container `[left, right]`.
///
/// Adjacent spans may touch (`prior.end == current.start`) but never cross.
/// When two spans do cross, a reversed pair is reported as
/// [`Error::OutOfOrderSpan`] and anything else as [`Error::OverlappingSpan`].
///
/// # Example
///
/// ```rust
/// use semtext_core::{validate_spans, Span};
///
/// let spans = [Span::new(0, 2).unwrap(), Span::new(2, 4).unwrap()];
/// assert!(validate_spans(&spans, 0, 4, "terms").is_ok());
/// assert!(validate_spans(&spans, 0, 3, "terms").is_err());
/// ```
pub fn validate_spans<'a, S, I>(spans: I, left: usize, right: usize, context: &str) -> Result<()>
where
    S: HasSpan + 'a,
    I: IntoIterator<Item = &'a S>,
{
    check_span(left, right, context)?;

    let mut first: Option<Span> = None;
    let mut prior: Option<Span> = None;

    for item in spans {
        let current = item.span();
        check_span(current.start(), current.end(), context)?;

        if let Some(prior) = prior {
            if prior.end() > current.start() {
                if prior.start() >= current.end() {
                    return Err(Error::OutOfOrderSpan {
                        prior,
                        current,
                        context: context.to_string(),
                    });
                }
                return Err(Error::OverlappingSpan {
                    prior,
                    current,
                    context: context.to_string(),
                });
            }
        }

        first.get_or_insert(current);
        prior = Some(current);
    }

    if let (Some(first), Some(last)) = (first, prior) {
        if first.start() < left || last.end() > right {
            return Err(Error::OutOfBoundsSpan {
                start: first.start(),
                end: last.end(),
                left,
                right,
                context: context.to_string(),
            });
        }
    }

    Ok(())
}
