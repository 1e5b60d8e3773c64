use std::{iter, ops::Range};

/// A slice of a candidate, tagged with whether it matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> HighlightSpan<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum MatchRanges {
    /// Nothing is highlighted.
    None,
    /// Lowercased query searched lazily in the lowercased candidate.
    Literal(LowercaseSearch),
    /// Precomputed, sorted, non-overlapping byte ranges.
    Fixed { ranges: Vec<Range<usize>>, next: usize },
}

/// Lazy iterator over the spans of one candidate.
///
/// The iterator is finite and cheap to clone; cloning it before consuming
/// restarts the sequence from the first span.
#[derive(Debug, Clone)]
pub struct Highlights<'a> {
    text: &'a str,
    ranges: MatchRanges,
    pos: usize,
    pending: Option<Range<usize>>,
    finished: bool,
}

/// Literal search over `text.to_lowercase()` whose hits are reported as
/// byte ranges of the original text.
#[derive(Debug, Clone)]
pub(crate) struct LowercaseSearch {
    lowered: String,
    needle: String,
    /// Original char range behind each byte of `lowered`.
    origin: Vec<Range<usize>>,
    cursor: usize,
}

impl LowercaseSearch {
    /// `needle` must already be lowercased and non-empty.
    pub(crate) fn new(text: &str, needle: String) -> Self {
        let lowered = text.to_lowercase();
        let mut origin = Vec::with_capacity(lowered.len());
        for (start, c) in text.char_indices() {
            // str::to_lowercase only differs per char for final sigma, which
            // keeps the same width
            let width: usize = c.to_lowercase().map(char::len_utf8).sum();
            origin.extend(iter::repeat_n(start..start + c.len_utf8(), width));
        }

        Self {
            lowered,
            needle,
            origin,
            cursor: 0,
        }
    }

    fn next_match(&mut self) -> Option<Range<usize>> {
        if self.needle.is_empty() {
            return None;
        }

        let start = self.cursor
            + self.lowered.get(self.cursor..)?.find(self.needle.as_str())?;
        let end = start + self.needle.len();
        self.cursor = end;

        let first = self.origin.get(start)?;
        let last = self.origin.get(end - 1)?;
        Some(first.start..last.end)
    }
}

impl<'a> Highlights<'a> {
    pub(crate) fn new(text: &'a str, ranges: MatchRanges) -> Self {
        Self {
            text,
            ranges,
            pos: 0,
            pending: None,
            finished: false,
        }
    }

    fn next_range(&mut self) -> Option<Range<usize>> {
        match &mut self.ranges {
            MatchRanges::None => None,
            MatchRanges::Literal(search) => {
                while let Some(range) = search.next_match() {
                    // two hits can widen onto the same original char
                    if range.end > self.pos {
                        return Some(range.start.max(self.pos)..range.end);
                    }
                }
                None
            }
            MatchRanges::Fixed { ranges, next } => {
                while let Some(range) = ranges.get(*next) {
                    *next += 1;
                    if range.start >= self.pos && range.end > range.start {
                        return Some(range.clone());
                    }
                }
                None
            }
        }
    }
}

impl<'a> Iterator for Highlights<'a> {
    type Item = HighlightSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(range) = self.pending.take() {
            self.pos = range.end;
            return Some(HighlightSpan::matched(&self.text[range]));
        }

        if self.finished {
            return None;
        }

        match self.next_range() {
            Some(range) if range.start == self.pos => {
                self.pos = range.end;
                Some(HighlightSpan::matched(&self.text[range]))
            }
            Some(range) => {
                let plain = &self.text[self.pos..range.start];
                self.pos = range.start;
                self.pending = Some(range);
                Some(HighlightSpan::plain(plain))
            }
            None => {
                self.finished = true;
                let rest = &self.text[self.pos..];
                // an empty candidate still yields one (empty) span
                if rest.is_empty() && self.pos > 0 {
                    None
                } else {
                    Some(HighlightSpan::plain(rest))
                }
            }
        }
    }
}

/// Splits `candidate` into spans, marking every occurrence of the lowercased
/// `query` in the lowercased candidate. The query is always matched as
/// literal text.
///
/// # Examples
/// ```
/// # use autocompleter::completer::{highlight, HighlightSpan};
/// let spans: Vec<_> = highlight("C++ Dev", "++").collect();
/// assert_eq!(
///     spans,
///     vec![
///         HighlightSpan::plain("C"),
///         HighlightSpan::matched("++"),
///         HighlightSpan::plain(" Dev"),
///     ]
/// );
/// ```
pub fn highlight<'a>(candidate: &'a str, query: &str) -> Highlights<'a> {
    let ranges = if query.is_empty() {
        MatchRanges::None
    } else {
        MatchRanges::Literal(LowercaseSearch::new(candidate, query.to_lowercase()))
    };
    Highlights::new(candidate, ranges)
}

/// Converts matched char indices into merged byte ranges of `text`.
pub(crate) fn char_indices_to_ranges(
    text: &str,
    indices: &[usize],
) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut wanted = indices.iter().copied().peekable();

    for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
        while wanted.next_if(|&i| i < char_idx).is_some() {}
        if wanted.next_if_eq(&char_idx).is_none() {
            continue;
        }

        let end = byte_idx + c.len_utf8();
        match ranges.last_mut() {
            Some(last) if last.end == byte_idx => last.end = end,
            _ => ranges.push(byte_idx..end),
        }
    }

    ranges
}
