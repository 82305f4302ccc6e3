//! Query highlighting for suggestion rows
//!
//! Splits a candidate into plain and matching segments so the renderer can
//! style the parts that match what the user typed.

use regex::RegexBuilder;

/// A run of candidate text, either matching the query or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Split `candidate` into segments, marking every case-insensitive occurrence
/// of `query`.
///
/// The query is matched literally. Concatenating the returned segments in
/// order always reproduces `candidate`. A blank query yields the whole
/// candidate as one non-matching segment.
pub fn highlight<'a>(candidate: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.trim().is_empty() {
        return vec![Segment::plain(candidate)];
    }

    let pattern = regex::escape(query);
    let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            log::debug!("Skipping highlight for query {:?}: {}", query, e);
            return vec![Segment::plain(candidate)];
        }
    };

    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in matcher.find_iter(candidate) {
        if found.start() > last_end {
            segments.push(Segment::plain(&candidate[last_end..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        last_end = found.end();
    }

    if last_end < candidate.len() || segments.is_empty() {
        segments.push(Segment::plain(&candidate[last_end..]));
    }

    segments
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
