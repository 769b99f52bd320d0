//! Matched-substring emphasis for suggestion rows

/// A run of suggestion text, either plain or matching the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Split `item` around the first case-insensitive occurrence of `query`.
///
/// A prefix match yields `[matched, plain]`. No match, or an empty query,
/// yields the whole item as one plain segment.
pub fn highlight_segments<'a>(item: &'a str, query: &str) -> Vec<Segment<'a>> {
    let Some((start, end)) = find_match(item, query) else {
        return vec![Segment::plain(item)];
    };

    let mut segments = Vec::with_capacity(3);
    if start > 0 {
        segments.push(Segment::plain(&item[..start]));
    }
    segments.push(Segment::matched(&item[start..end]));
    if end < item.len() {
        segments.push(Segment::plain(&item[end..]));
    }
    segments
}

/// Byte range of the first case-insensitive match, on char boundaries
fn find_match(item: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    item.char_indices()
        .find_map(|(start, _)| match_at(&item[start..], query).map(|len| (start, start + len)))
}

/// Length in bytes of `haystack`'s prefix matching `query`, if it matches
fn match_at(haystack: &str, query: &str) -> Option<usize> {
    let mut chars = haystack.char_indices();
    let mut consumed = 0;

    for q in query.chars() {
        let (idx, c) = chars.next()?;
        if !c.to_lowercase().eq(q.to_lowercase()) {
            return None;
        }
        consumed = idx + c.len_utf8();
    }

    Some(consumed)
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
