/// Returns the piece of `link` between the first marker and the next one,
/// cut at the first terminator. Empty when no marker occurs.
pub fn segment_after<'a>(link: &'a str, markers: &[&str], terminators: &[char]) -> &'a str {
    let Some((start, len)) = find_marker(link, markers) else {
        return "";
    };
    let rest = &link[start + len..];

    let piece = match find_marker(rest, markers) {
        Some((next, _)) => &rest[..next],
        None => rest,
    };

    match piece.find(terminators) {
        Some(end) => &piece[..end],
        None => piece,
    }
}

/// Leftmost marker occurrence; on a tie the earlier marker in the list wins.
fn find_marker(haystack: &str, markers: &[&str]) -> Option<(usize, usize)> {
    markers
        .iter()
        .filter_map(|marker| haystack.find(marker).map(|at| (at, marker.len())))
        .min_by_key(|(at, _)| *at)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKERS: &[&str] = &["v=", "/embed/", ".be/"];
    const TERMINATORS: &[char] = &['?', '&'];

    #[test]
    fn test_no_marker_is_empty() {
        assert_eq!(segment_after("https://example.org/", MARKERS, TERMINATORS), "");
        assert_eq!(segment_after("", MARKERS, TERMINATORS), "");
    }

    #[test]
    fn test_leftmost_marker_wins() {
        assert_eq!(
            segment_after("https://youtu.be/abc?v=zzz", MARKERS, TERMINATORS),
            "abc"
        );
    }

    #[test]
    fn test_piece_stops_at_next_marker() {
        assert_eq!(
            segment_after("https://host/embed/abcv=def", MARKERS, TERMINATORS),
            "abc"
        );
    }

    #[test]
    fn test_marker_at_end_is_empty() {
        assert_eq!(segment_after("https://host/watch?v=", MARKERS, TERMINATORS), "");
    }

    #[test]
    fn test_non_ascii_is_sliced_on_char_boundaries() {
        assert_eq!(
            segment_after("https://host/watch?v=ärger&x=1", MARKERS, TERMINATORS),
            "ärger"
        );
    }
}
