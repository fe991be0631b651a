//! Live-or-fallback selection.

/// Choose the dataset to render: the live items when any exist, otherwise the
/// bundled fallback. The two are never interleaved.
///
/// Callers must keep showing a loading affordance while a fetch is in
/// flight; the fallback is for known absence, not for not-yet-loaded.
pub fn select<'a, T>(live: &'a [T], fallback: &'a [T]) -> &'a [T] {
    if live.is_empty() {
        fallback
    } else {
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_items_win_when_present() {
        let live = vec!["live"];
        let fallback = vec!["a", "b"];
        assert_eq!(select(&live, &fallback), &["live"]);
    }

    #[test]
    fn empty_live_falls_back() {
        let live: Vec<&str> = vec![];
        let fallback = vec!["a", "b"];
        assert_eq!(select(&live, &fallback), &["a", "b"]);
    }

    #[test]
    fn both_empty_is_empty() {
        let live: Vec<&str> = vec![];
        let fallback: Vec<&str> = vec![];
        assert!(select(&live, &fallback).is_empty());
    }
}
