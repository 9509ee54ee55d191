//! Stable orderings over borrowed records.
//!
//! Every query establishes its own ordering instead of re-sorting shared
//! sequences in place, so the order a query sees never depends on what ran
//! before it.

/// References to `items` sorted ascending by a floating-point key (stable, total order).
pub(crate) fn ascending_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
    sorted
}

/// References to `items` sorted ascending by an integer key (stable).
pub(crate) fn ascending_by_count<'a, T>(items: impl IntoIterator<Item = &'a T>, key: impl Fn(&T) -> u64) -> Vec<&'a T>
where
    T: 'a,
{
    let mut sorted: Vec<&T> = items.into_iter().collect();
    sorted.sort_by_key(|item| key(item));
    sorted
}

/// References to `items` sorted descending by an integer key (stable among ties).
pub(crate) fn descending_by_count<T>(items: &[T], key: impl Fn(&T) -> u64) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted
}

/// `part / whole` as a percentage, or 0 when `whole` is zero.
#[inline]
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 { return 0.0 }
    part as f64 / whole as f64 * 100.0
}
