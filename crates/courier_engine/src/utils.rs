use std::cmp::Ordering;

/// Orders present values ascending and places absent values after all of
/// them. Two absent values compare equal, so a stable sort keeps their input
/// order.
pub fn absent_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The last `n` characters of `value`, used to label records that lack a
/// human-readable number.
pub fn short_id(value: &str, n: usize) -> &str {
    let count = value.chars().count();
    if count <= n {
        return value;
    }

    let (start, _) = value
        .char_indices()
        .nth(count - n)
        .unwrap_or((0, ' '));
    &value[start..]
}

/// Rounds to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
