// Checks on the flattened in-order key sequence of a tree.

/// Returns `true` if every key is strictly less than the key that follows it.
pub fn is_strictly_increasing<T>(keys: &[&T]) -> bool
where
    T: Ord,
{
    keys.windows(2).all(|pair| pair[0] < pair[1])
}
