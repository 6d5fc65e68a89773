/// Writes standard competition ranks (1, 2, 2, 4) into a slice that is
/// already sorted best-first. Neighbours with an equal `key` share a rank;
/// the next distinct key takes its 1-based position.
pub fn assign_ranks<T, K, F, S>(items: &mut [T], key: F, mut set_rank: S)
where
    K: PartialEq,
    F: Fn(&T) -> K,
    S: FnMut(&mut T, u32),
{
    let mut rank = 1;
    let mut previous: Option<K> = None;
    for (idx, item) in items.iter_mut().enumerate() {
        let current = key(item);
        if previous.as_ref().is_some_and(|p| *p != current) {
            rank = u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1;
        }
        set_rank(item, rank);
        previous = Some(current);
    }
}
