//! Optimistic local mutation with rollback on durable-write failure.

/// Applies a local change to `collection`, then runs the durable `write`.
///
/// On success the local change stands and the write's value is returned. On
/// failure the collection is restored to its pre-change snapshot and the
/// typed error propagates. The snapshot is a full clone; the collections
/// involved are one owner's in-memory rows, so that cost stays small.
pub fn commit_or_restore<C, T, E>(
    collection: &mut C,
    apply: impl FnOnce(&mut C),
    write: impl FnOnce() -> Result<T, E>,
) -> Result<T, E>
where
    C: Clone,
{
    let snapshot = collection.clone();
    apply(collection);
    match write() {
        Ok(value) => Ok(value),
        Err(err) => {
            *collection = snapshot;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_local_change_on_success() {
        let mut rows = vec![1, 2];
        let result: Result<&str, ()> =
            commit_or_restore(&mut rows, |rows| rows.push(3), || Ok("saved"));
        assert_eq!(result, Ok("saved"));
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn restores_snapshot_on_failure() {
        let mut rows = vec![1, 2];
        let result: Result<(), &str> = commit_or_restore(
            &mut rows,
            |rows| {
                rows.clear();
                rows.push(99);
            },
            || Err("store down"),
        );
        assert_eq!(result, Err("store down"));
        assert_eq!(rows, vec![1, 2], "failed write must leave no local trace");
    }
}
