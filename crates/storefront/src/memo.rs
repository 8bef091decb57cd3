//! Keyed memoization for derived values.

/// Cache of the last derived value, keyed by the inputs that produced it.
///
/// Holds at most one entry. Views key their derivation on everything it reads
/// (query, snapshot generation), so reads that change nothing reuse the
/// previous value instead of re-deriving.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> Memo<K, V> {
    pub fn new() -> Self {
        Self { slot: None }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Recompute and store the value when `key` differs from the cached key.
    pub fn ensure(&mut self, key: K, compute: impl FnOnce() -> V) {
        let hit = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if !hit {
            self.slot = Some((key, compute()));
        }
    }

    /// The value from the last `ensure`, if one has happened.
    pub fn value(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, value)| value)
    }
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
