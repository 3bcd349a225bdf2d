/// Per-node value storage policy for the key ending at that node.
pub trait Values<V>: Default {
    /// Stores `value` at this node.
    fn add(&mut self, value: V);

    /// Visits all stored values in the policy's fixed order.
    fn for_each<F: FnMut(&V)>(&self, f: F);

    /// Discards all stored values.
    fn clear(&mut self);
}

/// Default policy: insertion-ordered sequence. Multiple values added
/// under an identical key are all retained, in insertion order.
pub struct VecValues<V> {
    values: Vec<V>,
}

impl<V> Default for VecValues<V> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<V> Values<V> for VecValues<V> {
    fn add(&mut self, value: V) {
        self.values.push(value);
    }

    fn for_each<F: FnMut(&V)>(&self, mut f: F) {
        for value in &self.values {
            f(value);
        }
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Single-slot policy: at most one value per key. Adding to an occupied
/// slot replaces the stored value.
pub struct SlotValues<V> {
    slot: Option<V>,
}

impl<V> Default for SlotValues<V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<V> Values<V> for SlotValues<V> {
    fn add(&mut self, value: V) {
        self.slot = Some(value);
    }

    fn for_each<F: FnMut(&V)>(&self, mut f: F) {
        if let Some(value) = &self.slot {
            f(value);
        }
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}
