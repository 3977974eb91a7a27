//! DirtySet - cells pending repaint this frame
//!
//! BitSet for O(1) membership plus an insertion-ordered list so the
//! renderer walks only what changed, in a deterministic order.

pub struct DirtySet {
    order: Vec<u32>,
    bits: Vec<u64>,
    capacity: usize,
}

impl DirtySet {
    pub fn new(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity.min(1024)),
            bits: vec![0u64; (capacity + 63) / 64],
            capacity,
        }
    }

    // === BitSet Helpers ===

    #[inline(always)]
    fn set_bit(bits: &mut [u64], idx: usize) {
        let word = idx >> 6;  // idx / 64
        let bit = idx & 63;   // idx % 64
        bits[word] |= 1u64 << bit;
    }

    #[inline(always)]
    fn clear_bit(bits: &mut [u64], idx: usize) {
        let word = idx >> 6;
        let bit = idx & 63;
        bits[word] &= !(1u64 << bit);
    }

    #[inline(always)]
    fn check_bit(bits: &[u64], idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        word < bits.len() && (bits[word] & (1u64 << bit)) != 0
    }

    /// Mark an index dirty. False if it was already pending or is out of range.
    #[inline]
    pub fn mark(&mut self, idx: usize) -> bool {
        if idx >= self.capacity || Self::check_bit(&self.bits, idx) {
            return false;
        }
        Self::set_bit(&mut self.bits, idx);
        self.order.push(idx as u32);
        true
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        Self::check_bit(&self.bits, idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pending indices in the order they were first marked.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().map(|&idx| idx as usize)
    }

    /// Empty the set. Cost is proportional to the pending count, not the grid.
    pub fn clear(&mut self) {
        for &idx in &self.order {
            Self::clear_bit(&mut self.bits, idx as usize);
        }
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_is_idempotent_until_clear() {
        let mut dirty = DirtySet::new(256);
        assert!(dirty.mark(17));
        assert!(!dirty.mark(17));
        assert_eq!(dirty.len(), 1);

        dirty.clear();
        assert!(dirty.is_empty());
        assert!(!dirty.contains(17));
        assert!(dirty.mark(17));
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut dirty = DirtySet::new(256);
        for idx in [200, 3, 64, 63, 3] {
            dirty.mark(idx);
        }
        let seen: Vec<usize> = dirty.iter().collect();
        assert_eq!(seen, vec![200, 3, 64, 63]);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut dirty = DirtySet::new(10);
        assert!(!dirty.mark(10));
        assert!(!dirty.contains(10_000));
        assert!(dirty.is_empty());
    }
}
