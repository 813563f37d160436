// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Delay Line
// ─────────────────────────────────────────────────────────────────────
//! Fixed-capacity ring of potential snapshots.
//!
//! `record` writes the slot under the cursor and advances it, so the most
//! recent snapshot always sits at `(write_ptr − 1) mod capacity`. A read
//! at depth `d` returns the snapshot recorded `d` records before that one.

/// Ring buffer of full potential-grid copies.
#[derive(Debug, Clone)]
pub struct DelayLine {
    slots: Vec<Vec<f64>>,
    write_ptr: usize,
    recorded: usize,
}

impl DelayLine {
    /// Allocate `capacity` zero-filled slots of `cells` values each.
    ///
    /// A zero capacity is promoted to one slot.
    pub fn new(capacity: usize, cells: usize) -> Self {
        Self {
            slots: vec![vec![0.0; cells]; capacity.max(1)],
            write_ptr: 0,
            recorded: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot the next `record` will overwrite.
    pub fn write_pointer(&self) -> usize {
        self.write_ptr
    }

    /// Snapshots actually recorded since the last clear, saturating at capacity.
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    #[inline]
    pub fn clamp_depth(&self, depth: usize) -> usize {
        depth.min(self.capacity() - 1)
    }

    /// Copy `grid` into the current slot and advance the cursor.
    ///
    /// # Panics
    /// If `grid` is not exactly one lattice long.
    pub fn record(&mut self, grid: &[f64]) {
        self.slots[self.write_ptr].copy_from_slice(grid);
        self.write_ptr = (self.write_ptr + 1) % self.capacity();
        self.recorded = (self.recorded + 1).min(self.capacity());
    }

    /// Snapshot recorded `depth` records before the latest one.
    ///
    /// `depth` is clamped to `capacity − 1`, so oversized requests yield
    /// the oldest retained slot. Slots never written read as zero.
    pub fn read(&self, depth: usize) -> &[f64] {
        let cap = self.capacity();
        let d = self.clamp_depth(depth);
        let slot = (self.write_ptr + cap - 1 - d) % cap;
        &self.slots[slot]
    }

    /// Zero every slot and rewind the cursor.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.fill(0.0);
        }
        self.write_ptr = 0;
        self.recorded = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(k: usize) -> Vec<f64> {
        vec![k as f64, -(k as f64), 0.5 * k as f64]
    }

    #[test]
    fn test_new_is_zeroed() {
        let d = DelayLine::new(5, 3);
        assert_eq!(d.capacity(), 5);
        assert_eq!(d.write_pointer(), 0);
        assert_eq!(d.recorded(), 0);
        for depth in 0..10 {
            assert!(d.read(depth).iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_zero_capacity_promoted() {
        let mut d = DelayLine::new(0, 2);
        assert_eq!(d.capacity(), 1);
        d.record(&[1.0, 2.0]);
        assert_eq!(d.read(0), &[1.0, 2.0]);
        assert_eq!(d.read(9), &[1.0, 2.0]);
    }

    #[test]
    fn test_latest_behind_write_pointer() {
        let mut d = DelayLine::new(4, 3);
        d.record(&snapshot(1));
        assert_eq!(d.write_pointer(), 1);
        assert_eq!(d.read(0), snapshot(1).as_slice());
    }

    #[test]
    fn test_delay_correctness_with_wraparound() {
        // Record P0..P9 into a 4-slot ring; after step k, read(d) == P_{k-d}.
        let cap = 4;
        let mut d = DelayLine::new(cap, 3);
        for k in 0..10 {
            d.record(&snapshot(k));
            for depth in 0..=k.min(cap - 1) {
                assert_eq!(
                    d.read(depth),
                    snapshot(k - depth).as_slice(),
                    "step {k}, depth {depth}"
                );
            }
        }
        assert_eq!(d.write_pointer(), 10 % cap);
        assert_eq!(d.recorded(), cap);
    }

    #[test]
    fn test_oversized_depth_clamps_to_oldest() {
        let cap = 4;
        let mut d = DelayLine::new(cap, 3);
        for k in 0..10 {
            d.record(&snapshot(k));
        }
        // Oldest retained: P6
        assert_eq!(d.read(cap - 1), snapshot(6).as_slice());
        assert_eq!(d.read(cap), snapshot(6).as_slice());
        assert_eq!(d.read(usize::MAX), snapshot(6).as_slice());
    }

    #[test]
    fn test_record_copies() {
        let mut d = DelayLine::new(3, 3);
        let mut live = snapshot(2);
        d.record(&live);
        live[0] = 99.0;
        assert_eq!(d.read(0)[0], 2.0);
    }

    #[test]
    fn test_clear_rewinds() {
        let mut d = DelayLine::new(3, 3);
        d.record(&snapshot(1));
        d.record(&snapshot(2));
        d.clear();
        assert_eq!(d.write_pointer(), 0);
        assert_eq!(d.recorded(), 0);
        for depth in 0..3 {
            assert!(d.read(depth).iter().all(|&v| v == 0.0));
        }
    }
}
