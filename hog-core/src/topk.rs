use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::path::{Path, PathBuf};

/// A file and the disk space it actually occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileObservation {
    pub path: PathBuf,
    pub occupied_bytes: u64,
}

/// Heap slot. Ordered so that the heap's maximum is the next eviction
/// candidate: the smallest size, and among equal sizes the latest insert.
#[derive(Debug, Clone)]
struct Slot {
    size: u64,
    seq: u64,
    path: PathBuf,
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .size
            .cmp(&self.size)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slot {}

/// Keeps the `capacity` largest files seen in a stream.
///
/// Once full, a new file only displaces the current minimum when it is
/// strictly larger, so among files tied at the boundary the ones pushed
/// first are kept.
#[derive(Debug, Clone)]
pub struct BoundedTopK {
    capacity: usize,
    heap: BinaryHeap<Slot>,
    next_seq: u64,
}

impl BoundedTopK {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Offer a file. O(log K).
    pub fn push(&mut self, size: u64, path: &Path) {
        if self.capacity == 0 {
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(Slot {
                size,
                seq,
                path: path.to_path_buf(),
            });
            return;
        }

        if let Some(mut min) = self.heap.peek_mut()
            && size > min.size
        {
            *min = Slot {
                size,
                seq,
                path: path.to_path_buf(),
            };
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Held files, largest first. Equal sizes keep insertion order.
    pub fn snapshot(&self) -> Vec<FileObservation> {
        let mut slots: Vec<&Slot> = self.heap.iter().collect();
        slots.sort_by(|a, b| b.size.cmp(&a.size).then(a.seq.cmp(&b.seq)));
        slots
            .into_iter()
            .map(|slot| FileObservation {
                path: slot.path.clone(),
                occupied_bytes: slot.size,
            })
            .collect()
    }

    /// Consume the structure, returning held files largest first
    pub fn into_sorted_vec(self) -> Vec<FileObservation> {
        let mut slots = self.heap.into_vec();
        slots.sort_by(|a, b| b.size.cmp(&a.size).then(a.seq.cmp(&b.seq)));
        slots
            .into_iter()
            .map(|slot| FileObservation {
                path: slot.path,
                occupied_bytes: slot.size,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(top: &BoundedTopK) -> Vec<u64> {
        top.snapshot().iter().map(|o| o.occupied_bytes).collect()
    }

    fn push_all(top: &mut BoundedTopK, sizes: &[u64]) {
        for (i, size) in sizes.iter().enumerate() {
            top.push(*size, Path::new(&format!("/f{i}")));
        }
    }

    #[test]
    fn test_keeps_largest_with_duplicates() {
        let mut top = BoundedTopK::new(3);
        push_all(&mut top, &[5, 3, 9, 1, 9, 7]);
        assert_eq!(sizes(&top), vec![9, 9, 7]);
    }

    #[test]
    fn test_top_two_in_descending_order() {
        let mut top = BoundedTopK::new(2);
        push_all(&mut top, &[100, 50, 200, 10]);

        let snapshot = top.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].occupied_bytes, 200);
        assert_eq!(snapshot[0].path, PathBuf::from("/f2"));
        assert_eq!(snapshot[1].occupied_bytes, 100);
        assert_eq!(snapshot[1].path, PathBuf::from("/f0"));
    }

    #[test]
    fn test_never_exceeds_capacity_and_stays_sorted() {
        let mut top = BoundedTopK::new(4);
        let mut state = 0x2545_f491_u64;
        for i in 0..500 {
            // xorshift for a spread of sizes
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            top.push(state % 10_000, Path::new(&format!("/f{i}")));
            assert!(top.len() <= 4);
        }

        let got = sizes(&top);
        assert_eq!(got.len(), 4);
        assert!(got.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_ties_at_boundary_keep_earlier_entries() {
        let mut top = BoundedTopK::new(2);
        top.push(5, Path::new("/a"));
        top.push(5, Path::new("/b"));
        top.push(5, Path::new("/c"));

        let paths: Vec<_> = top.snapshot().into_iter().map(|o| o.path).collect();
        assert_eq!(paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);

        // A strictly larger file evicts the latest of the tied minimums
        top.push(6, Path::new("/d"));
        let paths: Vec<_> = top.snapshot().into_iter().map(|o| o.path).collect();
        assert_eq!(paths, vec![PathBuf::from("/d"), PathBuf::from("/a")]);
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut top = BoundedTopK::new(0);
        top.push(42, Path::new("/x"));
        assert!(top.is_empty());
        assert!(top.snapshot().is_empty());
    }

    #[test]
    fn test_into_sorted_vec_drops_smallest() {
        let mut top = BoundedTopK::new(3);
        push_all(&mut top, &[10, 30, 20, 40]);
        assert_eq!(top.len(), 3);

        let sorted: Vec<u64> = top
            .into_sorted_vec()
            .into_iter()
            .map(|o| o.occupied_bytes)
            .collect();
        assert_eq!(sorted, vec![40, 30, 20]);
    }
}
