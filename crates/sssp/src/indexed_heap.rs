use crate::Error;

const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeapEntry {
    pub vertex: u32,
    pub priority: u64,
}

/// Binary min-heap over vertex ids, augmented with a reverse index from
/// vertex id to heap slot so `decrease_key` locates its target in O(1).
///
/// Invariant: for every vertex currently in the heap,
/// `entries[position[v]].vertex == v`. Both structures are only ever mutated
/// together through one swap helper, so the invariant holds whenever an
/// operation returns.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    position: Vec<usize>,
}

impl IndexedMinHeap {
    /// Bulk-loads the heap in O(n) by sifting down from the last parent.
    ///
    /// `entries` must contain each vertex id `0..entries.len()` exactly once;
    /// initial priorities are arbitrary.
    pub fn from_entries(entries: Vec<HeapEntry>) -> Self {
        let mut position = vec![ABSENT; entries.len()];
        for (slot, entry) in entries.iter().enumerate() {
            debug_assert!(
                (entry.vertex as usize) < position.len(),
                "vertex id outside the dense range"
            );
            debug_assert_eq!(
                position[entry.vertex as usize],
                ABSENT,
                "duplicate vertex id"
            );
            position[entry.vertex as usize] = slot;
        }

        let mut heap = Self { entries, position };
        if heap.entries.len() > 1 {
            let last_parent = (heap.entries.len() - 2) / 2;
            for slot in (0..=last_parent).rev() {
                heap.sift_down(slot);
            }
        }
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, vertex: u32) -> bool {
        self.position
            .get(vertex as usize)
            .is_some_and(|&slot| slot != ABSENT)
    }

    #[inline]
    pub fn peek(&self) -> Option<HeapEntry> {
        self.entries.first().copied()
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn extract_min(&mut self) -> Result<HeapEntry, Error> {
        if self.entries.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let last = self.entries.len() - 1;
        self.swap_slots(0, last);
        let Some(root) = self.entries.pop() else {
            return Err(Error::EmptyHeap);
        };
        self.position[root.vertex as usize] = ABSENT;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Lowers `vertex`'s priority and restores heap order by sifting up.
    ///
    /// The vertex must currently be in the heap and `priority` must not
    /// exceed its current value; violating either panics.
    pub fn decrease_key(&mut self, vertex: u32, priority: u64) {
        let slot = self.position[vertex as usize];
        debug_assert_ne!(slot, ABSENT, "decrease_key on a vertex not in the heap");
        debug_assert!(
            priority <= self.entries[slot].priority,
            "decrease_key must not raise a priority"
        );
        self.entries[slot].priority = priority;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].priority <= self.entries[slot].priority {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = slot * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Left child wins priority ties.
            let mut child = left;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                child = right;
            }
            if self.entries[slot].priority <= self.entries[child].priority {
                break;
            }
            self.swap_slots(slot, child);
            slot = child;
        }
    }

    /// Swaps two heap slots and their reverse-index entries in one step.
    /// Every swap in the heap goes through here so the two arrays cannot
    /// drift apart.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.position[self.entries[a].vertex as usize] = a;
        self.position[self.entries[b].vertex as usize] = b;
    }
}
