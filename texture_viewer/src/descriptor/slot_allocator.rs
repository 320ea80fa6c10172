use std::collections::BTreeSet;
use std::ops::Range;
use crate::error::{Error, Result};

/// Index of one entry in the shader-visible descriptor table
pub type SlotIndex = u32;

/// Allocates and recycles shader-visible descriptor slot indices.
///
/// Owns a fixed contiguous range of indices in the backend's descriptor
/// table. Slots below `start` are reserved for other users of the table
/// (the UI font atlas uses slot 0). Allocation always returns the smallest
/// free index so slot assignment is deterministic.
///
/// # Example
///
/// ```ignore
/// let mut slots = DescriptorSlotAllocator::new(1, 4);
/// let a = slots.allocate()?;  // 1
/// let b = slots.allocate()?;  // 2
/// slots.release(a);           // 1 is free again
/// let c = slots.allocate()?;  // 1 (smallest free)
/// ```
pub struct DescriptorSlotAllocator {
    free: BTreeSet<SlotIndex>,
    range: Range<SlotIndex>,
}

impl DescriptorSlotAllocator {
    /// Create an allocator owning `start..start + count`, all free
    pub fn new(start: SlotIndex, count: u32) -> Self {
        let range = start..start.saturating_add(count);
        Self {
            free: range.clone().collect(),
            range,
        }
    }

    /// Take the smallest free slot
    ///
    /// # Errors
    ///
    /// Returns `Error::SlotExhausted` when every slot is held.
    pub fn allocate(&mut self) -> Result<SlotIndex> {
        self.free.pop_first().ok_or(Error::SlotExhausted)
    }

    /// Return a slot to the free set
    ///
    /// # Panics
    ///
    /// Releasing a slot that is already free, or that this allocator does not
    /// own, is a programmer error and panics.
    pub fn release(&mut self, slot: SlotIndex) {
        assert!(
            self.range.contains(&slot),
            "releasing descriptor slot {} outside managed range {:?}",
            slot,
            self.range
        );
        let inserted = self.free.insert(slot);
        assert!(inserted, "descriptor slot {} released twice", slot);
    }

    /// Whether `slot` is currently free
    pub fn is_free(&self, slot: SlotIndex) -> bool {
        self.free.contains(&slot)
    }

    /// Number of free slots
    pub fn free_count(&self) -> u32 {
        self.free.len() as u32
    }

    /// Number of slots currently held by bindings
    pub fn allocated_count(&self) -> u32 {
        self.capacity() - self.free_count()
    }

    /// Total number of managed slots
    pub fn capacity(&self) -> u32 {
        self.range.end - self.range.start
    }

    /// Managed index range
    pub fn range(&self) -> Range<SlotIndex> {
        self.range.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "slot_allocator_tests.rs"]
mod tests;
