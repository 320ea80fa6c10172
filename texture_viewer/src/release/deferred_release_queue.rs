/// Deferred destruction of superseded GPU bindings.
///
/// The backend executes submitted work asynchronously with a bounded number
/// of frames in flight. A binding that stops being current may still be
/// referenced by that work, so it is retired here and destroyed only once
/// `current_frame - retired_frame > latency`.

use crate::binding::ResourceBinding;
use crate::descriptor::{DescriptorSlotAllocator, SlotIndex};
use crate::viewer_debug;

/// Default number of frames the backend may keep in flight
pub const DEFAULT_FRAME_LATENCY: u64 = 3;

/// A binding waiting for the backend to stop referencing it
pub struct RetiredBinding {
    pub binding: ResourceBinding,
    pub retired_frame: u64,
}

/// Queue of retired bindings, swept once per frame
pub struct DeferredReleaseQueue {
    entries: Vec<RetiredBinding>,
    latency: u64,
}

impl DeferredReleaseQueue {
    /// Create an empty queue for a backend with `latency` frames in flight
    pub fn new(latency: u64) -> Self {
        Self {
            entries: Vec::new(),
            latency,
        }
    }

    /// Retire `binding` at `frame`
    ///
    /// The binding is stamped with `frame` as its last use.
    pub fn retire(&mut self, mut binding: ResourceBinding, frame: u64) {
        binding.touch(frame);
        self.entries.push(RetiredBinding {
            binding,
            retired_frame: frame,
        });
    }

    /// Release every entry older than the latency threshold
    ///
    /// Slots go back to `slots` and GPU handles are dropped. Entries without a
    /// slot are destroyed on the same schedule. Must run once per frame,
    /// before any resource creation, so freed slots are reusable the same
    /// frame. Returns the number of entries released.
    pub fn sweep(&mut self, current_frame: u64, slots: &mut DescriptorSlotAllocator) -> usize {
        let latency = self.latency;
        let (expired, pending): (Vec<RetiredBinding>, Vec<RetiredBinding>) =
            std::mem::take(&mut self.entries)
                .into_iter()
                .partition(|entry| current_frame.saturating_sub(entry.retired_frame) > latency);
        self.entries = pending;

        let released = expired.len();
        for mut entry in expired {
            if let Some(slot) = entry.binding.take_slot() {
                slots.release(slot);
            }
        }

        if released > 0 {
            viewer_debug!("texview::DeferredReleaseQueue",
                "Frame {}: released {} retired binding(s), {} pending", current_frame, released, self.entries.len());
        }
        released
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latency(&self) -> u64 {
        self.latency
    }

    /// Descriptor slots still held by queued entries
    pub fn pending_slots(&self) -> Vec<SlotIndex> {
        self.entries.iter().filter_map(|entry| entry.binding.slot()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RetiredBinding> {
        self.entries.iter()
    }
}

impl Default for DeferredReleaseQueue {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_LATENCY)
    }
}

#[cfg(test)]
#[path = "deferred_release_queue_tests.rs"]
mod tests;
