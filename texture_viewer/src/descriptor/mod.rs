/// Descriptor module - shader-visible descriptor slot management

pub mod slot_allocator;

pub use slot_allocator::*;
