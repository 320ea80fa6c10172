/// Binding module - per-texture GPU bindings and the set produced by one import

pub mod resource_binding;
pub mod texture_set;

pub use resource_binding::*;
pub use texture_set::*;
