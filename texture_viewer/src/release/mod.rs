/// Release module - deferred destruction of retired GPU bindings

pub mod deferred_release_queue;

pub use deferred_release_queue::*;
