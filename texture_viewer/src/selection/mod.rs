/// Selection module - what to load next and how a change turns into GPU bindings

pub mod test_file_catalog;
pub mod selection_state;
pub mod auto_advance;
pub mod selection_controller;

pub use test_file_catalog::*;
pub use selection_state::*;
pub use auto_advance::*;
pub use selection_controller::*;
