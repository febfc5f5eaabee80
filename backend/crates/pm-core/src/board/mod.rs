//! Derived board view.
//!
//! Lists are never stored. They are recomputed from a project's full task
//! collection every time that collection changes.

pub mod board_list;
pub mod list_id;
pub mod partition;
pub mod project_board;
