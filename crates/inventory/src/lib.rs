//! Shared item box domain.
//!
//! A capacity-bounded [`ItemBox`] owns its items; any number of [`Room`]s
//! borrow the same box and forward put/take/show to it. Full and not-found
//! are ordinary outcomes returned as values, never errors.

pub mod item;
pub mod item_box;
pub mod room;

pub use item::Item;
pub use item_box::ItemBox;
pub use room::{Room, SharedBox};
