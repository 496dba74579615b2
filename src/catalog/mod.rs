//! Named, pre-filled configuration records.
//!
//! The catalog is an ordered list of [`PresetEntry`] values. Order is display
//! order and also the tie-break order for [`Catalog::find_by_text`]. The
//! built-in catalog is constructed once per process and is read-only after
//! that; callers borrow it and hand it to a [`Session`](crate::session::Session).

mod lookup;
mod presets;

pub use lookup::{Catalog, PresetEntry};
