//! Output records for the two serialization strategies.
//!
//! `serialize` is shallow: reviews appear as their foreign keys. `to_dict` expands
//! related rows, collapsing to the shallow form on cycles and past the depth limit.

pub use self::dicts::*;
pub use self::records::*;

mod dicts;
mod records;
