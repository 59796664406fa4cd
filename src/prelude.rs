//! Derive macros shared across the crate.
//!
//! Re-exports the `derive_more` derives used for `Display` on dates, months
//! and patterns.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, FromStr, Into, TryInto};
