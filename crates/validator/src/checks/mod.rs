//! Leaf checks
//!
//! Each family is an extension trait on [`Chain`](crate::chain::Chain),
//! implemented only for the checked types it makes sense for. A check only
//! appends a step; nothing runs until the chain is evaluated.
//!
//! Families sharing a method name (`is_empty`, `contains`, `has_size`) never
//! apply to the same checked type.
//!
//! Every message is keyed in [`BuiltinCatalog`](crate::message::BuiltinCatalog).

pub mod collection;
pub mod equality;
pub mod error;
pub mod number;
pub mod option;
pub mod ordering;
pub mod text;

pub use collection::{CollectionChecks, Container, Keyed, MapChecks};
pub use equality::EqualityChecks;
pub use error::ErrorChecks;
pub use number::{Number, NumberChecks};
pub use option::OptionChecks;
pub use ordering::OrderingChecks;
pub use text::TextChecks;
