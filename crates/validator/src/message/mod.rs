//! Failure messages: templates, catalogs and rendering
//!
//! Messages are never rendered during evaluation. A
//! [`Verdict`](crate::chain::Verdict) keeps the [`Message`] tree and renders
//! it when a terminal operation asks for text, in the locale chosen there.

pub mod catalog;
pub mod render;
pub mod template;

pub use catalog::{BuiltinCatalog, MapCatalog, MessageCatalog};
pub use render::{Message, Renderer, substitute};
pub use template::{MessageTemplate, Pattern};
