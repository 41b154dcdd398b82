//! Headless styling and interaction core for the `ui_kit` component library.
//!
//! The crate turns declarative variant schemas plus caller overrides into ordered utility-class
//! tokens, resolves token conflicts last-declared-wins, and defines the controlled interaction
//! contracts shared by the toggle family, the star rating, and the avatar image fallback. It is
//! framework-agnostic: no Leptos, browser APIs, or I/O.
//!
//! Every rendering path is total. Unknown selections fall back to axis defaults, unrecognized
//! class leaves contribute nothing, and only schema construction or catalog loading can fail.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod class_value;
mod error;
pub mod geometry;
pub mod interaction;
pub mod merge;
mod resolve;
mod schema;
pub mod tokens;

pub use catalog::VariantCatalog;
pub use class_value::{flatten, flatten_with, ClassValue, FlattenOptions};
pub use error::{CatalogError, SchemaError};
pub use geometry::{fraction, ArcGeometry, GroupOverflow};
pub use interaction::{
    fallback_content, BinaryControl, BinaryDisplay, FallbackContent, ImageFallback, ImageState,
    PreviewCommit, FALLBACK_PLACEHOLDER,
};
pub use merge::{cn, merge};
pub use resolve::{resolve, ResolvedStyle, Selection};
pub use schema::{Axis, CompoundRule, VariantSchema, VariantSchemaBuilder};
pub use tokens::{css_var, hsl_var};
