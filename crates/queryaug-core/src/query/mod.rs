//! Query data model and variant taxonomy

mod model;
mod variant;

pub use model::{
    JsonDocument, Mergeable, Query, QuerySet, QueryVariant, QueryVariantSet, VariantElement,
};
pub use variant::VariantType;
