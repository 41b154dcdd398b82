//! Named collections of variant schemas loaded from configuration text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CatalogError, SchemaError, VariantSchema};

/// Component name to [`VariantSchema`], validated on every load path.
///
/// Deserializing a catalog with any serde format validates it as well; only a bare
/// [`VariantSchema`] deserializes unchecked.
///
/// The TOML form uses one table per component:
///
/// ```toml
/// [badge]
/// base = ["inline-flex items-center", "rounded-full"]
///
/// [[badge.axes]]
/// name = "size"
/// default = "md"
/// options = { sm = "h-5 px-2", md = "h-6 px-2.5" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, VariantSchema>",
    into = "BTreeMap<String, VariantSchema>"
)]
pub struct VariantCatalog {
    schemas: BTreeMap<String, VariantSchema>,
}

impl TryFrom<BTreeMap<String, VariantSchema>> for VariantCatalog {
    type Error = CatalogError;

    fn try_from(schemas: BTreeMap<String, VariantSchema>) -> Result<Self, Self::Error> {
        let catalog = Self { schemas };
        catalog.validate()?;
        Ok(catalog)
    }
}

impl From<VariantCatalog> for BTreeMap<String, VariantSchema> {
    fn from(catalog: VariantCatalog) -> Self {
        catalog.schemas
    }
}

impl VariantCatalog {
    /// Parses and validates a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Toml`] for malformed text and [`CatalogError::Schema`] for the
    /// first component violating a schema invariant.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let schemas: BTreeMap<String, VariantSchema> = toml::from_str(raw)?;
        Self::try_from(schemas)
    }

    /// Parses and validates a JSON catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed text and [`CatalogError::Schema`] for the
    /// first component violating a schema invariant.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let schemas: BTreeMap<String, VariantSchema> = serde_json::from_str(raw)?;
        Self::try_from(schemas)
    }

    /// Serializes the catalog as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates every schema in name order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Schema`] naming the first invalid component.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (component, schema) in &self.schemas {
            schema.validate().map_err(|source| CatalogError::Schema {
                component: component.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Adds or replaces one component schema after validating it.
    ///
    /// # Errors
    ///
    /// Returns the [`SchemaError`] when `schema` is invalid; the catalog is left unchanged.
    pub fn insert(
        &mut self,
        component: impl Into<String>,
        schema: VariantSchema,
    ) -> Result<(), SchemaError> {
        schema.validate()?;
        self.schemas.insert(component.into(), schema);
        Ok(())
    }

    /// Looks up the schema for `component`.
    pub fn get(&self, component: &str) -> Option<&VariantSchema> {
        self.schemas.get(component)
    }

    /// Component names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` when no component is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
