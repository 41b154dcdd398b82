use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Structural violations detected when a [`crate::VariantSchema`] is validated.
pub enum SchemaError {
    /// The axis declares no options at all.
    #[error("axis `{axis}` declares no options")]
    NoOptions {
        /// Offending axis name.
        axis: String,
    },
    /// The axis default names an option the axis does not declare.
    #[error("axis `{axis}` defaults to undeclared option `{default}`")]
    UndeclaredDefault {
        /// Offending axis name.
        axis: String,
        /// Default option name as written.
        default: String,
    },
    /// Two axes share one name.
    #[error("axis `{axis}` is declared more than once")]
    DuplicateAxis {
        /// Repeated axis name.
        axis: String,
    },
    /// A compound rule keys on an axis the schema does not declare.
    #[error("compound rule {rule} references unknown axis `{axis}`")]
    UnknownCompoundAxis {
        /// Zero-based rule index in declaration order.
        rule: usize,
        /// Unknown axis name.
        axis: String,
    },
    /// A compound rule expects an option its axis does not declare.
    #[error("compound rule {rule} references unknown option `{option}` on axis `{axis}`")]
    UnknownCompoundOption {
        /// Zero-based rule index in declaration order.
        rule: usize,
        /// Axis name.
        axis: String,
        /// Unknown option name.
        option: String,
    },
}

#[derive(Debug, Error)]
/// Failures while loading a [`crate::VariantCatalog`] from configuration text.
pub enum CatalogError {
    /// The TOML source did not parse into catalog tables.
    #[error("variant catalog is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// The JSON source did not parse, or the catalog failed to serialize.
    #[error("variant catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// One component schema violates a schema invariant.
    #[error("component `{component}`: {source}")]
    Schema {
        /// Component table name.
        component: String,
        /// Underlying schema violation.
        #[source]
        source: SchemaError,
    },
}
