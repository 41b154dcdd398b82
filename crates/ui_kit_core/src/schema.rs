//! Table-driven variant schemas: base tokens, ordered axes, and compound rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ClassValue, SchemaError};

/// One named style dimension with discrete options and a fallback option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Axis {
    /// Axis name used as the selection key (`size`, `variant`, ...).
    pub name: String,
    /// Option used when the caller omits the axis or names an undeclared option.
    pub default: String,
    /// Option name to the tokens it contributes.
    #[serde(default)]
    pub options: BTreeMap<String, ClassValue>,
}

impl Axis {
    /// Creates an axis with no options yet.
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            options: BTreeMap::new(),
        }
    }

    /// Declares (or replaces) one option.
    pub fn option(mut self, name: impl Into<String>, tokens: impl Into<ClassValue>) -> Self {
        self.options.insert(name.into(), tokens.into());
        self
    }

    /// Returns `true` when `option` is declared on this axis.
    pub fn declares(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    /// Resolves a requested option name, substituting the default when it is absent or unknown.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(option) if self.declares(option) => option,
            _ => self.default.as_str(),
        }
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.options.is_empty() {
            return Err(SchemaError::NoOptions {
                axis: self.name.clone(),
            });
        }
        if !self.declares(&self.default) {
            return Err(SchemaError::UndeclaredDefault {
                axis: self.name.clone(),
                default: self.default.clone(),
            });
        }
        Ok(())
    }
}

/// Extra tokens appended when every listed axis resolves to the listed option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompoundRule {
    /// Axis name to required option name.
    pub when: BTreeMap<String, String>,
    /// Tokens appended when the rule matches.
    #[serde(default)]
    pub class: ClassValue,
}

impl CompoundRule {
    /// Creates a rule from `(axis, option)` conditions.
    pub fn new<A, O, I>(when: I, class: impl Into<ClassValue>) -> Self
    where
        A: Into<String>,
        O: Into<String>,
        I: IntoIterator<Item = (A, O)>,
    {
        Self {
            when: when
                .into_iter()
                .map(|(axis, option)| (axis.into(), option.into()))
                .collect(),
            class: class.into(),
        }
    }
}

/// Complete styling description for one component family.
///
/// Deserializing a bare schema does not check its invariants; call [`VariantSchema::validate`]
/// or load it through [`crate::VariantCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantSchema {
    /// Tokens always emitted first.
    #[serde(default)]
    pub base: ClassValue,
    /// Axes in token-emission order.
    #[serde(default)]
    pub axes: Vec<Axis>,
    /// Compound rules in evaluation order.
    #[serde(default)]
    pub compound: Vec<CompoundRule>,
}

impl VariantSchema {
    /// Starts a validated builder.
    pub fn builder() -> VariantSchemaBuilder {
        VariantSchemaBuilder::default()
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Checks every structural invariant of the schema.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, scanning axes before compound rules.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (index, axis) in self.axes.iter().enumerate() {
            axis.validate()?;
            if self.axes[..index].iter().any(|prior| prior.name == axis.name) {
                return Err(SchemaError::DuplicateAxis {
                    axis: axis.name.clone(),
                });
            }
        }

        for (rule_index, rule) in self.compound.iter().enumerate() {
            for (axis_name, option) in &rule.when {
                let axis = self
                    .axis(axis_name)
                    .ok_or_else(|| SchemaError::UnknownCompoundAxis {
                        rule: rule_index,
                        axis: axis_name.clone(),
                    })?;
                if !axis.declares(option) {
                    return Err(SchemaError::UnknownCompoundOption {
                        rule: rule_index,
                        axis: axis_name.clone(),
                        option: option.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Incremental [`VariantSchema`] construction that validates on [`VariantSchemaBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct VariantSchemaBuilder {
    schema: VariantSchema,
}

impl VariantSchemaBuilder {
    /// Sets the base tokens.
    pub fn base(mut self, base: impl Into<ClassValue>) -> Self {
        self.schema.base = base.into();
        self
    }

    /// Appends an axis after those already declared.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.schema.axes.push(axis);
        self
    }

    /// Appends a compound rule after those already declared.
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.schema.compound.push(rule);
        self
    }

    /// Validates and returns the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the assembled schema violates an invariant.
    pub fn build(self) -> Result<VariantSchema, SchemaError> {
        self.schema.validate()?;
        Ok(self.schema)
    }
}
