//! Resolution of a [`VariantSchema`] and a caller selection into an ordered token sequence.

use crate::class_value::{flatten, ClassValue};
use crate::merge::merge;
use crate::schema::VariantSchema;

/// Caller-supplied partial mapping of axis name to option name.
///
/// Later assignments to the same axis replace earlier ones. Axis names the schema does not
/// declare are carried along and ignored at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> Selection<'a> {
    /// Creates an empty selection; every axis resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selection with `axis` set to `option`.
    pub fn with(mut self, axis: &'a str, option: &'a str) -> Self {
        self.set(axis, option);
        self
    }

    /// Sets `axis` to `option` in place.
    pub fn set(&mut self, axis: &'a str, option: &'a str) {
        match self.entries.iter_mut().find(|(name, _)| *name == axis) {
            Some(entry) => entry.1 = option,
            None => self.entries.push((axis, option)),
        }
    }

    /// Returns the option chosen for `axis`, if any.
    pub fn get(&self, axis: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == axis)
            .map(|(_, option)| *option)
    }

    /// Returns `true` when no axis is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for Selection<'a> {
    fn from(entries: [(&'a str, &'a str); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Selection<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (axis, option) in iter {
            selection.set(axis, option);
        }
        selection
    }
}

/// Ordered, unmerged token sequence produced for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    tokens: Vec<String>,
}

impl ResolvedStyle {
    /// Tokens in emission order, before conflict merging.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consumes the style, returning its raw tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Tokens after conflict merging.
    pub fn merged(&self) -> Vec<String> {
        merge(&self.tokens)
    }

    /// Merged tokens joined into a class attribute value.
    pub fn to_class(&self) -> String {
        self.merged().join(" ")
    }
}

impl VariantSchema {
    /// Returns `(axis, resolved option)` pairs in axis declaration order.
    ///
    /// Absent or undeclared selections resolve to the axis default.
    pub fn resolved_options<'s>(&'s self, selection: &Selection<'s>) -> Vec<(&'s str, &'s str)> {
        self.axes
            .iter()
            .map(|axis| (axis.name.as_str(), axis.resolve(selection.get(&axis.name))))
            .collect()
    }

    /// Resolves this schema for `selection`, appending `overrides` last.
    pub fn resolve(&self, selection: &Selection<'_>, overrides: &ClassValue) -> ResolvedStyle {
        resolve(self, selection, overrides)
    }
}

/// Produces the ordered token sequence for one component instance.
///
/// The sequence is the base tokens, then each axis's selected-or-default option in declaration
/// order, then every matching compound rule in declaration order, then the flattened overrides.
pub fn resolve(
    schema: &VariantSchema,
    selection: &Selection<'_>,
    overrides: &ClassValue,
) -> ResolvedStyle {
    let mut tokens = flatten(&schema.base);
    let resolved = schema.resolved_options(selection);

    for (axis, (_, option)) in schema.axes.iter().zip(&resolved) {
        if let Some(value) = axis.options.get(*option) {
            tokens.extend(flatten(value));
        }
    }

    for rule in &schema.compound {
        let matches = rule.when.iter().all(|(axis_name, expected)| {
            resolved
                .iter()
                .any(|(name, option)| name == axis_name && *option == expected.as_str())
        });
        if matches {
            tokens.extend(flatten(&rule.class));
        }
    }

    tokens.extend(flatten(overrides));
    ResolvedStyle { tokens }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::classes;
    use crate::schema::{Axis, CompoundRule};

    fn task_schema() -> VariantSchema {
        VariantSchema::builder()
            .base(vec!["flex items-center", "p-4"])
            .axis(
                Axis::new("size", "md")
                    .option("sm", "h-8")
                    .option("md", "h-10")
                    .option("lg", vec!["h-12", "text-lg"]),
            )
            .axis(
                Axis::new("status", "pending")
                    .option("pending", "opacity-100")
                    .option("active", "ring-2")
                    .option("locked", ""),
            )
            .compound(CompoundRule::new([("size", "lg"), ("status", "active")], "shadow-lg"))
            .compound(CompoundRule::new([("status", "active")], "animate-pulse"))
            .build()
            .expect("valid schema")
    }

    #[test]
    fn emits_base_then_axes_in_declaration_order() {
        let schema = task_schema();
        let style = resolve(
            &schema,
            &Selection::from([("status", "locked"), ("size", "lg")]),
            &ClassValue::Empty,
        );
        assert_eq!(
            style.tokens(),
            ["flex", "items-center", "p-4", "h-12", "text-lg"]
        );
    }

    #[test]
    fn empty_selection_equals_explicit_defaults() {
        let schema = task_schema();
        let implicit = resolve(&schema, &Selection::new(), &ClassValue::Empty);
        let explicit = resolve(
            &schema,
            &Selection::from([("size", "md"), ("status", "pending")]),
            &ClassValue::Empty,
        );
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn unknown_options_and_axes_fall_back_silently() {
        let schema = task_schema();
        let style = resolve(
            &schema,
            &Selection::new()
                .with("size", "gigantic")
                .with("flavor", "mint"),
            &ClassValue::Empty,
        );
        assert_eq!(
            style.tokens(),
            ["flex", "items-center", "p-4", "h-10", "opacity-100"]
        );
    }

    #[test]
    fn compound_rule_fires_only_on_full_match() {
        let schema = task_schema();
        let both = resolve(
            &schema,
            &Selection::from([("size", "lg"), ("status", "active")]),
            &ClassValue::Empty,
        );
        assert!(both.tokens().iter().any(|token| token == "shadow-lg"));
        assert_eq!(both.tokens().last().map(String::as_str), Some("animate-pulse"));

        for selection in [
            Selection::from([("size", "md"), ("status", "active")]),
            Selection::from([("size", "lg"), ("status", "pending")]),
        ] {
            let style = resolve(&schema, &selection, &ClassValue::Empty);
            assert!(!style.tokens().iter().any(|token| token == "shadow-lg"));
        }
    }

    #[test]
    fn overrides_are_appended_last() {
        let schema = task_schema();
        let style = resolve(
            &schema,
            &Selection::from([("status", "active")]),
            &classes!["p-2", ClassValue::map([("ring-4", true), ("hidden", false)])],
        );
        assert_eq!(
            style.tokens(),
            [
                "flex",
                "items-center",
                "p-4",
                "h-10",
                "ring-2",
                "animate-pulse",
                "p-2",
                "ring-4",
            ]
        );
        assert_eq!(style.to_class(), "flex items-center h-10 animate-pulse p-2 ring-4");
    }

    #[test]
    fn schema_without_axes_yields_base_and_overrides() {
        let schema = VariantSchema::builder()
            .base("block")
            .build()
            .expect("valid");
        let style = schema.resolve(&Selection::new(), &ClassValue::from("mt-2"));
        assert_eq!(style.into_tokens(), vec!["block", "mt-2"]);
    }

    #[test]
    fn resolution_is_deterministic() {
        let schema = task_schema();
        let selection = Selection::from([("size", "lg"), ("status", "active")]);
        let overrides = ClassValue::from("mt-1");
        assert_eq!(
            resolve(&schema, &selection, &overrides),
            resolve(&schema, &selection, &overrides)
        );
    }

    #[test]
    fn later_selection_entries_replace_earlier_ones() {
        let selection = Selection::new().with("size", "sm").with("size", "lg");
        assert_eq!(selection.get("size"), Some("lg"));
        assert!(!selection.is_empty());
    }
}
