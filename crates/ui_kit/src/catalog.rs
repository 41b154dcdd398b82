//! Built-in variant schemas compiled from `variants.toml`.
//!
//! `build.rs` validates the TOML and embeds it as JSON; the catalog is parsed once per process
//! on first use.

use std::sync::OnceLock;

use leptos::logging;
use ui_kit_core::{cn, ClassValue, Selection, VariantCatalog};

include!(concat!(env!("OUT_DIR"), "/variant_catalog_generated.rs"));

/// Returns the built-in component catalog.
pub fn builtin_catalog() -> &'static VariantCatalog {
    static CATALOG: OnceLock<VariantCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        VariantCatalog::from_json_str(VARIANT_CATALOG_JSON)
            .expect("generated variant catalog should parse")
    })
}

/// Resolves `component` for `selection`, appends `overrides`, and merges the result into a class
/// attribute value.
///
/// An unknown component logs a warning and renders the overrides alone.
pub fn variant_class(
    component: &str,
    selection: &Selection<'_>,
    overrides: impl Into<ClassValue>,
) -> String {
    let overrides = overrides.into();
    match builtin_catalog().get(component) {
        Some(schema) => schema.resolve(selection, &overrides).to_class(),
        None => {
            logging::warn!("ui_kit: no variant schema for `{component}`, rendering overrides only");
            cn(overrides)
        }
    }
}

/// Base-only shorthand for schemas without axes.
pub(crate) fn base_class(component: &str, overrides: impl Into<ClassValue>) -> String {
    variant_class(component, &Selection::new(), overrides)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_component_schema_is_present() {
        let catalog = builtin_catalog();
        for name in [
            "avatar",
            "avatar_group",
            "avatar_overflow",
            "badge",
            "card",
            "card_header",
            "card_title",
            "card_description",
            "card_content",
            "card_footer",
            "checkbox",
            "checkbox_mark",
            "circular_progress",
            "coin",
            "coin_display",
            "helper_text",
            "input",
            "input_group",
            "label",
            "progress_indicator",
            "progress_label",
            "progress_track",
            "radio",
            "radio_dot",
            "star_button",
            "star_icon",
            "star_rating",
            "task_card",
            "task_list_check",
            "task_list_item",
            "task_list_title",
            "toggle",
            "toggle_thumb",
        ] {
            assert!(catalog.get(name).is_some(), "missing schema `{name}`");
        }
    }

    #[test]
    fn badge_defaults_and_overrides() {
        assert_eq!(
            variant_class("badge", &Selection::new(), ""),
            "inline-flex items-center rounded-full font-medium transition-colors \
bg-[hsl(var(--color-surface-secondary))] text-[hsl(var(--color-text-primary))] h-6 px-2.5 \
text-[12px]"
        );
        assert_eq!(
            variant_class(
                "badge",
                &Selection::from([("variant", "success"), ("size", "sm")]),
                "px-4",
            ),
            "inline-flex items-center rounded-full font-medium transition-colors \
bg-[hsl(var(--color-success-subtle))] text-[hsl(var(--color-success))] h-5 text-[11px] px-4"
        );
    }

    #[test]
    fn toggle_thumb_translation_comes_from_compound_rules() {
        let thumb = |size, state| {
            variant_class(
                "toggle_thumb",
                &Selection::from([("size", size), ("state", state)]),
                "",
            )
        };
        assert!(thumb("md", "unchecked").ends_with("h-5 w-5 translate-x-0.5"));
        assert!(thumb("sm", "checked").ends_with("h-4 w-4 translate-x-4"));
        assert!(thumb("lg", "checked").ends_with("h-6 w-6 translate-x-7"));
    }

    #[test]
    fn task_card_status_replaces_base_background() {
        let class = variant_class(
            "task_card",
            &Selection::from([("status", "completed")]),
            ClassValue::Empty,
        );
        assert!(!class.contains("bg-[hsl(var(--color-surface-primary))]"));
        assert!(class.contains("bg-[hsl(var(--color-success-subtle))]"));
        assert!(class.ends_with("shadow-[var(--shadow-card)]"));
    }

    #[test]
    fn unknown_selection_falls_back_to_default() {
        assert_eq!(
            variant_class("coin", &Selection::from([("size", "huge")]), ""),
            variant_class("coin", &Selection::new(), "")
        );
    }

    #[test]
    fn unknown_component_renders_overrides_only() {
        assert_eq!(
            variant_class("tooltip", &Selection::new(), "p-2 p-4 font-bold"),
            "p-4 font-bold"
        );
    }
}
