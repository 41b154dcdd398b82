//! Design-token reference helpers.

/// Wraps a custom-property name as `var(--name)`.
pub fn css_var(name: &str) -> String {
    format!("var(--{name})")
}

/// Wraps a custom-property name as `hsl(var(--name))`.
pub fn hsl_var(name: &str) -> String {
    format!("hsl(var(--{name}))")
}
