//! Last-declared-wins conflict merging for utility class tokens.
//!
//! Each token is keyed by its sorted variant modifiers, its important flag, and the utility
//! family it sets. Walking the sequence from the end, the first token seen for a key survives and
//! claims that key plus any narrower families it overrides (a later `p-4` removes an earlier
//! `px-2`, a later `px-2` leaves an earlier `p-4` alone). Tokens outside the known families key on
//! their full text, so exact duplicates collapse and everything else passes through.

use std::collections::HashSet;

use crate::class_value::{flatten, ClassValue};

type Group = (&'static str, &'static [&'static str]);

const NO_CONFLICTS: &[&str] = &[];

const PADDING_SIDES: &[&str] = &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"];
const MARGIN_SIDES: &[&str] = &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"];
const INSET_SIDES: &[&str] = &["inset-x", "inset-y", "top", "right", "bottom", "left"];
const ROUNDED_SIDES: &[&str] = &[
    "rounded-s",
    "rounded-e",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-ss",
    "rounded-se",
    "rounded-ee",
    "rounded-es",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
];
const BORDER_WIDTH_SIDES: &[&str] = &[
    "border-w-x",
    "border-w-y",
    "border-w-s",
    "border-w-e",
    "border-w-t",
    "border-w-r",
    "border-w-b",
    "border-w-l",
];
const BORDER_COLOR_SIDES: &[&str] = &[
    "border-color-x",
    "border-color-y",
    "border-color-s",
    "border-color-e",
    "border-color-t",
    "border-color-r",
    "border-color-b",
    "border-color-l",
];

const SIZE_AXES: &[&str] = &["w", "h"];
const PX_SIDES: &[&str] = &["pr", "pl"];
const PY_SIDES: &[&str] = &["pt", "pb"];
const MX_SIDES: &[&str] = &["mr", "ml"];
const MY_SIDES: &[&str] = &["mt", "mb"];
const GAP_AXES: &[&str] = &["gap-x", "gap-y"];
const INSET_X_SIDES: &[&str] = &["right", "left"];
const INSET_Y_SIDES: &[&str] = &["top", "bottom"];
const OVERFLOW_AXES: &[&str] = &["overflow-x", "overflow-y"];
const SCALE_AXES: &[&str] = &["scale-x", "scale-y"];
const BORDER_WIDTH_X: &[&str] = &["border-w-r", "border-w-l"];
const BORDER_WIDTH_Y: &[&str] = &["border-w-t", "border-w-b"];
const BORDER_COLOR_X: &[&str] = &["border-color-r", "border-color-l"];
const BORDER_COLOR_Y: &[&str] = &["border-color-t", "border-color-b"];
const ROUNDED_START: &[&str] = &["rounded-ss", "rounded-es"];
const ROUNDED_END: &[&str] = &["rounded-se", "rounded-ee"];
const ROUNDED_TOP: &[&str] = &["rounded-tl", "rounded-tr"];
const ROUNDED_RIGHT: &[&str] = &["rounded-tr", "rounded-br"];
const ROUNDED_BOTTOM: &[&str] = &["rounded-br", "rounded-bl"];
const ROUNDED_LEFT: &[&str] = &["rounded-tl", "rounded-bl"];

const FIXED_PREFIXES: &[(&str, Group)] = &[
    ("min-w-", ("min-w", NO_CONFLICTS)),
    ("min-h-", ("min-h", NO_CONFLICTS)),
    ("max-w-", ("max-w", NO_CONFLICTS)),
    ("max-h-", ("max-h", NO_CONFLICTS)),
    ("size-", ("size", SIZE_AXES)),
    ("w-", ("w", NO_CONFLICTS)),
    ("h-", ("h", NO_CONFLICTS)),
    ("p-", ("p", PADDING_SIDES)),
    ("px-", ("px", PX_SIDES)),
    ("py-", ("py", PY_SIDES)),
    ("ps-", ("ps", NO_CONFLICTS)),
    ("pe-", ("pe", NO_CONFLICTS)),
    ("pt-", ("pt", NO_CONFLICTS)),
    ("pr-", ("pr", NO_CONFLICTS)),
    ("pb-", ("pb", NO_CONFLICTS)),
    ("pl-", ("pl", NO_CONFLICTS)),
    ("m-", ("m", MARGIN_SIDES)),
    ("mx-", ("mx", MX_SIDES)),
    ("my-", ("my", MY_SIDES)),
    ("ms-", ("ms", NO_CONFLICTS)),
    ("me-", ("me", NO_CONFLICTS)),
    ("mt-", ("mt", NO_CONFLICTS)),
    ("mr-", ("mr", NO_CONFLICTS)),
    ("mb-", ("mb", NO_CONFLICTS)),
    ("ml-", ("ml", NO_CONFLICTS)),
    ("gap-x-", ("gap-x", NO_CONFLICTS)),
    ("gap-y-", ("gap-y", NO_CONFLICTS)),
    ("gap-", ("gap", GAP_AXES)),
    ("space-x-", ("space-x", NO_CONFLICTS)),
    ("space-y-", ("space-y", NO_CONFLICTS)),
    ("inset-x-", ("inset-x", INSET_X_SIDES)),
    ("inset-y-", ("inset-y", INSET_Y_SIDES)),
    ("inset-", ("inset", INSET_SIDES)),
    ("top-", ("top", NO_CONFLICTS)),
    ("right-", ("right", NO_CONFLICTS)),
    ("bottom-", ("bottom", NO_CONFLICTS)),
    ("left-", ("left", NO_CONFLICTS)),
    ("z-", ("z", NO_CONFLICTS)),
    ("overflow-x-", ("overflow-x", NO_CONFLICTS)),
    ("overflow-y-", ("overflow-y", NO_CONFLICTS)),
    ("overflow-", ("overflow", OVERFLOW_AXES)),
    ("opacity-", ("opacity", NO_CONFLICTS)),
    ("shadow-", ("shadow", NO_CONFLICTS)),
    ("transition-", ("transition", NO_CONFLICTS)),
    ("duration-", ("duration", NO_CONFLICTS)),
    ("ease-", ("ease", NO_CONFLICTS)),
    ("delay-", ("delay", NO_CONFLICTS)),
    ("animate-", ("animate", NO_CONFLICTS)),
    ("cursor-", ("cursor", NO_CONFLICTS)),
    ("translate-x-", ("translate-x", NO_CONFLICTS)),
    ("translate-y-", ("translate-y", NO_CONFLICTS)),
    ("scale-x-", ("scale-x", NO_CONFLICTS)),
    ("scale-y-", ("scale-y", NO_CONFLICTS)),
    ("scale-", ("scale", SCALE_AXES)),
    ("rotate-", ("rotate", NO_CONFLICTS)),
    ("origin-", ("origin", NO_CONFLICTS)),
    ("items-", ("align-items", NO_CONFLICTS)),
    ("justify-items-", ("justify-items", NO_CONFLICTS)),
    ("justify-self-", ("justify-self", NO_CONFLICTS)),
    ("justify-", ("justify-content", NO_CONFLICTS)),
    ("self-", ("align-self", NO_CONFLICTS)),
    ("content-", ("align-content", NO_CONFLICTS)),
    ("shrink-", ("shrink", NO_CONFLICTS)),
    ("grow-", ("grow", NO_CONFLICTS)),
    ("basis-", ("basis", NO_CONFLICTS)),
    ("select-", ("select", NO_CONFLICTS)),
    ("pointer-events-", ("pointer-events", NO_CONFLICTS)),
    ("tracking-", ("tracking", NO_CONFLICTS)),
    ("leading-", ("leading", NO_CONFLICTS)),
    ("whitespace-", ("whitespace", NO_CONFLICTS)),
    ("line-clamp-", ("line-clamp", NO_CONFLICTS)),
    ("aspect-", ("aspect", NO_CONFLICTS)),
    ("backdrop-blur", ("backdrop-blur", NO_CONFLICTS)),
    ("blur-", ("blur", NO_CONFLICTS)),
    ("grayscale-", ("grayscale", NO_CONFLICTS)),
    ("fill-", ("fill", NO_CONFLICTS)),
];

const KEYWORDS: &[(&str, Group)] = &[
    ("block", ("display", NO_CONFLICTS)),
    ("inline-block", ("display", NO_CONFLICTS)),
    ("inline", ("display", NO_CONFLICTS)),
    ("flex", ("display", NO_CONFLICTS)),
    ("inline-flex", ("display", NO_CONFLICTS)),
    ("grid", ("display", NO_CONFLICTS)),
    ("inline-grid", ("display", NO_CONFLICTS)),
    ("contents", ("display", NO_CONFLICTS)),
    ("table", ("display", NO_CONFLICTS)),
    ("hidden", ("display", NO_CONFLICTS)),
    ("static", ("position", NO_CONFLICTS)),
    ("fixed", ("position", NO_CONFLICTS)),
    ("absolute", ("position", NO_CONFLICTS)),
    ("relative", ("position", NO_CONFLICTS)),
    ("sticky", ("position", NO_CONFLICTS)),
    ("truncate", ("text-overflow", NO_CONFLICTS)),
    ("uppercase", ("text-transform", NO_CONFLICTS)),
    ("lowercase", ("text-transform", NO_CONFLICTS)),
    ("capitalize", ("text-transform", NO_CONFLICTS)),
    ("normal-case", ("text-transform", NO_CONFLICTS)),
    ("underline", ("text-decoration", NO_CONFLICTS)),
    ("overline", ("text-decoration", NO_CONFLICTS)),
    ("line-through", ("text-decoration", NO_CONFLICTS)),
    ("no-underline", ("text-decoration", NO_CONFLICTS)),
    ("italic", ("font-style", NO_CONFLICTS)),
    ("not-italic", ("font-style", NO_CONFLICTS)),
    ("sr-only", ("sr", NO_CONFLICTS)),
    ("not-sr-only", ("sr", NO_CONFLICTS)),
    ("grayscale", ("grayscale", NO_CONFLICTS)),
    ("blur", ("blur", NO_CONFLICTS)),
    ("transition", ("transition", NO_CONFLICTS)),
    ("shadow", ("shadow", NO_CONFLICTS)),
    ("transform", ("transform", NO_CONFLICTS)),
    ("shrink", ("shrink", NO_CONFLICTS)),
    ("grow", ("grow", NO_CONFLICTS)),
    ("rounded", ("rounded", ROUNDED_SIDES)),
    ("border", ("border-w", BORDER_WIDTH_SIDES)),
    ("ring", ("ring-w", NO_CONFLICTS)),
    ("ring-inset", ("ring-inset", NO_CONFLICTS)),
    ("outline", ("outline-style", NO_CONFLICTS)),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

/// What an arbitrary `[...]` value most plausibly carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArbitraryKind {
    Length,
    Color,
    Number,
    Other,
}

fn arbitrary_kind(value: &str) -> Option<ArbitraryKind> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;
    if inner.starts_with("length:") {
        return Some(ArbitraryKind::Length);
    }
    if inner.starts_with("color:") {
        return Some(ArbitraryKind::Color);
    }
    if ["hsl(", "hsla(", "rgb(", "rgba(", "oklch(", "#"]
        .iter()
        .any(|prefix| inner.starts_with(prefix))
    {
        return Some(ArbitraryKind::Color);
    }
    if inner.parse::<f64>().is_ok() {
        return Some(ArbitraryKind::Number);
    }
    let numeric_head = inner.trim_end_matches(|ch: char| ch.is_ascii_alphabetic() || ch == '%');
    let unit = &inner[numeric_head.len()..];
    if !numeric_head.is_empty()
        && numeric_head.parse::<f64>().is_ok()
        && ["px", "rem", "em", "%", "vh", "vw", "ch", "pt"].contains(&unit)
    {
        return Some(ArbitraryKind::Length);
    }
    Some(ArbitraryKind::Other)
}

/// Bare widths such as `2`, `0.5`, `px`, or an arbitrary length/number.
fn is_width_value(value: &str) -> bool {
    if value == "px" || (!value.is_empty() && value.parse::<f64>().is_ok()) {
        return true;
    }
    matches!(
        arbitrary_kind(value),
        Some(ArbitraryKind::Length | ArbitraryKind::Number)
    )
}

fn side_group(side: &str, widths: bool) -> Option<Group> {
    let group = match (side, widths) {
        ("x", true) => ("border-w-x", BORDER_WIDTH_X),
        ("y", true) => ("border-w-y", BORDER_WIDTH_Y),
        ("s", true) => ("border-w-s", NO_CONFLICTS),
        ("e", true) => ("border-w-e", NO_CONFLICTS),
        ("t", true) => ("border-w-t", NO_CONFLICTS),
        ("r", true) => ("border-w-r", NO_CONFLICTS),
        ("b", true) => ("border-w-b", NO_CONFLICTS),
        ("l", true) => ("border-w-l", NO_CONFLICTS),
        ("x", false) => ("border-color-x", BORDER_COLOR_X),
        ("y", false) => ("border-color-y", BORDER_COLOR_Y),
        ("s", false) => ("border-color-s", NO_CONFLICTS),
        ("e", false) => ("border-color-e", NO_CONFLICTS),
        ("t", false) => ("border-color-t", NO_CONFLICTS),
        ("r", false) => ("border-color-r", NO_CONFLICTS),
        ("b", false) => ("border-color-b", NO_CONFLICTS),
        ("l", false) => ("border-color-l", NO_CONFLICTS),
        _ => return None,
    };
    Some(group)
}

fn border_group(value: &str) -> Group {
    let (head, rest) = value.split_once('-').unwrap_or((value, ""));
    let is_side = matches!(head, "x" | "y" | "s" | "e" | "t" | "r" | "b" | "l");
    if is_side {
        if rest.is_empty() || is_width_value(rest) {
            if let Some(group) = side_group(head, true) {
                return group;
            }
        } else if let Some(group) = side_group(head, false) {
            return group;
        }
    }
    if LINE_STYLES.contains(&value) {
        ("border-style", NO_CONFLICTS)
    } else if is_width_value(value) {
        ("border-w", BORDER_WIDTH_SIDES)
    } else {
        ("border-color", BORDER_COLOR_SIDES)
    }
}

fn rounded_group(value: &str) -> Group {
    let (head, _) = value.split_once('-').unwrap_or((value, ""));
    match head {
        "s" => ("rounded-s", ROUNDED_START),
        "e" => ("rounded-e", ROUNDED_END),
        "t" => ("rounded-t", ROUNDED_TOP),
        "r" => ("rounded-r", ROUNDED_RIGHT),
        "b" => ("rounded-b", ROUNDED_BOTTOM),
        "l" => ("rounded-l", ROUNDED_LEFT),
        "ss" => ("rounded-ss", NO_CONFLICTS),
        "se" => ("rounded-se", NO_CONFLICTS),
        "ee" => ("rounded-ee", NO_CONFLICTS),
        "es" => ("rounded-es", NO_CONFLICTS),
        "tl" => ("rounded-tl", NO_CONFLICTS),
        "tr" => ("rounded-tr", NO_CONFLICTS),
        "br" => ("rounded-br", NO_CONFLICTS),
        "bl" => ("rounded-bl", NO_CONFLICTS),
        _ => ("rounded", ROUNDED_SIDES),
    }
}

fn text_group(value: &str) -> Group {
    if FONT_SIZES.contains(&value) || arbitrary_kind(value) == Some(ArbitraryKind::Length) {
        ("font-size", NO_CONFLICTS)
    } else if TEXT_ALIGNS.contains(&value) {
        ("text-align", NO_CONFLICTS)
    } else if matches!(value, "ellipsis" | "clip") {
        ("text-overflow", NO_CONFLICTS)
    } else if matches!(value, "wrap" | "nowrap" | "balance" | "pretty") {
        ("text-wrap", NO_CONFLICTS)
    } else {
        ("text-color", NO_CONFLICTS)
    }
}

fn font_group(value: &str) -> Group {
    if FONT_WEIGHTS.contains(&value)
        || matches!(arbitrary_kind(value), Some(ArbitraryKind::Number))
    {
        ("font-weight", NO_CONFLICTS)
    } else {
        ("font-family", NO_CONFLICTS)
    }
}

fn bg_group(value: &str) -> Group {
    if value.starts_with("gradient-") || value == "none" {
        ("bg-image", NO_CONFLICTS)
    } else if matches!(value, "fixed" | "local" | "scroll") {
        ("bg-attachment", NO_CONFLICTS)
    } else if matches!(value, "auto" | "cover" | "contain") {
        ("bg-size", NO_CONFLICTS)
    } else if value.starts_with("no-repeat") || value.starts_with("repeat") {
        ("bg-repeat", NO_CONFLICTS)
    } else {
        ("bg-color", NO_CONFLICTS)
    }
}

fn flex_group(value: &str) -> Group {
    match value {
        "row" | "row-reverse" | "col" | "col-reverse" => ("flex-direction", NO_CONFLICTS),
        "wrap" | "wrap-reverse" | "nowrap" => ("flex-wrap", NO_CONFLICTS),
        _ => ("flex", NO_CONFLICTS),
    }
}

fn classify(utility: &str) -> Option<Group> {
    if let Some((_, group)) = KEYWORDS.iter().find(|(keyword, _)| *keyword == utility) {
        return Some(*group);
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return Some(text_group(value));
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(font_group(value));
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return Some(bg_group(value));
    }
    if let Some(value) = utility.strip_prefix("flex-") {
        return Some(flex_group(value));
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return Some(rounded_group(value));
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(border_group(value));
    }
    if let Some(value) = utility.strip_prefix("ring-offset-") {
        return Some(if is_width_value(value) {
            ("ring-offset-w", NO_CONFLICTS)
        } else {
            ("ring-offset-color", NO_CONFLICTS)
        });
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        return Some(if is_width_value(value) {
            ("ring-w", NO_CONFLICTS)
        } else {
            ("ring-color", NO_CONFLICTS)
        });
    }
    if let Some(value) = utility.strip_prefix("outline-") {
        return Some(if value.starts_with("offset-") {
            ("outline-offset", NO_CONFLICTS)
        } else if LINE_STYLES.contains(&value) {
            ("outline-style", NO_CONFLICTS)
        } else if is_width_value(value) {
            ("outline-w", NO_CONFLICTS)
        } else {
            ("outline-color", NO_CONFLICTS)
        });
    }
    if let Some(value) = utility.strip_prefix("stroke-") {
        return Some(if is_width_value(value) {
            ("stroke-w", NO_CONFLICTS)
        } else {
            ("stroke-color", NO_CONFLICTS)
        });
    }
    if let Some(value) = utility.strip_prefix("object-") {
        return Some(
            if matches!(value, "contain" | "cover" | "fill" | "none" | "scale-down") {
                ("object-fit", NO_CONFLICTS)
            } else {
                ("object-position", NO_CONFLICTS)
            },
        );
    }

    FIXED_PREFIXES
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

/// One token split into its conflict key parts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedToken<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    utility: &'a str,
}

fn parse_token(token: &str) -> ParsedToken<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    let mut utility = &token[start..];
    let mut important = false;
    if let Some(stripped) = utility.strip_prefix('!') {
        utility = stripped;
        important = true;
    } else if let Some(stripped) = utility.strip_suffix('!') {
        utility = stripped;
        important = true;
    }
    modifiers.sort_unstable();
    ParsedToken {
        modifiers,
        important,
        utility,
    }
}

fn conflict_prefix(parsed: &ParsedToken<'_>) -> String {
    let mut prefix = parsed.modifiers.join(":");
    prefix.push(':');
    if parsed.important {
        prefix.push('!');
    }
    prefix
}

/// Family key and the narrower families a token overrides.
fn conflict_keys(token: &str) -> (String, Vec<String>) {
    let parsed = parse_token(token);
    let prefix = conflict_prefix(&parsed);
    let utility = parsed.utility.strip_prefix('-').unwrap_or(parsed.utility);

    if let Some(property) = arbitrary_property(utility) {
        return (format!("{prefix}[{property}]"), Vec::new());
    }

    match classify(utility) {
        Some((group, conflicts)) => (
            format!("{prefix}{group}"),
            conflicts
                .iter()
                .map(|conflict| format!("{prefix}{conflict}"))
                .collect(),
        ),
        None => (format!("{prefix}#{utility}"), Vec::new()),
    }
}

/// `[mask-type:luminance]` keys on `mask-type`.
fn arbitrary_property(utility: &str) -> Option<&str> {
    let inner = utility.strip_prefix('[')?.strip_suffix(']')?;
    inner.split_once(':').map(|(property, _)| property)
}

/// Removes conflicting tokens, keeping the last token per property family.
///
/// Surviving tokens keep their relative order.
pub fn merge<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut claimed = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        let (key, overrides) = conflict_keys(token);
        if claimed.contains(&key) {
            continue;
        }
        claimed.insert(key);
        claimed.extend(overrides);
        kept.push(token.to_string());
    }

    kept.reverse();
    kept
}

/// Flattens, merges, and joins `input` into a class attribute value.
///
/// ```
/// use ui_kit_core::{classes, cn};
///
/// assert_eq!(cn(classes!["px-4 py-2 bg-red-500", "bg-blue-500"]), "px-4 py-2 bg-blue-500");
/// ```
pub fn cn(input: impl Into<ClassValue>) -> String {
    merge(&flatten(&input.into())).join(" ")
}
