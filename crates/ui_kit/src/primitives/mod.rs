//! Leptos components and the typed variant props they resolve against the built-in catalog.

use leptos::*;
use ui_kit_core::{
    classes, cn, fallback_content, fraction, hsl_var, ArcGeometry, BinaryControl, BinaryDisplay,
    FallbackContent, GroupOverflow, ImageFallback, PreviewCommit, Selection, FALLBACK_PLACEHOLDER,
};

use crate::catalog::{base_class, variant_class};

mod controls;
mod data_display;
mod task;

pub use controls::{
    Checkbox, CircularProgress, HelperText, Input, InputGroup, Label, Progress, Radio, StarRating,
    Toggle,
};
pub use data_display::{
    Avatar, AvatarGroup, BalanceDisplay, Badge, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Coin, CoinDisplay,
};
pub use task::{TaskCard, TaskListItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Three-step size scale shared by badges, inputs, binary controls, ratings, and coin displays.
pub enum Size {
    /// Compact.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
}

impl Default for Size {
    fn default() -> Self {
        Self::Md
    }
}

impl Size {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Coin size rendered next to a value of this size.
    pub(crate) fn coin(self) -> CoinSize {
        match self {
            Self::Sm => CoinSize::Sm,
            Self::Md => CoinSize::Md,
            Self::Lg => CoinSize::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Avatar diameters.
pub enum AvatarSize {
    /// 24px.
    Xs,
    /// 32px.
    Sm,
    /// 40px.
    Md,
    /// 48px.
    Lg,
    /// 64px.
    Xl,
    /// 80px.
    Xxl,
    /// 96px.
    Xxxl,
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self::Md
    }
}

impl AvatarSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Xxxl => "3xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Status ring drawn around an avatar.
pub enum AvatarRing {
    /// No ring.
    None,
    /// Surface-colored separator ring.
    Default,
    /// Success ring.
    Success,
    /// Warning ring.
    Warning,
    /// Error ring.
    Error,
    /// Accent ring.
    Accent,
}

impl Default for AvatarRing {
    fn default() -> Self {
        Self::None
    }
}

impl AvatarRing {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Default => "default",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge color schemes.
pub enum BadgeVariant {
    /// Neutral surface.
    Default,
    /// Primary brand color.
    Primary,
    /// Secondary brand color.
    Secondary,
    /// Accent color.
    Accent,
    /// Subtle success.
    Success,
    /// Subtle warning.
    Warning,
    /// Subtle error.
    Error,
    /// Subtle info.
    Info,
    /// Transparent with a border.
    Outline,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card surface treatments.
pub enum CardVariant {
    /// Shadowed surface.
    Elevated,
    /// Bordered surface.
    Outlined,
    /// Secondary fill, no shadow.
    Filled,
    /// Transparent.
    Ghost,
    /// Translucent blurred surface.
    Glass,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Elevated
    }
}

impl CardVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Ghost => "ghost",
            Self::Glass => "glass",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card inner padding.
pub enum CardPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for CardPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl CardPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Coin diameters.
pub enum CoinSize {
    /// 20px.
    Xs,
    /// 24px.
    Sm,
    /// 32px.
    Md,
    /// 40px.
    Lg,
    /// 56px.
    Xl,
    /// 80px.
    Xxl,
}

impl Default for CoinSize {
    fn default() -> Self {
        Self::Md
    }
}

impl CoinSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Validation state for inputs and helper text.
pub enum FieldState {
    /// Neutral.
    Default,
    /// Failed validation.
    Error,
    /// Passed validation.
    Success,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::Default
    }
}

impl FieldState {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Linear progress track heights.
pub enum ProgressSize {
    /// 4px.
    Xs,
    /// 6px.
    Sm,
    /// 8px.
    Md,
    /// 12px.
    Lg,
    /// 16px.
    Xl,
}

impl Default for ProgressSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ProgressSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Progress fill colors.
pub enum ProgressVariant {
    /// Dedicated progress color.
    Default,
    /// Primary brand color.
    Primary,
    /// Accent color.
    Accent,
    /// Success color.
    Success,
    /// Warning color.
    Warning,
    /// Error color.
    Error,
    /// Reward color.
    Reward,
}

impl Default for ProgressVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ProgressVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Reward => "reward",
        }
    }

    /// Stroke color for the circular ring.
    pub(crate) fn stroke_color(self) -> String {
        hsl_var(match self {
            Self::Default => "color-progress",
            Self::Primary => "color-primary",
            Self::Accent => "color-accent",
            Self::Success => "color-success",
            Self::Warning => "color-warning",
            Self::Error => "color-error",
            Self::Reward => "color-reward",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle status of a task.
pub enum TaskStatus {
    /// Not started.
    Pending,
    /// In progress; the only status that offers an action button.
    Active,
    /// Finished.
    Completed,
    /// Not yet available.
    Locked,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TaskStatus {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Locked => "locked",
        }
    }

    /// Text shown in the status badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Completed => "Done",
            Self::Locked => "Locked",
        }
    }

    /// Badge color scheme for the status badge.
    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Pending => BadgeVariant::Default,
            Self::Active => BadgeVariant::Accent,
            Self::Completed => BadgeVariant::Success,
            Self::Locked => BadgeVariant::Outline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Task card density.
pub enum TaskCardVariant {
    /// Shadowed card.
    Default,
    /// Flat bordered card.
    Compact,
}

impl Default for TaskCardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl TaskCardVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Recurrence label shown beside the status badge.
pub enum TaskType {
    /// Resets every day.
    Daily,
    /// Completes once.
    OneTime,
    /// Repeats on a schedule.
    Recurring,
    /// Extra reward task.
    Bonus,
}

impl TaskType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::OneTime => "one-time",
            Self::Recurring => "recurring",
            Self::Bonus => "bonus",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::builtin_catalog;

    fn assert_declared(component: &str, axis: &str, tokens: &[&str]) {
        let schema = builtin_catalog()
            .get(component)
            .unwrap_or_else(|| panic!("missing schema `{component}`"));
        let axis_schema = schema
            .axis(axis)
            .unwrap_or_else(|| panic!("`{component}` has no axis `{axis}`"));
        for token in tokens {
            assert!(
                axis_schema.declares(token),
                "`{component}.{axis}` does not declare `{token}`"
            );
        }
    }

    #[test]
    fn enum_tokens_match_catalog_options() {
        let sizes = [Size::Sm, Size::Md, Size::Lg].map(Size::token);
        for component in ["badge", "input", "toggle", "checkbox", "radio", "star_icon"] {
            assert_declared(component, "size", &sizes);
        }
        assert_declared("coin_display", "size", &sizes);

        assert_declared(
            "avatar",
            "size",
            &[
                AvatarSize::Xs,
                AvatarSize::Sm,
                AvatarSize::Md,
                AvatarSize::Lg,
                AvatarSize::Xl,
                AvatarSize::Xxl,
                AvatarSize::Xxxl,
            ]
            .map(AvatarSize::token),
        );
        assert_declared(
            "avatar",
            "ring",
            &[
                AvatarRing::None,
                AvatarRing::Default,
                AvatarRing::Success,
                AvatarRing::Warning,
                AvatarRing::Error,
                AvatarRing::Accent,
            ]
            .map(AvatarRing::token),
        );
        assert_declared(
            "badge",
            "variant",
            &[
                BadgeVariant::Default,
                BadgeVariant::Primary,
                BadgeVariant::Secondary,
                BadgeVariant::Accent,
                BadgeVariant::Success,
                BadgeVariant::Warning,
                BadgeVariant::Error,
                BadgeVariant::Info,
                BadgeVariant::Outline,
            ]
            .map(BadgeVariant::token),
        );
        assert_declared(
            "card",
            "variant",
            &[
                CardVariant::Elevated,
                CardVariant::Outlined,
                CardVariant::Filled,
                CardVariant::Ghost,
                CardVariant::Glass,
            ]
            .map(CardVariant::token),
        );
        assert_declared(
            "card",
            "padding",
            &[
                CardPadding::None,
                CardPadding::Sm,
                CardPadding::Md,
                CardPadding::Lg,
            ]
            .map(CardPadding::token),
        );
        assert_declared(
            "coin",
            "size",
            &[
                CoinSize::Xs,
                CoinSize::Sm,
                CoinSize::Md,
                CoinSize::Lg,
                CoinSize::Xl,
                CoinSize::Xxl,
            ]
            .map(CoinSize::token),
        );
        let states = [FieldState::Default, FieldState::Error, FieldState::Success]
            .map(FieldState::token);
        assert_declared("input", "state", &states);
        assert_declared("helper_text", "state", &states);
        assert_declared(
            "progress_track",
            "size",
            &[
                ProgressSize::Xs,
                ProgressSize::Sm,
                ProgressSize::Md,
                ProgressSize::Lg,
                ProgressSize::Xl,
            ]
            .map(ProgressSize::token),
        );
        assert_declared(
            "progress_indicator",
            "variant",
            &[
                ProgressVariant::Default,
                ProgressVariant::Primary,
                ProgressVariant::Accent,
                ProgressVariant::Success,
                ProgressVariant::Warning,
                ProgressVariant::Error,
                ProgressVariant::Reward,
            ]
            .map(ProgressVariant::token),
        );
        let statuses = [
            TaskStatus::Pending,
            TaskStatus::Active,
            TaskStatus::Completed,
            TaskStatus::Locked,
        ]
        .map(TaskStatus::token);
        assert_declared("task_card", "status", &statuses);
        assert_declared("task_list_item", "status", &statuses);
        assert_declared(
            "task_card",
            "variant",
            &[TaskCardVariant::Default, TaskCardVariant::Compact].map(TaskCardVariant::token),
        );
    }

    #[test]
    fn task_status_labels_and_badges() {
        let rows = [
            TaskStatus::Pending,
            TaskStatus::Active,
            TaskStatus::Completed,
            TaskStatus::Locked,
        ]
        .map(|status| (status.label(), status.badge_variant()));
        assert_eq!(
            rows,
            [
                ("Pending", BadgeVariant::Default),
                ("Active", BadgeVariant::Accent),
                ("Done", BadgeVariant::Success),
                ("Locked", BadgeVariant::Outline),
            ]
        );
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn defaults_match_catalog_defaults() {
        let default_of = |component: &str, axis: &str| {
            builtin_catalog()
                .get(component)
                .and_then(|schema| schema.axis(axis))
                .map(|axis| axis.default.clone())
        };
        assert_eq!(
            default_of("avatar", "size").as_deref(),
            Some(AvatarSize::default().token())
        );
        assert_eq!(
            default_of("avatar", "ring").as_deref(),
            Some(AvatarRing::default().token())
        );
        assert_eq!(
            default_of("card", "variant").as_deref(),
            Some(CardVariant::default().token())
        );
        assert_eq!(
            default_of("badge", "size").as_deref(),
            Some(Size::default().token())
        );
        assert_eq!(
            default_of("progress_indicator", "variant").as_deref(),
            Some(ProgressVariant::default().token())
        );
    }

    #[test]
    fn ring_stroke_colors_reference_tokens() {
        assert_eq!(
            ProgressVariant::Default.stroke_color(),
            "hsl(var(--color-progress))"
        );
        assert_eq!(
            ProgressVariant::Reward.stroke_color(),
            "hsl(var(--color-reward))"
        );
        assert_eq!(TaskType::OneTime.token(), "one-time");
        assert_eq!(bool_token(true), "true");
    }
}
