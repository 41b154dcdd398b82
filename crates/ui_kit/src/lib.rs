//! Leptos component library built on [`ui_kit_core`].
//!
//! Every component resolves its class attribute from a named variant schema in the built-in
//! catalog (`variants.toml`, validated at build time), appends the caller's `class` override, and
//! merges conflicting utility tokens so the override wins. Stateful widgets follow the controlled
//! contracts in [`ui_kit_core::interaction`]: the caller owns checked and rating values and is
//! told about changes through callbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod primitives;

pub use catalog::{builtin_catalog, variant_class};
pub use primitives::{
    Avatar, AvatarGroup, AvatarRing, AvatarSize, BadgeVariant, Badge, BalanceDisplay, Card,
    CardContent, CardDescription, CardFooter, CardHeader, CardPadding, CardTitle, CardVariant,
    Checkbox, CircularProgress, Coin, CoinDisplay, CoinSize, FieldState, HelperText, Input,
    InputGroup, Label, Progress, ProgressSize, ProgressVariant, Radio, Size, StarRating,
    TaskCard, TaskCardVariant, TaskListItem, TaskStatus, TaskType, Toggle,
};
pub use ui_kit_core::{classes, cn, ClassValue, Selection};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        classes, cn, Avatar, AvatarGroup, AvatarRing, AvatarSize, Badge, BadgeVariant,
        BalanceDisplay, Card, CardContent, CardDescription, CardFooter, CardHeader, CardPadding,
        CardTitle, CardVariant, Checkbox, CircularProgress, Coin, CoinDisplay, CoinSize,
        FieldState, HelperText, Input, InputGroup, Label, Progress, ProgressSize,
        ProgressVariant, Radio, Size, StarRating, TaskCard, TaskCardVariant, TaskListItem,
        TaskStatus, TaskType, Toggle,
    };
}
