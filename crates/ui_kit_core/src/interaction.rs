//! Controlled interaction contracts for toggle-family widgets, star ratings, and avatar images.
//!
//! Two families are kept deliberately separate. [`BinaryControl`] never owns truth: activation
//! only reports the value the caller should store next. [`PreviewCommit`] owns a transient
//! preview that is shown until the pointer leaves, while commits still go through the caller.

/// Display state of a binary controlled widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryDisplay {
    /// Externally checked.
    Checked,
    /// Externally unchecked.
    Unchecked,
    /// Caller-driven mixed state; never produced by activation.
    Indeterminate,
}

impl BinaryDisplay {
    /// Stable state token for `data-*` hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
            Self::Indeterminate => "indeterminate",
        }
    }

    /// Whether the control renders its filled/accent surface.
    pub fn is_filled(self) -> bool {
        !matches!(self, Self::Unchecked)
    }
}

/// Toggle, checkbox, and radio contract: the caller owns `checked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryControl {
    /// Caller-owned value.
    pub checked: bool,
    /// Caller-owned mixed display flag (checkbox only).
    pub indeterminate: bool,
    /// Ignore activation entirely.
    pub disabled: bool,
    /// Render the value but never emit changes.
    pub readonly: bool,
}

impl BinaryControl {
    /// Creates an enabled control showing `checked`.
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }

    /// Sets the mixed display flag.
    pub fn with_indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Sets the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the readonly flag.
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Returns `true` when activation may emit a change.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.readonly
    }

    /// Value the change callback receives for one activation, or `None` when inert.
    pub fn next_value(&self) -> Option<bool> {
        self.is_interactive().then_some(!self.checked)
    }

    /// Handles one activation, invoking `on_change` with the flipped value when interactive.
    ///
    /// The control itself is left untouched; the caller re-renders with its new value.
    pub fn activate(&self, on_change: impl FnOnce(bool)) {
        if let Some(next) = self.next_value() {
            on_change(next);
        }
    }

    /// Current display state. A checked value takes precedence over the mixed flag.
    pub fn display(&self) -> BinaryDisplay {
        if self.checked {
            BinaryDisplay::Checked
        } else if self.indeterminate {
            BinaryDisplay::Indeterminate
        } else {
            BinaryDisplay::Unchecked
        }
    }

    /// `aria-checked` value; the mixed flag reports `"mixed"`.
    pub fn aria_checked(&self) -> &'static str {
        if self.indeterminate {
            "mixed"
        } else if self.checked {
            "true"
        } else {
            "false"
        }
    }
}

/// Preview-then-commit contract used by the star rating.
///
/// Option indices are zero-based; values (preview, committed, emitted) are one-based counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewCommit {
    preview: Option<usize>,
    readonly: bool,
}

impl PreviewCommit {
    /// Creates a widget state with no preview.
    pub fn new(readonly: bool) -> Self {
        Self {
            preview: None,
            readonly,
        }
    }

    /// Whether previews and commits are suppressed.
    pub fn readonly(&self) -> bool {
        self.readonly
    }

    /// Current uncommitted value, if the pointer is over an option.
    pub fn preview(&self) -> Option<usize> {
        self.preview
    }

    /// Pointer entered option `index`; previews `index + 1`.
    pub fn pointer_enter(&mut self, index: usize) {
        if !self.readonly {
            self.preview = Some(index + 1);
        }
    }

    /// Pointer left the whole widget; drops the preview.
    pub fn pointer_leave(&mut self) {
        if !self.readonly {
            self.preview = None;
        }
    }

    /// Value a commit on option `index` emits, or `None` when readonly.
    pub fn commit_value(&self, index: usize) -> Option<usize> {
        (!self.readonly).then_some(index + 1)
    }

    /// Handles activation of option `index`. The preview is left as-is.
    pub fn activate(&self, index: usize, on_change: impl FnOnce(usize)) {
        if let Some(value) = self.commit_value(index) {
            on_change(value);
        }
    }

    /// Fill level to render: the preview when present, otherwise `committed`.
    pub fn displayed(&self, committed: usize) -> usize {
        self.preview.unwrap_or(committed)
    }

    /// Whether option `index` renders filled.
    pub fn is_filled(&self, committed: usize, index: usize) -> bool {
        index < self.displayed(committed)
    }
}

/// Glyph shown when neither fallback text nor child content is available.
pub const FALLBACK_PLACEHOLDER: &str = "?";

/// Avatar image state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    /// The image element is rendered.
    ShowingImage,
    /// The fallback content is rendered.
    ShowingFallback,
}

impl ImageState {
    /// Stable state token for `data-*` hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::ShowingImage => "image",
            Self::ShowingFallback => "fallback",
        }
    }
}

/// One-way image to fallback switch owned by a single avatar instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFallback {
    state: ImageState,
}

impl ImageFallback {
    /// Starts on the image when a non-empty source exists, otherwise on the fallback.
    pub fn for_source(src: Option<&str>) -> Self {
        let state = match src {
            Some(src) if !src.is_empty() => ImageState::ShowingImage,
            _ => ImageState::ShowingFallback,
        };
        Self { state }
    }

    /// Current state.
    pub fn state(&self) -> ImageState {
        self.state
    }

    /// Whether the image element should render.
    pub fn shows_image(&self) -> bool {
        self.state == ImageState::ShowingImage
    }

    /// Records an image load failure. Returns `true` only on the transition itself.
    pub fn image_failed(&mut self) -> bool {
        let transitioned = self.shows_image();
        self.state = ImageState::ShowingFallback;
        transitioned
    }
}

/// Content rendered while an avatar shows its fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackContent<'a> {
    /// Explicit fallback text (usually initials).
    Text(&'a str),
    /// The caller's child content.
    Children,
    /// [`FALLBACK_PLACEHOLDER`].
    Placeholder,
}

/// Picks fallback content: explicit text, then children, then the placeholder glyph.
///
/// Empty fallback text counts as absent.
pub fn fallback_content(fallback: Option<&str>, has_children: bool) -> FallbackContent<'_> {
    match fallback {
        Some(text) if !text.is_empty() => FallbackContent::Text(text),
        _ if has_children => FallbackContent::Children,
        _ => FallbackContent::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn activation_reports_flipped_value_without_mutating() {
        let control = BinaryControl::new(false);
        let emitted = RefCell::new(Vec::new());
        control.activate(|next| emitted.borrow_mut().push(next));
        assert_eq!(emitted.into_inner(), vec![true]);
        assert!(!control.checked);
        assert_eq!(BinaryControl::new(true).next_value(), Some(false));
    }

    #[test]
    fn disabled_and_readonly_controls_never_emit() {
        let mut calls = 0;
        BinaryControl::new(true)
            .with_disabled(true)
            .activate(|_| calls += 1);
        BinaryControl::new(true)
            .with_readonly(true)
            .activate(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn indeterminate_is_display_only() {
        let control = BinaryControl::new(false).with_indeterminate(true);
        assert_eq!(control.display(), BinaryDisplay::Indeterminate);
        assert_eq!(control.aria_checked(), "mixed");
        assert_eq!(control.next_value(), Some(true));
        assert!(control.display().is_filled());

        let checked = BinaryControl::new(true).with_indeterminate(true);
        assert_eq!(checked.display(), BinaryDisplay::Checked);
        assert_eq!(BinaryControl::new(false).display(), BinaryDisplay::Unchecked);
        assert_eq!(BinaryControl::new(true).aria_checked(), "true");
    }

    #[test]
    fn rating_preview_then_commit() {
        let committed = 2;
        let mut rating = PreviewCommit::new(false);
        let mut emitted = Vec::new();

        rating.pointer_enter(3);
        assert_eq!(rating.displayed(committed), 4);
        assert!(emitted.is_empty());

        rating.pointer_leave();
        assert_eq!(rating.displayed(committed), 2);

        rating.pointer_enter(3);
        rating.activate(3, |value| emitted.push(value));
        assert_eq!(emitted, vec![4]);
        assert_eq!(rating.preview(), Some(4));
    }

    #[test]
    fn readonly_rating_ignores_pointer_and_activation() {
        let mut rating = PreviewCommit::new(true);
        rating.pointer_enter(4);
        assert_eq!(rating.preview(), None);
        assert_eq!(rating.displayed(3), 3);
        assert_eq!(rating.commit_value(4), None);
        assert!(rating.is_filled(3, 2));
        assert!(!rating.is_filled(3, 3));
    }

    #[test]
    fn avatar_falls_back_once_and_stays() {
        let mut image = ImageFallback::for_source(Some("/me.png"));
        assert_eq!(image.state(), ImageState::ShowingImage);
        assert!(image.image_failed());
        assert!(!image.image_failed());
        assert_eq!(image.state(), ImageState::ShowingFallback);
        assert!(!image.shows_image());
    }

    #[test]
    fn missing_or_empty_source_starts_on_fallback() {
        assert!(!ImageFallback::for_source(None).shows_image());
        assert!(!ImageFallback::for_source(Some("")).shows_image());
    }

    #[test]
    fn fallback_content_priority() {
        assert_eq!(fallback_content(Some("JD"), true), FallbackContent::Text("JD"));
        assert_eq!(fallback_content(Some(""), true), FallbackContent::Children);
        assert_eq!(fallback_content(None, true), FallbackContent::Children);
        assert_eq!(fallback_content(None, false), FallbackContent::Placeholder);
    }
}
