use super::*;

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";
const CHECK_PATH: &str = "M5 13l4 4L19 7";
const DASH_PATH: &str = "M5 12h14";

/// Rounded percentage text such as `42%`.
pub(crate) fn percent_label(percentage: f64) -> String {
    format!("{}%", percentage.round())
}

/// Star fill token for one option of a rating.
pub(crate) fn star_fill(filled: bool, show_empty: bool) -> &'static str {
    match (filled, show_empty) {
        (true, _) => "filled",
        (false, true) => "empty",
        (false, false) => "hidden",
    }
}

/// Container role of a rating. An interactive rating keeps its star buttons exposed.
pub(crate) fn rating_role(readonly: bool) -> Option<&'static str> {
    readonly.then_some("img")
}

/// Message shown under an input group; error text wins over helper text.
pub(crate) fn group_message<'a>(
    error: Option<&'a str>,
    helper_text: Option<&'a str>,
) -> Option<(FieldState, &'a str)> {
    match (error, helper_text) {
        (Some(error), _) if !error.is_empty() => Some((FieldState::Error, error)),
        (_, Some(helper)) if !helper.is_empty() => Some((FieldState::Default, helper)),
        _ => None,
    }
}

fn binary_control(
    checked: MaybeSignal<bool>,
    indeterminate: MaybeSignal<bool>,
    disabled: MaybeSignal<bool>,
    readonly: MaybeSignal<bool>,
) -> BinaryControl {
    BinaryControl::new(checked.get())
        .with_indeterminate(indeterminate.get())
        .with_disabled(disabled.get())
        .with_readonly(readonly.get())
}

fn untracked_binary_control(
    checked: MaybeSignal<bool>,
    indeterminate: MaybeSignal<bool>,
    disabled: MaybeSignal<bool>,
    readonly: MaybeSignal<bool>,
) -> BinaryControl {
    BinaryControl::new(checked.get_untracked())
        .with_indeterminate(indeterminate.get_untracked())
        .with_disabled(disabled.get_untracked())
        .with_readonly(readonly.get_untracked())
}

#[component]
/// Switch with `role="switch"` semantics. The caller owns `checked`; activation reports the
/// flipped value through `on_change`.
pub fn Toggle(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let unset = MaybeSignal::Static(false);
    let control = move || binary_control(checked, unset, disabled, readonly);
    let handle_toggle = move || {
        untracked_binary_control(checked, unset, disabled, readonly).activate(|next| {
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(next);
            }
        });
    };

    view! {
        <button
            type="button"
            id=id
            role="switch"
            class=move || {
                variant_class(
                    "toggle",
                    &Selection::from([
                        ("size", size.token()),
                        ("state", control().display().token()),
                    ]),
                    class.get(),
                )
            }
            aria-label=move || aria_label.get()
            aria-checked=move || control().aria_checked()
            aria-readonly=move || bool_token(readonly.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="toggle"
            data-ui-state=move || control().display().token()
            on:click=move |_| handle_toggle()
            on:keydown=move |ev| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    handle_toggle();
                }
                _ => {}
            }
        >
            <span class=move || {
                variant_class(
                    "toggle_thumb",
                    &Selection::from([
                        ("size", size.token()),
                        ("state", control().display().token()),
                    ]),
                    "",
                )
            }></span>
        </button>
    }
}

#[component]
/// Checkbox with a caller-driven mixed state reported as `aria-checked="mixed"`.
pub fn Checkbox(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let control = move || binary_control(checked, indeterminate, disabled, readonly);
    let handle_toggle = move || {
        untracked_binary_control(checked, indeterminate, disabled, readonly).activate(|next| {
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(next);
            }
        });
    };

    view! {
        <button
            type="button"
            id=id
            role="checkbox"
            class=move || {
                variant_class(
                    "checkbox",
                    &Selection::from([
                        ("size", size.token()),
                        ("state", control().display().token()),
                    ]),
                    class.get(),
                )
            }
            aria-label=move || aria_label.get()
            aria-checked=move || control().aria_checked()
            aria-readonly=move || bool_token(readonly.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-state=move || control().display().token()
            on:click=move |_| handle_toggle()
        >
            {move || {
                let mark = match control().display() {
                    BinaryDisplay::Checked => CHECK_PATH,
                    BinaryDisplay::Indeterminate => DASH_PATH,
                    BinaryDisplay::Unchecked => return None,
                };
                Some(view! {
                    <svg
                        class=base_class("checkbox_mark", "")
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                        stroke-width="3"
                        aria-hidden="true"
                    >
                        <path stroke-linecap="round" stroke-linejoin="round" d=mark></path>
                    </svg>
                })
            }}
        </button>
    }
}

#[component]
/// Single radio option. Grouping and mutual exclusion belong to the caller.
pub fn Radio(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let unset = MaybeSignal::Static(false);
    let control = move || binary_control(checked, unset, disabled, readonly);
    let handle_toggle = move || {
        untracked_binary_control(checked, unset, disabled, readonly).activate(|next| {
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(next);
            }
        });
    };

    view! {
        <button
            type="button"
            id=id
            role="radio"
            class=move || {
                variant_class(
                    "radio",
                    &Selection::from([
                        ("size", size.token()),
                        ("state", control().display().token()),
                    ]),
                    class.get(),
                )
            }
            aria-label=move || aria_label.get()
            aria-checked=move || control().aria_checked()
            aria-readonly=move || bool_token(readonly.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-state=move || control().display().token()
            on:click=move |_| handle_toggle()
        >
            <Show when=move || control().display().is_filled()>
                <span class=variant_class(
                    "radio_dot",
                    &Selection::from([("size", size.token())]),
                    "",
                )></span>
            </Show>
        </button>
    }
}

#[component]
/// Star rating. Read-only by default; when interactive, hovering previews a value and a click
/// reports it through `on_change` without changing what is displayed after the pointer leaves.
pub fn StarRating(
    #[prop(into)] value: MaybeSignal<usize>,
    #[prop(default = 5)] max: usize,
    #[prop(default = Size::Md)] size: Size,
    #[prop(default = true)] show_empty: bool,
    #[prop(default = true)] readonly: bool,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_change: Option<Callback<usize>>,
) -> impl IntoView {
    let rating = create_rw_signal(PreviewCommit::new(readonly));
    let interactive = !readonly;
    let stars = (0..max)
        .map(|index| {
            view! {
                <button
                    type="button"
                    class=variant_class(
                        "star_button",
                        &Selection::from([("interactive", bool_token(interactive))]),
                        "",
                    )
                    aria-label=format!("{} of {max}", index + 1)
                    disabled=readonly
                    data-ui-slot="star"
                    on:mouseenter=move |_| rating.update(|rating| rating.pointer_enter(index))
                    on:click=move |_| {
                        rating
                            .get_untracked()
                            .activate(
                                index,
                                |next| {
                                    if let Some(on_change) = on_change.as_ref() {
                                        on_change.call(next);
                                    }
                                },
                            );
                    }
                >
                    <svg
                        class=move || {
                            let filled = rating.get().is_filled(value.get(), index);
                            variant_class(
                                "star_icon",
                                &Selection::from([
                                    ("size", size.token()),
                                    ("fill", star_fill(filled, show_empty)),
                                ]),
                                "",
                            )
                        }
                        fill="currentColor"
                        viewBox="0 0 20 20"
                        aria-hidden="true"
                    >
                        <path d=STAR_PATH></path>
                    </svg>
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            class=move || base_class("star_rating", class.get())
            role=rating_role(readonly)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="star-rating"
            data-ui-value=move || rating.get().displayed(value.get())
            on:mouseleave=move |_| rating.update(PreviewCommit::pointer_leave)
        >
            {stars}
        </div>
    }
}

#[component]
/// Text input with size and validation-state variants.
pub fn Input(
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] state: MaybeSignal<FieldState>,
    #[prop(default = "text".to_string(), into)] input_type: String,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            id=id
            name=name
            placeholder=placeholder
            class=move || {
                variant_class(
                    "input",
                    &Selection::from([("size", size.token()), ("state", state.get().token())]),
                    class.get(),
                )
            }
            aria-label=aria_label
            aria-invalid=move || bool_token(state.get() == FieldState::Error)
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-state=move || state.get().token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Field label.
pub fn Label(
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label for=for_id class=move || base_class("label", class.get())>
            {children()}
        </label>
    }
}

#[component]
/// Hint or validation message under a field.
pub fn HelperText(
    #[prop(optional, into)] state: MaybeSignal<FieldState>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            id=id
            class=move || {
                variant_class(
                    "helper_text",
                    &Selection::from([("state", state.get().token())]),
                    class.get(),
                )
            }
            role=move || (state.get() == FieldState::Error).then_some("alert")
        >
            {children()}
        </p>
    }
}

#[component]
/// Label, control, and message stack.
pub fn InputGroup(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error: Option<String>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let message = group_message(error.as_deref(), helper_text.as_deref())
        .map(|(state, text)| (state, text.to_string()));

    view! {
        <div class=move || base_class("input_group", class.get()) data-ui-kind="input-group">
            {label
                .filter(|label| !label.is_empty())
                .map(|label| view! { <Label>{label}</Label> })}
            {children()}
            {message.map(|(state, text)| view! { <HelperText state=state>{text}</HelperText> })}
        </div>
    }
}

#[component]
/// Linear progress bar with `role="progressbar"` semantics.
pub fn Progress(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(default = 100.0.into(), into)] max: MaybeSignal<f64>,
    #[prop(default = ProgressSize::Md)] size: ProgressSize,
    #[prop(default = ProgressVariant::Default)] variant: ProgressVariant,
    #[prop(optional)] show_label: bool,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let percentage = move || fraction(value.get(), max.get());

    view! {
        <div
            class=move || cn(classes!["relative", class.get()])
            data-ui-primitive="true"
            data-ui-kind="progress"
        >
            <div
                class=variant_class(
                    "progress_track",
                    &Selection::from([("size", size.token())]),
                    "",
                )
                role="progressbar"
                aria-label=aria_label
                aria-valuenow=move || value.get()
                aria-valuemin="0"
                aria-valuemax=move || max.get()
            >
                <div
                    class=variant_class(
                        "progress_indicator",
                        &Selection::from([("variant", variant.token())]),
                        "",
                    )
                    style=move || format!("width: {}%", percentage())
                ></div>
            </div>
            <Show when=move || show_label>
                <span class=base_class("progress_label", "")>
                    {move || percent_label(percentage())}
                </span>
            </Show>
        </div>
    }
}

#[component]
/// Circular progress ring with a center slot for children or the rounded percentage.
pub fn CircularProgress(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(default = 100.0.into(), into)] max: MaybeSignal<f64>,
    #[prop(default = 48.0)] size: f64,
    #[prop(default = 4.0)] stroke_width: f64,
    #[prop(default = ProgressVariant::Default)] variant: ProgressVariant,
    #[prop(optional)] show_value: bool,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let percentage = move || fraction(value.get(), max.get());
    let ring = ArcGeometry::new(size, stroke_width, 0.0);
    let center = ArcGeometry::center(size);
    let center_view = match children {
        Some(children) => Some(children().into_view()),
        None if show_value => Some(
            view! {
                <span class="text-[12px] font-semibold text-[hsl(var(--color-text-primary))]">
                    {move || percent_label(percentage())}
                </span>
            }
            .into_view(),
        ),
        None => None,
    };

    view! {
        <div
            class=move || base_class("circular_progress", class.get())
            style=format!("width: {size}px; height: {size}px")
            role="progressbar"
            aria-label=aria_label
            aria-valuenow=move || value.get()
            aria-valuemin="0"
            aria-valuemax=move || max.get()
            data-ui-primitive="true"
            data-ui-kind="progress-ring"
        >
            <svg width=size height=size class="transform -rotate-90" aria-hidden="true">
                <circle
                    data-ui-slot="track"
                    cx=center
                    cy=center
                    r=ring.radius
                    fill="none"
                    stroke=hsl_var("color-surface-tertiary")
                    stroke-width=stroke_width
                ></circle>
                <circle
                    data-ui-slot="fill"
                    cx=center
                    cy=center
                    r=ring.radius
                    fill="none"
                    stroke=variant.stroke_color()
                    stroke-width=stroke_width
                    stroke-linecap="round"
                    stroke-dasharray=ring.circumference
                    stroke-dashoffset=move || {
                        ArcGeometry::new(size, stroke_width, percentage()).dash_offset
                    }
                    class="transition-all duration-300 ease-out"
                ></circle>
            </svg>
            {center_view.map(|center_view| {
                view! {
                    <div class="absolute inset-0 flex items-center justify-center">
                        {center_view}
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn percent_label_rounds_half_up() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(42.4), "42%");
        assert_eq!(percent_label(42.5), "43%");
        assert_eq!(percent_label(100.0), "100%");
        assert_eq!(percent_label(fraction(1.0, 3.0)), "33%");
    }

    #[test]
    fn star_fill_hides_empty_stars_on_request() {
        assert_eq!(star_fill(true, false), "filled");
        assert_eq!(star_fill(false, true), "empty");
        assert_eq!(star_fill(false, false), "hidden");
    }

    #[test]
    fn only_readonly_rating_is_an_image() {
        assert_eq!(rating_role(true), Some("img"));
        assert_eq!(rating_role(false), None);
    }

    #[test]
    fn rating_preview_drives_fill_then_reverts() {
        let mut rating = PreviewCommit::new(false);
        let fills = |rating: &PreviewCommit| {
            (0..5)
                .map(|index| star_fill(rating.is_filled(2, index), true))
                .collect::<Vec<_>>()
        };
        assert_eq!(fills(&rating), ["filled", "filled", "empty", "empty", "empty"]);
        rating.pointer_enter(3);
        assert_eq!(fills(&rating), ["filled", "filled", "filled", "filled", "empty"]);
        let mut emitted = None;
        rating.activate(3, |value| emitted = Some(value));
        assert_eq!(emitted, Some(4));
        rating.pointer_leave();
        assert_eq!(fills(&rating), ["filled", "filled", "empty", "empty", "empty"]);
    }

    #[test]
    fn group_message_prefers_error() {
        assert_eq!(
            group_message(Some("Required"), Some("Your handle")),
            Some((FieldState::Error, "Required"))
        );
        assert_eq!(
            group_message(None, Some("Your handle")),
            Some((FieldState::Default, "Your handle"))
        );
        assert_eq!(
            group_message(Some(""), Some("Your handle")),
            Some((FieldState::Default, "Your handle"))
        );
        assert_eq!(group_message(None, None), None);
    }

    #[test]
    fn checkbox_state_tokens_select_catalog_options() {
        let checkbox = |control: BinaryControl| {
            variant_class(
                "checkbox",
                &Selection::from([("state", control.display().token())]),
                "",
            )
        };
        let mixed = checkbox(BinaryControl::new(false).with_indeterminate(true));
        assert!(mixed.contains("bg-[hsl(var(--color-primary))]"));
        let unchecked = checkbox(BinaryControl::new(false));
        assert!(unchecked.contains("hover:border-[hsl(var(--color-border-strong))]"));
        assert_eq!(
            BinaryControl::new(false).with_indeterminate(true).aria_checked(),
            "mixed"
        );
    }

    #[test]
    fn toggle_track_follows_checked_value() {
        let track = |checked| {
            variant_class(
                "toggle",
                &Selection::from([
                    ("size", "md"),
                    ("state", BinaryControl::new(checked).display().token()),
                ]),
                "",
            )
        };
        assert!(track(true).ends_with("h-6 w-11 bg-[hsl(var(--color-primary))]"));
        assert!(track(false).ends_with("h-6 w-11 bg-[hsl(var(--color-surface-tertiary))]"));
    }

    #[test]
    fn field_state_error_styles_input_border() {
        let class = variant_class(
            "input",
            &Selection::from([("state", FieldState::Error.token())]),
            "",
        );
        let tokens = class.split(' ').collect::<Vec<_>>();
        assert!(tokens.contains(&"border"));
        assert!(tokens.contains(&"border-[hsl(var(--color-error))]"));
        assert!(!tokens.contains(&"border-[hsl(var(--color-border-default))]"));
        assert!(!tokens.contains(&"focus-visible:border-[hsl(var(--color-border-focus))]"));
    }
}
