use super::*;

/// Formats an integer with comma thousands separators (`1234567` -> `1,234,567`).
pub(crate) fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Coin face text: the value when shown, otherwise the currency glyph.
pub(crate) fn coin_face(value: Option<i64>, show_value: bool) -> String {
    match value {
        Some(value) if show_value => value.to_string(),
        _ => "$".to_string(),
    }
}

#[component]
/// Circular user image that falls back to initials, child content, or a placeholder glyph once the
/// image fails to load.
pub fn Avatar(
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(default = AvatarRing::None)] ring: AvatarRing,
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional, into)] fallback: Option<String>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let image = create_rw_signal(ImageFallback::for_source(src.as_deref()));
    let fallback_view = match fallback_content(fallback.as_deref(), children.is_some()) {
        FallbackContent::Text(text) => text.to_string().into_view(),
        FallbackContent::Children => match children {
            Some(children) => children().into_view(),
            None => FALLBACK_PLACEHOLDER.into_view(),
        },
        FallbackContent::Placeholder => FALLBACK_PLACEHOLDER.into_view(),
    };
    let handle_error = move |_| {
        let mut transitioned = false;
        image.update(|image| transitioned = image.image_failed());
        if transitioned {
            logging::debug_warn!("ui_kit: avatar image failed to load, showing fallback");
        }
    };
    let alt = alt.unwrap_or_default();

    view! {
        <div
            id=id
            class=move || {
                variant_class(
                    "avatar",
                    &Selection::from([("size", size.token()), ("ring", ring.token())]),
                    class.get(),
                )
            }
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
            data-ui-image=move || image.get().state().token()
        >
            {move || {
                if image.get().shows_image() {
                    view! {
                        <img
                            src=src.clone()
                            alt=alt.clone()
                            class="h-full w-full object-cover"
                            on:error=handle_error
                        />
                    }
                        .into_view()
                } else {
                    view! {
                        <span class="flex h-full w-full items-center justify-center">
                            {fallback_view.clone()}
                        </span>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
/// Overlapping avatar stack capped at `max` items with a `+N` overflow badge.
pub fn AvatarGroup(
    #[prop(default = 4)] max: usize,
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let items = children().nodes;
    let overflow = GroupOverflow::new(items.len(), max);
    let max = max.max(1);
    let visible = items
        .into_iter()
        .take(overflow.visible)
        .enumerate()
        .map(|(index, child)| {
            view! {
                <div class="relative" style=format!("z-index: {}", max - index)>
                    {child}
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class=move || base_class("avatar_group", class.get())
            data-ui-primitive="true"
            data-ui-kind="avatar-group"
            data-ui-hidden=overflow.hidden.unwrap_or(0)
        >
            {visible}
            {overflow.badge_label().map(|label| {
                view! {
                    <div
                        class=variant_class(
                            "avatar",
                            &Selection::new(),
                            base_class("avatar_overflow", ""),
                        )
                        style="z-index: 0"
                        data-ui-slot="overflow"
                    >
                        {label}
                    </div>
                }
            })}
        </div>
    }
}

#[component]
/// Compact status pill.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            id=id
            class=move || {
                variant_class(
                    "badge",
                    &Selection::from([("variant", variant.token()), ("size", size.token())]),
                    class.get(),
                )
            }
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Surface container; compose with the `Card*` section primitives.
pub fn Card(
    #[prop(default = CardVariant::Elevated)] variant: CardVariant,
    #[prop(default = CardPadding::Md)] padding: CardPadding,
    #[prop(optional)] interactive: bool,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=move || {
                variant_class(
                    "card",
                    &Selection::from([
                        ("variant", variant.token()),
                        ("padding", padding.token()),
                        ("interactive", bool_token(interactive)),
                    ]),
                    class.get(),
                )
            }
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-interactive=bool_token(interactive)
        >
            {children()}
        </div>
    }
}

#[component]
/// Card title/description stack.
pub fn CardHeader(
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || base_class("card_header", class.get()) data-ui-slot="header">
            {children()}
        </div>
    }
}

#[component]
/// Card heading.
pub fn CardTitle(
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h3 class=move || base_class("card_title", class.get()) data-ui-slot="title">
            {children()}
        </h3>
    }
}

#[component]
/// Secondary card text.
pub fn CardDescription(
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p class=move || base_class("card_description", class.get()) data-ui-slot="description">
            {children()}
        </p>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || base_class("card_content", class.get()) data-ui-slot="content">
            {children()}
        </div>
    }
}

#[component]
/// Card action row.
pub fn CardFooter(
    #[prop(optional, into)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || base_class("card_footer", class.get()) data-ui-slot="footer">
            {children()}
        </div>
    }
}

#[component]
/// Reward coin showing a value or the `$` glyph.
pub fn Coin(
    #[prop(default = CoinSize::Md)] size: CoinSize,
    #[prop(optional)] animated: bool,
    #[prop(optional, into)] value: Option<i64>,
    #[prop(default = true)] show_value: bool,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                variant_class(
                    "coin",
                    &Selection::from([
                        ("size", size.token()),
                        ("animated", bool_token(animated)),
                    ]),
                    class.get(),
                )
            }
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="coin"
        >
            {coin_face(value, show_value)}
        </div>
    }
}

#[component]
/// Coin followed by a grouped amount and an optional unit label.
pub fn CoinDisplay(
    #[prop(into)] value: MaybeSignal<i64>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                variant_class("coin_display", &Selection::from([("size", size.token())]), class.get())
            }
            data-ui-primitive="true"
            data-ui-kind="coin-display"
        >
            <Coin size=size.coin() show_value=false/>
            <span class="font-bold text-[hsl(var(--color-text-primary))]">
                {move || group_thousands(value.get())}
            </span>
            {label
                .filter(|label| !label.is_empty())
                .map(|label| {
                    view! {
                        <span class="text-[hsl(var(--color-text-secondary))] font-normal">
                            {label}
                        </span>
                    }
                })}
        </div>
    }
}

#[component]
/// Header-style total balance readout.
pub fn BalanceDisplay(
    #[prop(into)] value: MaybeSignal<i64>,
    #[prop(default = "Total balance".to_string(), into)] label: String,
    #[prop(optional, into)] class: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || cn(classes!["flex items-center gap-2", class.get()])
            data-ui-primitive="true"
            data-ui-kind="balance"
        >
            <span class="text-[hsl(var(--color-text-secondary))] text-[14px]">{label}</span>
            <div class="flex items-baseline gap-1">
                <span class="text-[32px] font-bold text-[hsl(var(--color-text-primary))]">
                    {move || format!("${}", group_thousands(value.get()))}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-45_000), "-45,000");
    }

    #[test]
    fn coin_face_prefers_value_when_shown() {
        assert_eq!(coin_face(Some(25), true), "25");
        assert_eq!(coin_face(Some(25), false), "$");
        assert_eq!(coin_face(None, true), "$");
    }

    #[test]
    fn overflow_badge_reuses_avatar_shape_with_muted_surface() {
        let class = variant_class(
            "avatar",
            &Selection::new(),
            base_class("avatar_overflow", ""),
        );
        assert!(class.contains("h-10 w-10"));
        assert!(class.contains("bg-[hsl(var(--color-surface-tertiary))]"));
        assert!(!class.contains("bg-[hsl(var(--color-surface-secondary))]"));
    }

    #[test]
    fn interactive_card_adds_pointer_tokens() {
        let card = |interactive| {
            variant_class(
                "card",
                &Selection::from([("interactive", bool_token(interactive))]),
                "",
            )
        };
        assert!(card(true).contains("cursor-pointer"));
        assert!(!card(false).contains("cursor-pointer"));
        assert!(card(false).contains("p-4"));
    }
}
