use super::*;

const TASK_PLACEHOLDER: &str = "📋";
const DEFAULT_ACTION_LABEL: &str = "Complete";

/// Media shown in the task card thumbnail slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskMedia<'a> {
    Image(&'a str),
    Icon,
    Placeholder,
}

pub(crate) fn task_media(image: Option<&str>, has_icon: bool) -> TaskMedia<'_> {
    match image {
        Some(image) if !image.is_empty() => TaskMedia::Image(image),
        _ if has_icon => TaskMedia::Icon,
        _ => TaskMedia::Placeholder,
    }
}

pub(crate) fn resolve_action_label(label: Option<&str>) -> &str {
    match label {
        Some(label) if !label.is_empty() => label,
        _ => DEFAULT_ACTION_LABEL,
    }
}

/// Trailing affordance of a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskTrailing {
    Done,
    Action,
    Chevron,
}

/// The action button renders only for active tasks with an action handler.
pub(crate) fn task_trailing(status: TaskStatus, has_action: bool) -> Option<TaskTrailing> {
    match status {
        TaskStatus::Completed => Some(TaskTrailing::Done),
        TaskStatus::Active if has_action => Some(TaskTrailing::Action),
        TaskStatus::Pending => Some(TaskTrailing::Chevron),
        TaskStatus::Active | TaskStatus::Locked => None,
    }
}

fn check_icon(class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="3"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d="M5 13l4 4L19 7"></path>
        </svg>
    }
}

#[component]
/// Task summary row: thumbnail, status badge, title, optional rating and reward, and a
/// status-dependent trailing affordance.
pub fn TaskCard(
    #[prop(into)] title: String,
    #[prop(default = TaskStatus::Pending)] status: TaskStatus,
    #[prop(default = TaskCardVariant::Default)] variant: TaskCardVariant,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] image: Option<String>,
    #[prop(optional, into)] image_icon: Option<ViewFn>,
    #[prop(optional, into)] reward: Option<i64>,
    #[prop(optional, into)] rating: Option<usize>,
    #[prop(optional)] task_type: Option<TaskType>,
    #[prop(optional)] on_action: Option<Callback<()>>,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let media = match task_media(image.as_deref(), image_icon.is_some()) {
        TaskMedia::Image(src) => view! {
            <img src=src.to_string() alt="" class="h-full w-full object-cover"/>
        }
        .into_view(),
        TaskMedia::Icon => view! {
            <div class="text-[hsl(var(--color-text-secondary))]">
                {image_icon.map(|icon| icon.run())}
            </div>
        }
        .into_view(),
        TaskMedia::Placeholder => view! {
            <div class="text-[24px]">{TASK_PLACEHOLDER}</div>
        }
        .into_view(),
    };
    let label = resolve_action_label(action_label.as_deref()).to_string();
    let trailing = task_trailing(status, on_action.is_some()).map(|trailing| match trailing {
        TaskTrailing::Done => view! {
            <div class="h-8 w-8 rounded-full bg-[hsl(var(--color-success))] flex items-center justify-center">
                {check_icon("h-4 w-4 text-white")}
            </div>
        }
        .into_view(),
        TaskTrailing::Action => view! {
            <button
                type="button"
                class="px-3 py-1.5 text-[12px] font-medium bg-[hsl(var(--color-primary))] text-[hsl(var(--color-text-on-accent))] rounded-[var(--radius-button)] hover:opacity-90 transition-opacity"
                data-ui-slot="action"
                on:click=move |_| {
                    if let Some(on_action) = on_action.as_ref() {
                        on_action.call(());
                    }
                }
            >
                {label}
            </button>
        }
        .into_view(),
        TaskTrailing::Chevron => view! {
            <svg
                class="h-5 w-5 text-[hsl(var(--color-text-tertiary))]"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M9 5l7 7-7 7"
                ></path>
            </svg>
        }
        .into_view(),
    });

    view! {
        <div
            id=id
            class=move || {
                variant_class(
                    "task_card",
                    &Selection::from([("status", status.token()), ("variant", variant.token())]),
                    class.get(),
                )
            }
            data-ui-primitive="true"
            data-ui-kind="task-card"
            data-ui-status=status.token()
        >
            <div class="h-16 w-16 rounded-[var(--radius-lg)] bg-[hsl(var(--color-surface-secondary))] flex items-center justify-center overflow-hidden shrink-0">
                {media}
            </div>
            <div class="flex-1 min-w-0">
                <div class="flex items-center gap-2 mb-1">
                    <Badge variant=status.badge_variant() size=Size::Sm>
                        {status.label()}
                    </Badge>
                    {task_type.map(|task_type| {
                        view! {
                            <span class="text-[11px] text-[hsl(var(--color-text-tertiary))] uppercase tracking-wide">
                                {task_type.token()}
                            </span>
                        }
                    })}
                </div>
                <h4 class="font-semibold text-[hsl(var(--color-text-primary))] truncate">{title}</h4>
                {description
                    .filter(|description| !description.is_empty())
                    .map(|description| {
                        view! {
                            <p class="text-[13px] text-[hsl(var(--color-text-secondary))] truncate mt-0.5">
                                {description}
                            </p>
                        }
                    })}
                {rating.map(|rating| {
                    view! {
                        <div class="mt-1.5">
                            <StarRating value=rating size=Size::Sm/>
                        </div>
                    }
                })}
            </div>
            <div class="flex flex-col items-end gap-2 shrink-0">
                {reward.map(|reward| {
                    view! {
                        <div class="flex items-center gap-1.5">
                            <Coin size=CoinSize::Sm show_value=false/>
                            <span class="font-semibold text-[hsl(var(--color-text-primary))]">
                                {reward}
                            </span>
                        </div>
                    }
                })}
                {trailing}
            </div>
        </div>
    }
}

#[component]
/// Compact checklist row with a completion mark, title, and optional reward.
pub fn TaskListItem(
    #[prop(into)] title: String,
    #[prop(default = TaskStatus::Pending)] status: TaskStatus,
    #[prop(optional, into)] reward: Option<i64>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: MaybeSignal<String>,
) -> impl IntoView {
    let done = bool_token(status == TaskStatus::Completed);

    view! {
        <div
            class=move || {
                variant_class(
                    "task_list_item",
                    &Selection::from([("status", status.token())]),
                    class.get(),
                )
            }
            role="button"
            tabindex="0"
            data-ui-primitive="true"
            data-ui-kind="task-list-item"
            data-ui-status=status.token()
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(());
                }
            }
        >
            <div class=variant_class("task_list_check", &Selection::from([("done", done)]), "")>
                {(status == TaskStatus::Completed).then(|| check_icon("h-3 w-3 text-white"))}
            </div>
            <span class=variant_class("task_list_title", &Selection::from([("done", done)]), "")>
                {title}
            </span>
            {reward.map(|reward| {
                view! {
                    <div class="flex items-center gap-1">
                        <Coin size=CoinSize::Xs show_value=false/>
                        <span class="text-[12px] font-medium text-[hsl(var(--color-text-secondary))]">
                            {reward}
                        </span>
                    </div>
                }
            })}
        </div>
    }
}
