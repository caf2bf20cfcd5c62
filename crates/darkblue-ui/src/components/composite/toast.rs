use crate::components::foundations::{BasicProps, render_container};
use crate::components::icons::CloseIcon;
use crate::core::toast::{AutoDismiss, DEFAULT_TOAST_DURATION_MS, ToastPosition, ToastVariant};
use crate::core::variants::TOAST_BASE;
use crate::hooks::UseToastHandle;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Props for [`Toast`].
#[derive(Properties, PartialEq)]
pub struct ToastProps {
    /// Title, description and actions.
    #[prop_or_default]
    pub children: Children,
    /// Tone.
    #[prop_or_default]
    pub variant: ToastVariant,
    /// Render the toast at all.
    #[prop_or(true)]
    pub open: bool,
    /// Auto-dismiss delay; `None` waits for the close button.
    #[prop_or(Some(DEFAULT_TOAST_DURATION_MS))]
    pub duration_ms: Option<u32>,
    /// Fired once, by the timer or the close button, whichever comes first.
    /// Without it the toast has no close button and never times out.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Transient notification.
///
/// The timer restarts whenever `open` or `duration_ms` changes and is
/// cancelled when the toast unmounts.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let closable = props.on_close.is_some();
    let tracker =
        use_mut_ref(|| AutoDismiss::for_toast(props.duration_ms, props.open, closable));
    let latest_on_close = use_mut_ref(|| props.on_close.clone());
    *latest_on_close.borrow_mut() = props.on_close.clone();

    {
        let tracker = tracker.clone();
        let latest_on_close = latest_on_close.clone();
        use_effect_with_deps(
            move |&(open, duration_ms, closable)| {
                *tracker.borrow_mut() = AutoDismiss::for_toast(duration_ms, open, closable);
                let delay = tracker.borrow().delay();
                let timeout = match (duration_ms, delay) {
                    (Some(millis), Some(delay)) => {
                        let tracker = tracker.clone();
                        Some(Timeout::new(millis, move || {
                            if tracker.borrow_mut().advance(delay) {
                                let on_close = latest_on_close.borrow().clone();
                                if let Some(on_close) = on_close {
                                    on_close.emit(());
                                }
                            }
                        }))
                    }
                    _ => None,
                };
                move || {
                    tracker.borrow_mut().cancel();
                    drop(timeout);
                }
            },
            (props.open, props.duration_ms, closable),
        );
    }

    if !props.open {
        return Html::default();
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        if tracker.borrow_mut().dismiss() {
            let on_close = latest_on_close.borrow().clone();
            if let Some(on_close) = on_close {
                on_close.emit(());
            }
        }
    });

    html! {
        <div
            role="alert"
            aria-live="polite"
            class={classes!(TOAST_BASE, props.variant.class(), props.class.clone())}
        >
            { for props.children.iter() }
            if closable {
                <button
                    type="button"
                    class="absolute right-2 top-2 rounded-md p-1 opacity-70 transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring"
                    {onclick}
                >
                    <CloseIcon />
                    <span class="sr-only">{ "Close" }</span>
                </button>
            }
        </div>
    }
}

/// Bold first line of a toast.
#[function_component(ToastTitle)]
pub fn toast_title(props: &BasicProps) -> Html {
    render_container("p", "text-sm font-semibold", props)
}

/// Body text of a toast.
#[function_component(ToastDescription)]
pub fn toast_description(props: &BasicProps) -> Html {
    render_container("p", "text-sm opacity-90", props)
}

/// Props for [`ToastContainer`].
#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    /// Toasts.
    #[prop_or_default]
    pub children: Children,
    /// Viewport corner or edge.
    #[prop_or_default]
    pub position: ToastPosition,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Fixed stack anchored to a viewport corner.
#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div
            class={classes!(
                "fixed z-[100] flex max-h-screen w-full flex-col-reverse gap-2 p-4 sm:max-w-[420px]",
                props.position.class(),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`Toaster`].
#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    /// Queue returned by [`crate::hooks::use_toast`].
    pub handle: UseToastHandle,
    /// Viewport corner or edge.
    #[prop_or_default]
    pub position: ToastPosition,
}

/// Renders every queued toast; each removes itself from the queue on close.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let dismiss = props.handle.dismiss_callback();
    let items = props.handle.toasts().iter().map(|item| {
        let id = item.id;
        let draft = &item.draft;
        html! {
            <Toast
                key={id.to_string()}
                variant={draft.variant}
                duration_ms={draft.duration_ms}
                on_close={Some(dismiss.reform(move |()| id))}
            >
                <div class="grid gap-1">
                    if let Some(title) = draft.title.clone() {
                        <ToastTitle>{ title }</ToastTitle>
                    }
                    if let Some(description) = draft.description.clone() {
                        <ToastDescription>{ description }</ToastDescription>
                    }
                </div>
            </Toast>
        }
    });

    html! {
        <ToastContainer position={props.position}>
            { for items }
        </ToastContainer>
    }
}
