use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::components::icons::CloseIcon;
use crate::core::context::ContextSite;
use crate::core::disclosure::{DisclosureAction, DisclosureState, DisclosureValue};
use crate::hooks::{DisclosureHandle, use_disclosure, use_required_context};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct ModalContext(DisclosureHandle);

/// Props for [`Modal`].
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Trigger, overlay and content.
    #[prop_or_default]
    pub children: Children,
    /// Open flag when controlled.
    #[prop_or_default]
    pub open: Option<bool>,
    /// Open flag on first render when uncontrolled.
    #[prop_or_default]
    pub default_open: bool,
    /// Receives the open flag after every change.
    #[prop_or_default]
    pub on_open_change: Callback<bool>,
}

/// Dialog root. Renders no element of its own.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let handle = use_disclosure(
        DisclosureState::boolean(props.default_open),
        props.open.map(DisclosureValue::Open),
        props
            .on_open_change
            .reform(|value: DisclosureValue| value.is_open()),
    );

    html! {
        <ContextProvider<ModalContext> context={ModalContext(handle)}>
            { for props.children.iter() }
        </ContextProvider<ModalContext>>
    }
}

/// Button opening the dialog.
#[function_component(ModalTrigger)]
pub fn modal_trigger(props: &BasicProps) -> Html {
    let ModalContext(root) =
        use_required_context::<ModalContext>(ContextSite::new("ModalTrigger", "Modal"));

    html! {
        <button
            type="button"
            id={props.id.clone()}
            class={props.class.clone()}
            onclick={root.on::<MouseEvent>(DisclosureAction::SetOpen(true))}
        >
            { for props.children.iter() }
        </button>
    }
}

/// Props for [`ModalOverlay`] and [`ModalClose`].
#[derive(Properties, PartialEq)]
pub struct ModalPartProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Backdrop; clicking it closes the dialog.
#[function_component(ModalOverlay)]
pub fn modal_overlay(props: &ModalPartProps) -> Html {
    let ModalContext(root) =
        use_required_context::<ModalContext>(ContextSite::new("ModalOverlay", "Modal"));
    if !root.value().is_open() {
        return Html::default();
    }

    html! {
        <div
            aria-hidden="true"
            class={merge_classes("fixed inset-0 z-50 bg-black/80 animate-fade-in", &props.class)}
            onclick={root.on::<MouseEvent>(DisclosureAction::SetOpen(false))}
        />
    }
}

/// Centered dialog panel; absent from the DOM while closed.
#[function_component(ModalContent)]
pub fn modal_content(props: &BasicProps) -> Html {
    let ModalContext(root) =
        use_required_context::<ModalContext>(ContextSite::new("ModalContent", "Modal"));
    if !root.value().is_open() {
        return Html::default();
    }

    html! {
        <div
            role="dialog"
            aria-modal="true"
            id={props.id.clone()}
            class={merge_classes(
                "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 shadow-lg duration-200 animate-fade-in sm:rounded-lg",
                &props.class,
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Title and description block.
#[function_component(ModalHeader)]
pub fn modal_header(props: &BasicProps) -> Html {
    render_container(
        "div",
        "flex flex-col space-y-1.5 text-center sm:text-left",
        props,
    )
}

/// Action row.
#[function_component(ModalFooter)]
pub fn modal_footer(props: &BasicProps) -> Html {
    render_container(
        "div",
        "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2",
        props,
    )
}

/// Dialog heading.
#[function_component(ModalTitle)]
pub fn modal_title(props: &BasicProps) -> Html {
    render_container(
        "h2",
        "text-lg font-semibold leading-none tracking-tight",
        props,
    )
}

/// Supporting text under the title.
#[function_component(ModalDescription)]
pub fn modal_description(props: &BasicProps) -> Html {
    render_container("p", "text-sm text-muted-foreground", props)
}

/// Corner close button.
#[function_component(ModalClose)]
pub fn modal_close(props: &ModalPartProps) -> Html {
    let ModalContext(root) =
        use_required_context::<ModalContext>(ContextSite::new("ModalClose", "Modal"));

    html! {
        <button
            type="button"
            class={merge_classes(
                "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 disabled:pointer-events-none",
                &props.class,
            )}
            onclick={root.on::<MouseEvent>(DisclosureAction::SetOpen(false))}
        >
            <CloseIcon />
            <span class="sr-only">{ "Close" }</span>
        </button>
    }
}
