use crate::components::foundations::{BasicProps, aria_bool, merge_classes};
use crate::core::context::ContextSite;
use crate::core::disclosure::{DisclosureAction, DisclosureState, DisclosureValue};
use crate::core::variants::DropdownAlign;
use crate::hooks::{DisclosureHandle, use_disclosure, use_required_context};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct DropdownContext(DisclosureHandle);

/// Props for [`Dropdown`].
#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    /// Trigger and content.
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

/// Menu anchored below its trigger.
#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let handle = use_disclosure(
        DisclosureState::boolean(props.default_open),
        props.open.map(DisclosureValue::Open),
        props
            .on_open_change
            .reform(|value: DisclosureValue| value.is_open()),
    );

    html! {
        <ContextProvider<DropdownContext> context={DropdownContext(handle)}>
            <div class="relative inline-block">
                { for props.children.iter() }
            </div>
        </ContextProvider<DropdownContext>>
    }
}

/// Button flipping the menu.
#[function_component(DropdownTrigger)]
pub fn dropdown_trigger(props: &BasicProps) -> Html {
    let DropdownContext(root) =
        use_required_context::<DropdownContext>(ContextSite::new("DropdownTrigger", "Dropdown"));

    html! {
        <button
            type="button"
            id={props.id.clone()}
            aria-haspopup="menu"
            aria-expanded={aria_bool(root.value().is_open())}
            class={merge_classes("inline-flex items-center justify-center", &props.class)}
            onclick={root.on::<MouseEvent>(DisclosureAction::Flip)}
        >
            { for props.children.iter() }
        </button>
    }
}

/// Props for [`DropdownContent`].
#[derive(Properties, PartialEq)]
pub struct DropdownContentProps {
    /// Menu items.
    #[prop_or_default]
    pub children: Children,
    /// Horizontal anchoring relative to the trigger.
    #[prop_or_default]
    pub align: DropdownAlign,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Menu panel; absent from the DOM while closed.
#[function_component(DropdownContent)]
pub fn dropdown_content(props: &DropdownContentProps) -> Html {
    let DropdownContext(root) =
        use_required_context::<DropdownContext>(ContextSite::new("DropdownContent", "Dropdown"));
    if !root.value().is_open() {
        return Html::default();
    }

    html! {
        <div
            role="menu"
            data-dropdown-content="true"
            class={classes!(
                "absolute z-50 mt-2 min-w-[8rem] overflow-hidden rounded-md border bg-popover p-1 text-popover-foreground shadow-md animate-fade-in",
                props.align.class(),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`DropdownItem`].
#[derive(Properties, PartialEq)]
pub struct DropdownItemProps {
    /// Label.
    #[prop_or_default]
    pub children: Children,
    /// Fired before the menu closes.
    #[prop_or_default]
    pub onselect: Callback<()>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Selectable row; closes the menu on click, `Enter` or `Space`.
#[function_component(DropdownItem)]
pub fn dropdown_item(props: &DropdownItemProps) -> Html {
    let DropdownContext(root) =
        use_required_context::<DropdownContext>(ContextSite::new("DropdownItem", "Dropdown"));

    let select = {
        let onselect = props.onselect.clone();
        Callback::from(move |()| {
            onselect.emit(());
            root.dispatch(DisclosureAction::SetOpen(false));
        })
    };
    let onclick = select.reform(|_: MouseEvent| ());
    let onkeydown = {
        let select = select.clone();
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                select.emit(());
            }
        })
    };

    html! {
        <div
            role="menuitem"
            tabindex="0"
            class={merge_classes(
                "relative flex cursor-pointer select-none items-center rounded-sm px-2 py-1.5 text-sm outline-none transition-colors hover:bg-accent hover:text-accent-foreground focus:bg-accent focus:text-accent-foreground",
                &props.class,
            )}
            {onclick}
            {onkeydown}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`DropdownSeparator`].
#[derive(Properties, PartialEq)]
pub struct DropdownSeparatorProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Thin rule between item groups.
#[function_component(DropdownSeparator)]
pub fn dropdown_separator(props: &DropdownSeparatorProps) -> Html {
    html! { <div role="separator" class={merge_classes("-mx-1 my-1 h-px bg-muted", &props.class)} /> }
}
