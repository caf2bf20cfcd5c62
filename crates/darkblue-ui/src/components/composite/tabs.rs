use crate::components::foundations::{BasicProps, aria_bool, merge_classes};
use crate::core::context::ContextSite;
use crate::core::disclosure::{DisclosureAction, DisclosureState, DisclosureValue};
use crate::hooks::{DisclosureHandle, use_disclosure, use_required_context};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct TabsContext(DisclosureHandle);

/// Props for [`Tabs`].
#[derive(Properties, PartialEq)]
pub struct TabsProps {
    /// List and panels.
    #[prop_or_default]
    pub children: Children,
    /// Active tab when controlled.
    #[prop_or_default]
    pub value: Option<String>,
    /// Active tab on first render when uncontrolled.
    #[prop_or_default]
    pub default_value: Option<String>,
    /// Receives the active tab after every change.
    #[prop_or_default]
    pub on_value_change: Callback<String>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// One visible panel at a time, chosen from a tab list.
#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let handle = use_disclosure(
        DisclosureState::single(props.default_value.clone()),
        props
            .value
            .clone()
            .map(|value| DisclosureValue::Selected(Some(value))),
        props.on_value_change.reform(|value: DisclosureValue| {
            value.keys().into_iter().next().unwrap_or_default()
        }),
    );

    html! {
        <ContextProvider<TabsContext> context={TabsContext(handle)}>
            <div class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        </ContextProvider<TabsContext>>
    }
}

/// Row of [`TabsTrigger`] buttons.
#[function_component(TabsList)]
pub fn tabs_list(props: &BasicProps) -> Html {
    html! {
        <div
            role="tablist"
            class={merge_classes(
                "inline-flex h-10 items-center justify-center rounded-md bg-muted p-1 text-muted-foreground",
                &props.class,
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`TabsTrigger`].
#[derive(Properties, PartialEq)]
pub struct TabsTriggerProps {
    /// Key of the panel this tab shows.
    pub value: AttrValue,
    /// Label.
    #[prop_or_default]
    pub children: Children,
    /// Ignore clicks.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Tab button. Selecting the active tab keeps it active.
#[function_component(TabsTrigger)]
pub fn tabs_trigger(props: &TabsTriggerProps) -> Html {
    let TabsContext(root) =
        use_required_context::<TabsContext>(ContextSite::new("TabsTrigger", "Tabs"));
    let active = root.value().contains(&props.value);

    html! {
        <button
            type="button"
            role="tab"
            aria-selected={aria_bool(active)}
            data-state={if active { "active" } else { "inactive" }}
            disabled={props.disabled}
            class={merge_classes(
                "inline-flex items-center justify-center whitespace-nowrap rounded-sm px-3 py-1.5 text-sm font-medium ring-offset-background transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow-sm",
                &props.class,
            )}
            onclick={root.on::<MouseEvent>(DisclosureAction::Select(props.value.to_string()))}
        >
            { for props.children.iter() }
        </button>
    }
}

/// Props for [`TabsContent`].
#[derive(Properties, PartialEq)]
pub struct TabsContentProps {
    /// Key matching a [`TabsTrigger`].
    pub value: AttrValue,
    /// Panel body.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Panel rendered only while its tab is active.
#[function_component(TabsContent)]
pub fn tabs_content(props: &TabsContentProps) -> Html {
    let TabsContext(root) =
        use_required_context::<TabsContext>(ContextSite::new("TabsContent", "Tabs"));
    if !root.value().contains(&props.value) {
        return Html::default();
    }

    html! {
        <div
            role="tabpanel"
            tabindex="0"
            class={merge_classes(
                "mt-2 ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2",
                &props.class,
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
