use crate::components::foundations::{aria_bool, merge_classes, open_state};
use crate::components::icons::ChevronDownIcon;
use crate::core::context::ContextSite;
use crate::core::disclosure::{DisclosureAction, DisclosureState, DisclosureValue, IndexBounds};
use crate::hooks::{DisclosureHandle, use_disclosure, use_required_context};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// How many items may be open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccordionType {
    /// At most one; re-toggling the open item closes it.
    #[default]
    Single,
    /// Any number.
    Multiple,
}

#[derive(Clone, PartialEq)]
struct AccordionContext(DisclosureHandle);

#[derive(Clone, PartialEq)]
struct AccordionItemContext {
    key: AttrValue,
    open: bool,
}

/// Props for [`Accordion`].
#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    /// [`AccordionItem`] elements.
    #[prop_or_default]
    pub children: Children,
    /// Selection behaviour.
    #[prop_or_default]
    pub kind: AccordionType,
    /// Open item keys when controlled.
    #[prop_or_default]
    pub value: Option<Vec<String>>,
    /// Open item keys on first render when uncontrolled.
    #[prop_or_default]
    pub default_value: Vec<String>,
    /// Receives the open keys after every change.
    #[prop_or_default]
    pub on_value_change: Callback<Vec<String>>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Vertically stacked set of collapsible sections.
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let multiple = props.kind == AccordionType::Multiple;
    let initial = DisclosureState::new(
        DisclosureValue::from_keys(multiple, props.default_value.clone()),
        IndexBounds::default(),
    );
    let controlled = props
        .value
        .clone()
        .map(|keys| DisclosureValue::from_keys(multiple, keys));
    let handle = use_disclosure(
        initial,
        controlled,
        props.on_value_change.reform(|value: DisclosureValue| value.keys()),
    );

    html! {
        <ContextProvider<AccordionContext> context={AccordionContext(handle)}>
            <div class={merge_classes("w-full", &props.class)}>
                { for props.children.iter() }
            </div>
        </ContextProvider<AccordionContext>>
    }
}

/// Props for [`AccordionItem`].
#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    /// Key identifying the item within its accordion.
    pub value: AttrValue,
    /// Trigger and content.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// One collapsible section.
#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let AccordionContext(root) =
        use_required_context::<AccordionContext>(ContextSite::new("AccordionItem", "Accordion"));
    let context = AccordionItemContext {
        key: props.value.clone(),
        open: root.value().contains(&props.value),
    };

    html! {
        <ContextProvider<AccordionItemContext> context={context}>
            <div class={merge_classes("border-b", &props.class)}>
                { for props.children.iter() }
            </div>
        </ContextProvider<AccordionItemContext>>
    }
}

/// Props for [`AccordionTrigger`].
#[derive(Properties, PartialEq)]
pub struct AccordionTriggerProps {
    /// Heading content.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Heading button toggling its item.
#[function_component(AccordionTrigger)]
pub fn accordion_trigger(props: &AccordionTriggerProps) -> Html {
    let AccordionContext(root) =
        use_required_context::<AccordionContext>(ContextSite::new("AccordionTrigger", "Accordion"));
    let item = use_required_context::<AccordionItemContext>(ContextSite::new(
        "AccordionTrigger",
        "AccordionItem",
    ));
    let onclick = root.on::<MouseEvent>(DisclosureAction::Toggle(item.key.to_string()));

    html! {
        <h3 class="flex">
            <button
                type="button"
                aria-expanded={aria_bool(item.open)}
                data-state={open_state(item.open)}
                class={merge_classes(
                    "flex flex-1 items-center justify-between py-4 font-medium transition-all hover:underline [&[data-state=open]>svg]:rotate-180",
                    &props.class,
                )}
                {onclick}
            >
                { for props.children.iter() }
                <ChevronDownIcon class={classes!("h-4", "w-4", "shrink-0", "transition-transform", "duration-200")} />
            </button>
        </h3>
    }
}

/// Props for [`AccordionContent`].
#[derive(Properties, PartialEq)]
pub struct AccordionContentProps {
    /// Body.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Body shown while its item is open.
#[function_component(AccordionContent)]
pub fn accordion_content(props: &AccordionContentProps) -> Html {
    let item = use_required_context::<AccordionItemContext>(ContextSite::new(
        "AccordionContent",
        "AccordionItem",
    ));
    let classes = classes!(
        "overflow-hidden text-sm transition-all",
        if item.open {
            "animate-accordion-down"
        } else {
            "animate-accordion-up hidden"
        },
        props.class.clone()
    );

    html! {
        <div data-state={open_state(item.open)} class={classes}>
            <div class="pb-4 pt-0">{ for props.children.iter() }</div>
        </div>
    }
}
