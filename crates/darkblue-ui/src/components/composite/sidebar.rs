use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::core::context::ContextSite;
use crate::core::disclosure::{DisclosureState, DisclosureValue};
use crate::core::variants::{SIDEBAR_BASE, SIDEBAR_ITEM_BASE};
use crate::hooks::{SidebarHandle, use_disclosure, use_required_context};
use yew::prelude::*;

#[hook]
fn use_sidebar_part(component: &'static str) -> SidebarHandle {
    use_required_context::<SidebarHandle>(ContextSite::new(component, "Sidebar"))
}

/// Props for [`Sidebar`].
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Header, content, footer and toggle.
    #[prop_or_default]
    pub children: Children,
    /// Collapsed flag when controlled.
    #[prop_or_default]
    pub collapsed: Option<bool>,
    /// Collapsed flag on first render when uncontrolled.
    #[prop_or_default]
    pub default_collapsed: bool,
    /// Receives the collapsed flag after every change.
    #[prop_or_default]
    pub on_collapsed_change: Callback<bool>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Collapsible vertical navigation rail.
///
/// Shares the boolean machine with its parts; "open" means collapsed.
/// Descendants read and change it through [`crate::hooks::use_sidebar`].
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let handle = use_disclosure(
        DisclosureState::boolean(props.default_collapsed),
        props.collapsed.map(DisclosureValue::Open),
        props
            .on_collapsed_change
            .reform(|value: DisclosureValue| value.is_open()),
    );
    let width = if handle.value().is_open() { "w-20" } else { "w-64" };

    html! {
        <ContextProvider<SidebarHandle> context={SidebarHandle(handle)}>
            <aside class={classes!(SIDEBAR_BASE, width, props.class.clone())}>
                { for props.children.iter() }
            </aside>
        </ContextProvider<SidebarHandle>>
    }
}

/// Brand row; children are hidden while collapsed.
#[function_component(SidebarHeader)]
pub fn sidebar_header(props: &BasicProps) -> Html {
    let visible = !use_sidebar_part("SidebarHeader").collapsed();
    html! {
        <div class={merge_classes("flex items-center h-16 px-4 border-b border-border", &props.class)}>
            if visible {
                { for props.children.iter() }
            }
        </div>
    }
}

/// Scrollable middle area.
#[function_component(SidebarContent)]
pub fn sidebar_content(props: &BasicProps) -> Html {
    render_container("div", "flex-1 overflow-y-auto p-3", props)
}

/// Props for [`SidebarSection`].
#[derive(Properties, PartialEq)]
pub struct SidebarSectionProps {
    /// Heading, hidden while collapsed.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// [`SidebarItem`] elements.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Titled group of items.
#[function_component(SidebarSection)]
pub fn sidebar_section(props: &SidebarSectionProps) -> Html {
    let sidebar = use_sidebar_part("SidebarSection");
    let title = props.title.clone().filter(|_| !sidebar.collapsed());

    html! {
        <div class={merge_classes("mb-4", &props.class)}>
            if let Some(title) = title {
                <div class="px-3 py-2 text-xs font-semibold text-muted-foreground uppercase tracking-wider">
                    { title }
                </div>
            }
            <nav class="space-y-1">{ for props.children.iter() }</nav>
        </div>
    }
}

/// Props for [`SidebarItem`].
#[derive(Properties, PartialEq)]
pub struct SidebarItemProps {
    /// Text label; becomes the tooltip while collapsed.
    pub label: AttrValue,
    /// Leading icon.
    #[prop_or_default]
    pub icon: Option<Html>,
    /// Highlight as the current location.
    #[prop_or_default]
    pub active: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Navigation entry.
#[function_component(SidebarItem)]
pub fn sidebar_item(props: &SidebarItemProps) -> Html {
    let collapsed = use_sidebar_part("SidebarItem").collapsed();
    let classes = classes!(
        SIDEBAR_ITEM_BASE,
        if props.active {
            "bg-primary/10 text-primary border-primary/20"
        } else {
            "hover:bg-accent hover:text-foreground"
        },
        collapsed.then_some("justify-center px-0"),
        props.class.clone()
    );

    html! {
        <button
            type="button"
            class={classes}
            title={collapsed.then(|| props.label.clone())}
            aria-current={props.active.then_some("page")}
            onclick={props.onclick.clone()}
        >
            if let Some(icon) = props.icon.clone() {
                <span class="flex-shrink-0">{ icon }</span>
            }
            if !collapsed {
                <span class="truncate">{ props.label.clone() }</span>
            }
        </button>
    }
}

/// Bottom area.
#[function_component(SidebarFooter)]
pub fn sidebar_footer(props: &BasicProps) -> Html {
    render_container("div", "p-3 border-t border-border", props)
}

/// Props for [`SidebarToggle`].
#[derive(Properties, PartialEq)]
pub struct SidebarToggleProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Collapse/expand button.
#[function_component(SidebarToggle)]
pub fn sidebar_toggle(props: &SidebarToggleProps) -> Html {
    let sidebar = use_sidebar_part("SidebarToggle");
    let collapsed = sidebar.collapsed();

    html! {
        <button
            type="button"
            aria-label={if collapsed { "Expand sidebar" } else { "Collapse sidebar" }}
            class={merge_classes(
                "flex items-center justify-center w-full py-2 text-muted-foreground hover:text-foreground transition-colors",
                &props.class,
            )}
            onclick={sidebar.on_toggle::<MouseEvent>()}
        >
            if collapsed {
                <ChevronRightIcon class={classes!("h-5", "w-5")} />
            } else {
                <ChevronLeftIcon class={classes!("h-5", "w-5")} />
            }
        </button>
    }
}
