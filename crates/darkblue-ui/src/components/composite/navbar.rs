use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::components::icons::{ChevronDownIcon, SearchIcon};
use crate::core::format::{badge_label, initial};
use crate::core::variants::{NAVBAR_BASE, NavbarPosition};
use yew::prelude::*;

/// Props for [`Navbar`].
#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Brand, search and actions.
    #[prop_or_default]
    pub children: Children,
    /// Scroll behaviour.
    #[prop_or_default]
    pub position: NavbarPosition,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Top application bar.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class={classes!(NAVBAR_BASE, props.position.class(), props.class.clone())}>
            { for props.children.iter() }
        </nav>
    }
}

/// Props for [`NavbarBrand`].
#[derive(Properties, PartialEq)]
pub struct NavbarBrandProps {
    /// Logo element.
    #[prop_or_default]
    pub logo: Option<Html>,
    /// Product name.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Logo and product name.
#[function_component(NavbarBrand)]
pub fn navbar_brand(props: &NavbarBrandProps) -> Html {
    html! {
        <div class={merge_classes("flex items-center gap-3", &props.class)}>
            if let Some(logo) = props.logo.clone() {
                { logo }
            }
            if !props.children.is_empty() {
                <span class="font-semibold text-lg">{ for props.children.iter() }</span>
            }
        </div>
    }
}

fn default_shortcut() -> AttrValue {
    AttrValue::from("⌘K")
}

fn default_search_placeholder() -> AttrValue {
    AttrValue::from("Search...")
}

/// Props for [`NavbarSearch`].
#[derive(Properties, PartialEq)]
pub struct NavbarSearchProps {
    /// Keyboard hint shown on the right.
    #[prop_or_else(default_shortcut)]
    pub shortcut: AttrValue,
    /// Prompt text.
    #[prop_or_else(default_search_placeholder)]
    pub placeholder: AttrValue,
    /// Fired on click; the host opens its own search surface.
    #[prop_or_default]
    pub on_search: Callback<()>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Button styled as a search field.
#[function_component(NavbarSearch)]
pub fn navbar_search(props: &NavbarSearchProps) -> Html {
    let onclick = props.on_search.reform(|_: MouseEvent| ());
    html! {
        <button
            type="button"
            class={merge_classes(
                "flex items-center gap-2 h-9 px-3 rounded-md border border-input bg-background text-sm text-muted-foreground hover:bg-accent hover:text-foreground transition-colors min-w-[200px]",
                &props.class,
            )}
            {onclick}
        >
            <SearchIcon class={classes!("h-[18px]", "w-[18px]")} />
            <span class="flex-1 text-left">{ props.placeholder.clone() }</span>
            <kbd class="hidden sm:inline-flex items-center gap-1 rounded border border-border bg-muted px-1.5 text-xs text-muted-foreground">
                { props.shortcut.clone() }
            </kbd>
        </button>
    }
}

/// Right-hand cluster.
#[function_component(NavbarActions)]
pub fn navbar_actions(props: &BasicProps) -> Html {
    render_container("div", "flex items-center gap-2", props)
}

/// Props for [`NavbarIconButton`].
#[derive(Properties, PartialEq)]
pub struct NavbarIconButtonProps {
    /// Icon.
    #[prop_or_default]
    pub children: Children,
    /// Counter bubble; hidden at zero, capped at `99+`.
    #[prop_or_default]
    pub badge: Option<u32>,
    /// Accessible name.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Icon action with an optional counter badge.
#[function_component(NavbarIconButton)]
pub fn navbar_icon_button(props: &NavbarIconButtonProps) -> Html {
    let badge = props.badge.and_then(badge_label);
    html! {
        <button
            type="button"
            aria-label={props.aria_label.clone()}
            class={merge_classes(
                "relative flex items-center justify-center h-9 w-9 rounded-md text-muted-foreground hover:bg-accent hover:text-foreground transition-colors",
                &props.class,
            )}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
            if let Some(badge) = badge {
                <span class="absolute -top-1 -right-1 flex items-center justify-center h-4 min-w-4 px-1 rounded-full bg-destructive text-destructive-foreground text-xs font-medium">
                    { badge }
                </span>
            }
        </button>
    }
}

/// Props for [`NavbarUser`].
#[derive(Properties, PartialEq)]
pub struct NavbarUserProps {
    /// Display name.
    pub name: AttrValue,
    /// Secondary line.
    #[prop_or_default]
    pub role: Option<AttrValue>,
    /// Avatar element; defaults to the name's initial.
    #[prop_or_default]
    pub avatar: Option<Html>,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Profile button.
#[function_component(NavbarUser)]
pub fn navbar_user(props: &NavbarUserProps) -> Html {
    let avatar = props.avatar.clone().unwrap_or_else(|| {
        html! {
            <div class="flex items-center justify-center h-8 w-8 rounded-full bg-primary text-primary-foreground text-sm font-medium">
                { initial(&props.name) }
            </div>
        }
    });

    html! {
        <button
            type="button"
            class={merge_classes("flex items-center gap-3 px-2 py-1.5 rounded-md hover:bg-accent transition-colors", &props.class)}
            onclick={props.onclick.clone()}
        >
            { avatar }
            <div class="hidden sm:block text-left">
                <div class="text-sm font-medium">{ props.name.clone() }</div>
                if let Some(role) = props.role.clone() {
                    <div class="text-xs text-muted-foreground">{ role }</div>
                }
            </div>
            <ChevronDownIcon />
        </button>
    }
}
