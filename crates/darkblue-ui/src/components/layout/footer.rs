use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::core::variants::{FOOTER_BASE, FooterVariant};
use yew::prelude::*;

/// Props for [`Footer`].
#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Brand, link groups and copyright.
    #[prop_or_default]
    pub children: Children,
    /// Padding.
    #[prop_or_default]
    pub variant: FooterVariant,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Page footer.
#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class={classes!(FOOTER_BASE, props.variant.class(), props.class.clone())}>
            { for props.children.iter() }
        </footer>
    }
}

/// Logo and tagline column.
#[function_component(FooterBrand)]
pub fn footer_brand(props: &BasicProps) -> Html {
    render_container("div", "flex flex-col gap-2", props)
}

/// Grid of link groups.
#[function_component(FooterLinks)]
pub fn footer_links(props: &BasicProps) -> Html {
    render_container(
        "div",
        "grid grid-cols-2 gap-8 sm:grid-cols-3 md:grid-cols-4",
        props,
    )
}

/// Props for [`FooterLinkGroup`].
#[derive(Properties, PartialEq)]
pub struct FooterLinkGroupProps {
    /// Group heading.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// [`FooterLink`] elements.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Titled list of links.
#[function_component(FooterLinkGroup)]
pub fn footer_link_group(props: &FooterLinkGroupProps) -> Html {
    html! {
        <div class={merge_classes("flex flex-col gap-3", &props.class)}>
            if let Some(title) = props.title.clone() {
                <h4 class="text-sm font-semibold text-foreground">{ title }</h4>
            }
            <ul class="flex flex-col gap-2">{ for props.children.iter() }</ul>
        </div>
    }
}

/// Props for [`FooterLink`].
#[derive(Properties, PartialEq)]
pub struct FooterLinkProps {
    /// Target URL.
    pub href: AttrValue,
    /// Link text.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Single footer link.
#[function_component(FooterLink)]
pub fn footer_link(props: &FooterLinkProps) -> Html {
    html! {
        <li>
            <a
                href={props.href.clone()}
                class={merge_classes("text-sm text-muted-foreground transition-colors hover:text-foreground", &props.class)}
            >
                { for props.children.iter() }
            </a>
        </li>
    }
}

/// Copyright line.
#[function_component(FooterCopyright)]
pub fn footer_copyright(props: &BasicProps) -> Html {
    render_container("p", "text-sm text-muted-foreground", props)
}
