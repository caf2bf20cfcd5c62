use crate::components::foundations::{BasicProps, render_container};
use crate::core::variants::{CARD_BASE, CardVariant, Surface};
use yew::prelude::*;

/// Props for [`Card`].
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Header, content and footer.
    #[prop_or_default]
    pub children: Children,
    /// Border and shadow treatment.
    #[prop_or_default]
    pub variant: CardVariant,
    /// Background elevation.
    #[prop_or_default]
    pub surface: Surface,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Bordered content panel.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!(CARD_BASE, props.variant.class(), props.surface.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

/// Title and description block.
#[function_component(CardHeader)]
pub fn card_header(props: &BasicProps) -> Html {
    render_container("div", "flex flex-col space-y-1.5 p-6", props)
}

/// Card heading.
#[function_component(CardTitle)]
pub fn card_title(props: &BasicProps) -> Html {
    render_container(
        "h3",
        "text-2xl font-semibold leading-none tracking-tight",
        props,
    )
}

/// Muted line under the title.
#[function_component(CardDescription)]
pub fn card_description(props: &BasicProps) -> Html {
    render_container("p", "text-sm text-muted-foreground", props)
}

/// Card body.
#[function_component(CardContent)]
pub fn card_content(props: &BasicProps) -> Html {
    render_container("div", "p-6 pt-0", props)
}

/// Action row at the bottom of a card.
#[function_component(CardFooter)]
pub fn card_footer(props: &BasicProps) -> Html {
    render_container("div", "flex items-center p-6 pt-0", props)
}
