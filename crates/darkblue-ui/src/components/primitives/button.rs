use crate::core::variants::{BUTTON_BASE, ButtonSize, ButtonVariant};
use yew::prelude::*;

/// Props for [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Label/content.
    #[prop_or_default]
    pub children: Children,
    /// Appearance.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Dimensions.
    #[prop_or_default]
    pub size: ButtonSize,
    /// Disable interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// HTML `type`, `button` unless set.
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    /// Accessible label for icon-only buttons.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Styled `<button>`.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        BUTTON_BASE,
        props.variant.class(),
        props.size.class(),
        props.class.clone()
    );

    html! {
        <button
            class={classes}
            type={props.r#type.clone().unwrap_or_else(|| AttrValue::from("button"))}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
