use crate::core::variants::{ControlSize, FieldVariant, LABEL_BASE, SELECT_BASE};
use yew::prelude::*;

/// Props for [`Select`].
#[derive(Properties, PartialEq)]
pub struct SelectProps {
    /// `<option>` elements.
    #[prop_or_default]
    pub children: Children,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Selected option value.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Validation tone.
    #[prop_or_default]
    pub variant: FieldVariant,
    /// Height.
    #[prop_or_default]
    pub size: ControlSize,
    /// Disable interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the chosen option value.
    #[prop_or_default]
    pub onchange: Callback<String>,
}

/// Styled native `<select>`.
#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(select.value());
            }
        })
    };
    html! {
        <select
            class={classes!(
                SELECT_BASE,
                props.variant.class(),
                props.size.field_class(),
                props.class.clone()
            )}
            id={props.id.clone()}
            value={props.value.clone()}
            disabled={props.disabled}
            onchange={onchange}
        >
            { for props.children.iter() }
        </select>
    }
}

/// Props for [`Label`].
#[derive(Properties, PartialEq)]
pub struct LabelProps {
    /// Label text.
    #[prop_or_default]
    pub children: Children,
    /// Id of the labelled control.
    #[prop_or_default]
    pub html_for: Option<AttrValue>,
    /// Render in the destructive color.
    #[prop_or_default]
    pub error: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Form label.
#[function_component(Label)]
pub fn label(props: &LabelProps) -> Html {
    html! {
        <label
            class={classes!(LABEL_BASE, props.error.then_some("text-destructive"), props.class.clone())}
            for={props.html_for.clone()}
        >
            { for props.children.iter() }
        </label>
    }
}
