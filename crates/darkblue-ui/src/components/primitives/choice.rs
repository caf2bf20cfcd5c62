use crate::core::variants::{CHECKBOX_BASE, ControlSize, RADIO_BASE};
use yew::prelude::*;

/// Props shared by [`Checkbox`] and [`Radio`].
#[derive(Properties, PartialEq)]
pub struct ChoiceProps {
    /// Checked state.
    #[prop_or_default]
    pub checked: bool,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Form field name (radio group).
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Submitted value.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Box size.
    #[prop_or_default]
    pub size: ControlSize,
    /// Disable interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the new checked state.
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

fn render_choice(kind: &'static str, base: &'static str, props: &ChoiceProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };
    html! {
        <input
            type={kind}
            class={classes!(base, props.size.choice_class(), props.class.clone())}
            checked={props.checked}
            id={props.id.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            disabled={props.disabled}
            onchange={onchange}
        />
    }
}

/// Styled checkbox.
#[function_component(Checkbox)]
pub fn checkbox(props: &ChoiceProps) -> Html {
    render_choice("checkbox", CHECKBOX_BASE, props)
}

/// Styled radio button.
#[function_component(Radio)]
pub fn radio(props: &ChoiceProps) -> Html {
    render_choice("radio", RADIO_BASE, props)
}
