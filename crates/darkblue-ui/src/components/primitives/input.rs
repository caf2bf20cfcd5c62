use crate::components::icons::{EyeIcon, EyeOffIcon, LockIcon};
use crate::core::variants::{ControlSize, FieldVariant, INPUT_BASE, TEXTAREA_BASE};
use yew::prelude::*;

/// Props for [`Input`].
#[derive(Properties, PartialEq)]
pub struct InputProps {
    /// Current value.
    #[prop_or_default]
    pub value: AttrValue,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// HTML input type, `text` unless set.
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Form field name.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Validation tone.
    #[prop_or_default]
    pub variant: FieldVariant,
    /// Height.
    #[prop_or_default]
    pub size: ControlSize,
    /// Adornment inside the left edge.
    #[prop_or_default]
    pub leading: Option<Html>,
    /// Adornment inside the right edge.
    #[prop_or_default]
    pub trailing: Option<Html>,
    /// Disable interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes for the `<input>`.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the new value on every keystroke.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

fn input_value(oninput: &Callback<String>) -> Callback<InputEvent> {
    let oninput = oninput.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            oninput.emit(input.value());
        }
    })
}

/// Text input with optional leading/trailing adornments.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let classes = classes!(
        INPUT_BASE,
        props.variant.class(),
        props.size.field_class(),
        props.leading.is_some().then_some("pl-10"),
        props.trailing.is_some().then_some("pr-10"),
        props.class.clone()
    );
    let field = html! {
        <input
            class={classes}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            id={props.id.clone()}
            name={props.name.clone()}
            disabled={props.disabled}
            oninput={input_value(&props.oninput)}
        />
    };

    if props.leading.is_none() && props.trailing.is_none() {
        return field;
    }

    html! {
        <div class="relative">
            if let Some(leading) = props.leading.clone() {
                <div class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground">
                    { leading }
                </div>
            }
            { field }
            if let Some(trailing) = props.trailing.clone() {
                <div class="absolute right-3 top-1/2 -translate-y-1/2 text-muted-foreground">
                    { trailing }
                </div>
            }
        </div>
    }
}

/// Props for [`PasswordInput`].
#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    /// Current value.
    #[prop_or_default]
    pub value: AttrValue,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Validation tone.
    #[prop_or_default]
    pub variant: FieldVariant,
    /// Height.
    #[prop_or_default]
    pub size: ControlSize,
    /// Show the padlock adornment.
    #[prop_or(true)]
    pub show_leading_icon: bool,
    /// Disable interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes for the `<input>`.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the new value on every keystroke.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Password field with a show/hide toggle.
#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let visible = use_state(|| false);
    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };
    let classes = classes!(
        INPUT_BASE,
        props.variant.class(),
        props.size.field_class(),
        props.show_leading_icon.then_some("pl-10"),
        "pr-10",
        props.class.clone()
    );
    let (toggle_label, toggle_icon) = if *visible {
        ("Hide password", html! { <EyeOffIcon /> })
    } else {
        ("Show password", html! { <EyeIcon /> })
    };

    html! {
        <div class="relative">
            if props.show_leading_icon {
                <div class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground">
                    <LockIcon />
                </div>
            }
            <input
                class={classes}
                type={if *visible { "text" } else { "password" }}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                id={props.id.clone()}
                disabled={props.disabled}
                oninput={input_value(&props.oninput)}
            />
            <button
                type="button"
                class="absolute right-3 top-1/2 -translate-y-1/2 text-muted-foreground transition-colors hover:text-foreground disabled:pointer-events-none"
                aria-label={toggle_label}
                disabled={props.disabled}
                onclick={toggle}
            >
                { toggle_icon }
            </button>
        </div>
    }
}

/// Props for [`Textarea`].
#[derive(Properties, PartialEq)]
pub struct TextareaProps {
    /// Current value.
    #[prop_or_default]
    pub value: AttrValue,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Validation tone.
    #[prop_or_default]
    pub variant: FieldVariant,
    /// Visible rows.
    #[prop_or(4u32)]
    pub rows: u32,
    /// Disable interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the new value on every keystroke.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Multi-line text input.
#[function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                oninput.emit(input.value());
            }
        })
    };
    html! {
        <textarea
            class={classes!(TEXTAREA_BASE, props.variant.class(), props.class.clone())}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            id={props.id.clone()}
            rows={props.rows.to_string()}
            disabled={props.disabled}
            oninput={oninput}
        />
    }
}
