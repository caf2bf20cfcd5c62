//! Theme provider and toggle.
//!
//! The provider owns the stored preference plus the live OS preference and
//! keeps the document element's `light`/`dark` class in sync with them.

use crate::components::primitives::Button;
use crate::core::theme::{ResolvedTheme, ThemeMode};
use crate::core::variants::{ButtonSize, ButtonVariant};
use crate::hooks::{ThemeHandle, use_theme};
use crate::preferences::{
    apply_theme, load_theme, persist_theme, system_prefers_dark, watch_system_theme,
};
use yew::prelude::*;

/// Props for [`ThemeProvider`].
#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Subtree that may call [`crate::hooks::use_theme`].
    #[prop_or_default]
    pub children: Children,
}

/// Supplies [`ThemeHandle`] to its subtree.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = use_state(load_theme);
    let system_dark = use_state(system_prefers_dark);
    let resolved = mode.resolve(*system_dark);

    use_effect_with_deps(
        move |resolved| {
            apply_theme(*resolved);
            || ()
        },
        resolved,
    );

    {
        let system_dark = system_dark.clone();
        use_effect_with_deps(
            move |_| {
                let listener =
                    watch_system_theme(Callback::from(move |dark| system_dark.set(dark)));
                move || drop(listener)
            },
            (),
        );
    }

    let set_mode = {
        let mode = mode.clone();
        Callback::from(move |next: ThemeMode| {
            persist_theme(next);
            mode.set(next);
        })
    };
    let handle = ThemeHandle {
        mode: *mode,
        resolved,
        set_mode,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<ThemeHandle>>
    }
}

/// Props for [`ThemeToggle`].
#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Button switching between explicit light and dark.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_theme();
    let (label, glyph) = match theme.resolved() {
        ResolvedTheme::Light => ("Switch to dark theme", "☾"),
        ResolvedTheme::Dark => ("Switch to light theme", "☀"),
    };
    let onclick = Callback::from(move |_: MouseEvent| theme.toggle());

    html! {
        <Button
            variant={ButtonVariant::Ghost}
            size={ButtonSize::Icon}
            aria_label={AttrValue::from(label)}
            class={props.class.clone()}
            {onclick}
        >
            { glyph }
        </Button>
    }
}
