use crate::components::foundations::{BasicProps, aria_bool, merge_classes};
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::core::context::ContextSite;
use crate::core::disclosure::{DisclosureAction, DisclosureState, DisclosureValue};
use crate::core::format::slide_offset_style;
use crate::hooks::{DisclosureHandle, use_disclosure, use_required_context};
use yew::prelude::*;

const NAV_BUTTON_CLASS: &str = "absolute top-1/2 -translate-y-1/2 inline-flex h-10 w-10 items-center justify-center rounded-full bg-background/80 backdrop-blur-sm border border-border shadow-sm transition-colors hover:bg-background disabled:pointer-events-none disabled:opacity-50";

#[derive(Clone, PartialEq)]
struct CarouselContext(DisclosureHandle);

/// Props for [`Carousel`].
#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Content, navigation buttons and indicators.
    #[prop_or_default]
    pub children: Children,
    /// Starting slide when uncontrolled.
    #[prop_or_default]
    pub default_index: usize,
    /// Current slide when controlled.
    #[prop_or_default]
    pub index: Option<usize>,
    /// Wrap past the first and last slide.
    #[prop_or_default]
    pub looping: bool,
    /// Receives the slide index after every move.
    #[prop_or_default]
    pub on_index_change: Callback<usize>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Horizontally sliding set of panels.
///
/// The root is focusable; `ArrowLeft` and `ArrowRight` move one slide.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let handle = use_disclosure(
        DisclosureState::indexed(props.default_index, props.looping),
        props.index.map(DisclosureValue::Index),
        props
            .on_index_change
            .reform(|value: DisclosureValue| value.index().unwrap_or_default()),
    );

    let onkeydown = {
        let handle = handle.clone();
        Callback::from(move |event: KeyboardEvent| {
            let step = match event.key().as_str() {
                "ArrowLeft" => -1,
                "ArrowRight" => 1,
                _ => return,
            };
            event.prevent_default();
            handle.dispatch(DisclosureAction::Step(step));
        })
    };

    html! {
        <ContextProvider<CarouselContext> context={CarouselContext(handle)}>
            <div
                role="region"
                aria-roledescription="carousel"
                aria-label="Carousel"
                tabindex="0"
                class={merge_classes("relative w-full focus-visible:outline-none", &props.class)}
                {onkeydown}
            >
                { for props.children.iter() }
            </div>
        </ContextProvider<CarouselContext>>
    }
}

/// Sliding track; reports how many slides it holds.
#[function_component(CarouselContent)]
pub fn carousel_content(props: &BasicProps) -> Html {
    let CarouselContext(root) =
        use_required_context::<CarouselContext>(ContextSite::new("CarouselContent", "Carousel"));
    let count = props.children.len();

    {
        let root = root.clone();
        use_effect_with_deps(
            move |count| {
                root.dispatch(DisclosureAction::Measure(*count));
                || ()
            },
            count,
        );
    }

    html! {
        <div class="overflow-hidden rounded-lg">
            <div
                class={merge_classes("flex transition-transform duration-300 ease-in-out", &props.class)}
                style={slide_offset_style(root.index())}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// One slide.
#[function_component(CarouselItem)]
pub fn carousel_item(props: &BasicProps) -> Html {
    html! {
        <div
            role="group"
            aria-roledescription="slide"
            class={merge_classes("w-full flex-shrink-0", &props.class)}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`CarouselPrevious`] and [`CarouselNext`].
#[derive(Properties, PartialEq)]
pub struct CarouselNavProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Step back one slide.
#[function_component(CarouselPrevious)]
pub fn carousel_previous(props: &CarouselNavProps) -> Html {
    let CarouselContext(root) =
        use_required_context::<CarouselContext>(ContextSite::new("CarouselPrevious", "Carousel"));
    let enabled = root.state().bounds().can_step_back(root.index());

    html! {
        <button
            type="button"
            aria-label="Previous slide"
            disabled={!enabled}
            class={classes!(NAV_BUTTON_CLASS, "left-3", props.class.clone())}
            onclick={root.on::<MouseEvent>(DisclosureAction::Step(-1))}
        >
            <ChevronLeftIcon />
        </button>
    }
}

/// Step forward one slide.
#[function_component(CarouselNext)]
pub fn carousel_next(props: &CarouselNavProps) -> Html {
    let CarouselContext(root) =
        use_required_context::<CarouselContext>(ContextSite::new("CarouselNext", "Carousel"));
    let enabled = root.state().bounds().can_step_forward(root.index());

    html! {
        <button
            type="button"
            aria-label="Next slide"
            disabled={!enabled}
            class={classes!(NAV_BUTTON_CLASS, "right-3", props.class.clone())}
            onclick={root.on::<MouseEvent>(DisclosureAction::Step(1))}
        >
            <ChevronRightIcon />
        </button>
    }
}

/// Dot per slide; the active one is widened.
#[function_component(CarouselIndicators)]
pub fn carousel_indicators(props: &CarouselNavProps) -> Html {
    let CarouselContext(root) = use_required_context::<CarouselContext>(ContextSite::new(
        "CarouselIndicators",
        "Carousel",
    ));
    let current = root.index();
    let count = root.state().bounds().item_count.unwrap_or_default();

    let dots = (0..count).map(|slot| {
        let active = slot == current;
        let target = isize::try_from(slot).unwrap_or(isize::MAX);
        html! {
            <button
                key={slot.to_string()}
                type="button"
                role="tab"
                aria-selected={aria_bool(active)}
                aria-label={format!("Go to slide {}", slot + 1)}
                class={classes!(
                    "h-2",
                    "rounded-full",
                    "transition-all",
                    if active {
                        "w-6 bg-primary"
                    } else {
                        "w-2 bg-muted-foreground/30 hover:bg-muted-foreground/50"
                    }
                )}
                onclick={root.on::<MouseEvent>(DisclosureAction::GoTo(target))}
            />
        }
    });

    html! {
        <div role="tablist" class={merge_classes("flex items-center justify-center gap-2 pt-4", &props.class)}>
            { for dots }
        </div>
    }
}
