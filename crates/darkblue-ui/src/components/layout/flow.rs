//! Width-limited containers, flex stacks and grids.

use crate::core::variants::{
    Align, CONTAINER_BASE, ContainerSize, Justify, StackDirection, gap_class, grid_cols_class,
};
use yew::prelude::*;

/// Props for [`Container`].
#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    /// Content.
    #[prop_or_default]
    pub children: Children,
    /// Maximum width.
    #[prop_or_default]
    pub size: ContainerSize,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Centered, padded, width-limited block.
#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!(CONTAINER_BASE, props.size.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`Stack`].
#[derive(Properties, PartialEq)]
pub struct StackProps {
    /// Content.
    #[prop_or_default]
    pub children: Children,
    /// Main axis.
    #[prop_or_default]
    pub direction: StackDirection,
    /// Spacing step (0-6, 8, 10, 12).
    #[prop_or(4)]
    pub gap: u8,
    /// Cross-axis alignment.
    #[prop_or_default]
    pub align: Align,
    /// Main-axis distribution.
    #[prop_or_default]
    pub justify: Justify,
    /// Allow wrapping.
    #[prop_or_default]
    pub wrap: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Flexbox row or column.
#[function_component(Stack)]
pub fn stack(props: &StackProps) -> Html {
    let classes = classes!(
        "flex",
        props.direction.class(),
        gap_class(props.gap),
        props.align.class(),
        props.justify.content_class(),
        props.wrap.then_some("flex-wrap"),
        props.class.clone()
    );
    html! {
        <div class={classes}>
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`Grid`].
#[derive(Properties, PartialEq)]
pub struct GridProps {
    /// Content.
    #[prop_or_default]
    pub children: Children,
    /// Column count (1-6 or 12).
    #[prop_or(1)]
    pub cols: u8,
    /// Spacing step (0-6, 8, 10, 12).
    #[prop_or(4)]
    pub gap: u8,
    /// Vertical alignment within cells.
    #[prop_or_default]
    pub align: Align,
    /// Horizontal alignment within cells.
    #[prop_or(Justify::Stretch)]
    pub justify: Justify,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// CSS grid.
#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    let classes = classes!(
        "grid",
        grid_cols_class(props.cols),
        gap_class(props.gap),
        props.align.class(),
        props.justify.items_class(),
        props.class.clone()
    );
    html! {
        <div class={classes}>
            { for props.children.iter() }
        </div>
    }
}
