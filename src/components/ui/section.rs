use yew::prelude::*;

use crate::animation;
use crate::components::motion::Reveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBackground {
    #[default]
    Default,
    White,
    Dark,
    Gradient,
}

impl SectionBackground {
    pub fn class(self) -> &'static str {
        match self {
            SectionBackground::Default => "section--default",
            SectionBackground::White => "section--white",
            SectionBackground::Dark => "section--dark",
            SectionBackground::Gradient => "section--gradient",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub background: SectionBackground,
    /// Fade the content in when it scrolls into view.
    #[prop_or(true)]
    pub animate: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let content = if props.animate {
        html! {
            <Reveal preset={animation::FADE_IN} class="container">
                { for props.children.iter() }
            </Reveal>
        }
    } else {
        html! {
            <div class="container">
                { for props.children.iter() }
            </div>
        }
    };

    html! {
        <section
            id={props.id.clone()}
            class={classes!("section", props.background.class(), props.class.clone())}
        >
            { content }
        </section>
    }
}
