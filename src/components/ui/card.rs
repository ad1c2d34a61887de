use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Accent palette. Each solution line has its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Simplify,
    Accelerate,
    Smartify,
}

impl CardVariant {
    pub fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "card--default",
            CardVariant::Simplify => "card--simplify",
            CardVariant::Accelerate => "card--accelerate",
            CardVariant::Smartify => "card--smartify",
        }
    }

    /// Palette named by content (`color` fields, card ids). `intellify`
    /// shares the smartify palette.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(CardVariant::Default),
            "simplify" => Some(CardVariant::Simplify),
            "accelerate" => Some(CardVariant::Accelerate),
            "smartify" | "intellify" => Some(CardVariant::Smartify),
            _ => None,
        }
    }
}

pub fn card_classes(variant: CardVariant, hover: bool, extra: &Classes) -> Classes {
    classes!(
        "card",
        variant.class(),
        hover.then_some("card--hover"),
        extra.clone()
    )
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or(true)]
    pub hover: bool,
    /// Makes the whole card a link.
    #[prop_or_default]
    pub to: Option<Route>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = card_classes(props.variant, props.hover, &props.class);

    match &props.to {
        Some(to) => html! {
            <Link<Route> to={to.clone()} classes={classes!(class, "card--link")}>
                { for props.children.iter() }
            </Link<Route>>
        },
        None => html! {
            <div class={class}>
                { for props.children.iter() }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_adds_lift_class() {
        let with = card_classes(CardVariant::Accelerate, true, &Classes::new()).to_string();
        let without = card_classes(CardVariant::Accelerate, false, &Classes::new()).to_string();
        assert!(with.contains("card--hover"));
        assert!(!without.contains("card--hover"));
        assert!(without.contains("card--accelerate"));
    }

    #[test]
    fn palette_names_resolve() {
        assert_eq!(CardVariant::from_name("intellify"), Some(CardVariant::Smartify));
        assert_eq!(CardVariant::from_name("simplify"), Some(CardVariant::Simplify));
        assert_eq!(CardVariant::from_name("purple"), None);
    }
}
