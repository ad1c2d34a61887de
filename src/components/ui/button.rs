use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::Ghost => "btn--ghost",
            ButtonVariant::Outline => "btn--outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn--sm",
            ButtonSize::Md => "btn--md",
            ButtonSize::Lg => "btn--lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    fn attr(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Class list for a button of the given look. Extra classes go last so they
/// can override spacing.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &Classes) -> Classes {
    classes!("btn", variant.class(), size.class(), "pressable", extra.clone())
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// External target, rendered as a plain anchor.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    /// In-app target, rendered as a router link.
    #[prop_or_default]
    pub to: Option<Route>,
    #[prop_or_default]
    pub kind: ButtonType,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_classes(props.variant, props.size, &props.class);

    if let Some(href) = &props.href {
        return html! {
            <a href={href.clone()} class={class}>
                { for props.children.iter() }
            </a>
        };
    }

    if let Some(to) = &props.to {
        return html! {
            <Link<Route> to={to.clone()} classes={class}>
                { for props.children.iter() }
            </Link<Route>>
        };
    }

    html! {
        <button
            type={props.kind.attr()}
            class={class}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
