//! The three solution lines. Each page opens with the shared switcher so a
//! visitor can hop between them.

pub mod accelerate;
pub mod intellify;
pub mod simplify;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{self, STAGGER};
use crate::components::features::{hero_card_variant, usable_records};
use crate::components::motion::Reveal;
use crate::components::ui::{card_classes, Icon, IconKind, Section, SectionBackground};
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
struct SwitcherCard {
    route: Route,
    title: String,
    description: String,
}

#[derive(Properties, PartialEq)]
pub struct SolutionSwitcherProps {
    /// The page being shown; its card is highlighted and not a link.
    pub active: Route,
}

#[function_component(SolutionSwitcher)]
pub fn solution_switcher(props: &SolutionSwitcherProps) -> HtmlResult {
    let t = use_translation(Namespace::Solutions)?;
    let cards = usable_records("SolutionSwitcher", &t.records("cards"), |card| {
        let route = Route::solution(card.id.as_deref()?)?;
        let (title, description) = card.title_and_description()?;
        Some(SwitcherCard {
            route,
            title: title.to_string(),
            description: description.to_string(),
        })
    });

    Ok(html! {
        <Section background={SectionBackground::White} animate={false} class="switcher">
            <p class="switcher__title">{ t.t("switcher.title") }</p>
            <div class="grid grid--3">
                { for cards.into_iter().enumerate().map(|(index, card)| {
                    let active = card.route == props.active;
                    let class = card_classes(
                        hero_card_variant(index),
                        !active,
                        &classes!("switcher__card", active.then_some("is-active")),
                    );
                    let body = html! {
                        <>
                            <h3 class="card__title">{ card.title }</h3>
                            <p class="card__text">{ card.description }</p>
                        </>
                    };
                    html! {
                        <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)}>
                            if active {
                                <div {class} aria-current="page">{ body }</div>
                            } else {
                                <Link<Route> to={card.route} classes={class}>{ body }</Link<Route>>
                            }
                        </Reveal>
                    }
                }) }
            </div>
        </Section>
    })
}

#[derive(Properties, PartialEq)]
pub struct ImpactListProps {
    pub items: Vec<String>,
    #[prop_or(IconKind::CheckCircle)]
    pub icon: IconKind,
}

#[function_component(ImpactList)]
pub fn impact_list(props: &ImpactListProps) -> Html {
    html! {
        <ul class="checklist checklist--grid">
            { for props.items.iter().filter(|item| !item.trim().is_empty()).enumerate().map(|(index, item)| html! {
                <li>
                    <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)} class="checklist__item">
                        <Icon kind={props.icon} class="checklist__icon" />
                        <span>{ item.clone() }</span>
                    </Reveal>
                </li>
            }) }
        </ul>
    }
}
