use yew::prelude::*;
use yew_router::prelude::*;

use super::usable_records;
use crate::animation::{self, STAGGER};
use crate::components::motion::{Reveal, Trigger};
use crate::components::ui::{card_classes, Button, ButtonSize, CardVariant, Icon, IconKind};
use crate::i18n::ContentRecord;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroVariant {
    #[default]
    Default,
    Dark,
    Light,
}

impl HeroVariant {
    fn class(self) -> &'static str {
        match self {
            HeroVariant::Default => "hero--default",
            HeroVariant::Dark => "hero--dark",
            HeroVariant::Light => "hero--light",
        }
    }
}

/// Solution cards under a hero cycle through the three line palettes.
pub fn hero_card_variant(index: usize) -> CardVariant {
    match index % 3 {
        0 => CardVariant::Simplify,
        1 => CardVariant::Accelerate,
        _ => CardVariant::Smartify,
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub title: Html,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<Html>,
    #[prop_or_default]
    pub cta_text: Option<AttrValue>,
    #[prop_or_default]
    pub cta_link: Option<Route>,
    #[prop_or_default]
    pub variant: HeroVariant,
    #[prop_or_default]
    pub cards: Vec<ContentRecord>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let cards = usable_records("HeroSection", &props.cards, |record| {
        let (title, description) = record.title_and_description()?;
        Some((record.id.clone(), title, description))
    });

    let cta = match (&props.cta_text, &props.cta_link) {
        (Some(text), Some(to)) => html! {
            <Reveal preset={animation::HERO_TEXT} trigger={Trigger::Mount} delay={0.3_f32}>
                <Button to={to.clone()} size={ButtonSize::Lg}>
                    { text.clone() }
                    <Icon kind={IconKind::ArrowRight} class="btn__icon" />
                </Button>
            </Reveal>
        },
        _ => html! {},
    };

    html! {
        <section class={classes!("hero", props.variant.class())}>
            <div class="container hero__inner">
                <Reveal preset={animation::HERO_TEXT} trigger={Trigger::Mount}>
                    <h1 class="hero__title">{ props.title.clone() }</h1>
                </Reveal>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! {
                            <Reveal preset={animation::HERO_TEXT} trigger={Trigger::Mount} delay={0.1_f32}>
                                <p class="hero__subtitle">{ subtitle.clone() }</p>
                            </Reveal>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(description) = &props.description {
                        html! {
                            <Reveal preset={animation::HERO_TEXT} trigger={Trigger::Mount} delay={0.2_f32}>
                                <p class="hero__description">{ description.clone() }</p>
                            </Reveal>
                        }
                    } else {
                        html! {}
                    }
                }
                { cta }
                {
                    if cards.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="hero__cards">
                                { for cards.into_iter().enumerate().map(|(index, (id, title, description))| {
                                    let class = card_classes(hero_card_variant(index), true, &classes!("hero__card"));
                                    let body = html! {
                                        <>
                                            <h3 class="card__title">{ title }</h3>
                                            <p class="card__text">{ description }</p>
                                        </>
                                    };
                                    let target = id.as_deref().and_then(Route::solution);
                                    html! {
                                        <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)}>
                                            {
                                                match target {
                                                    Some(to) => html! {
                                                        <Link<Route> to={to} classes={class}>{ body }</Link<Route>>
                                                    },
                                                    None => html! { <div class={class}>{ body }</div> },
                                                }
                                            }
                                        </Reveal>
                                    }
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_palettes_cycle_by_index() {
        assert_eq!(hero_card_variant(0), CardVariant::Simplify);
        assert_eq!(hero_card_variant(1), CardVariant::Accelerate);
        assert_eq!(hero_card_variant(2), CardVariant::Smartify);
        assert_eq!(hero_card_variant(3), CardVariant::Simplify);
    }
}
