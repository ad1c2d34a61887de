use yew::prelude::*;

use crate::animation::{self, STAGGER};
use crate::components::features::{usable_records, HeroSection, HeroVariant};
use crate::components::motion::Reveal;
use crate::components::ui::{Card, CardVariant, Icon, IconKind, Section, SectionBackground};
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

const PARTNERS: [&str; 4] = ["Google", "Meta", "AWS", "Microsoft"];

struct ApproachCard {
    id: String,
    subtitle: Option<String>,
    title: String,
    description: String,
    link: Option<String>,
}

#[function_component(Home)]
pub fn home() -> HtmlResult {
    let t = use_translation(Namespace::Home)?;

    let approach = usable_records("Approach", &t.records("approach.cards"), |card| {
        let (title, description) = card.title_and_description()?;
        Some(ApproachCard {
            id: card.id.clone().unwrap_or_default(),
            subtitle: card.subtitle.clone(),
            title: title.to_string(),
            description: description.to_string(),
            link: card.link.clone(),
        })
    });
    let reasons = usable_records("Why", &t.records("why.reasons"), |reason| {
        reason.text().map(str::to_string)
    });

    Ok(html! {
        <div class="page page--home">
            <HeroSection
                title={t.html("hero.title")}
                subtitle={t.t("hero.subtitle")}
                cta_text={t.t("hero.cta")}
                cta_link={Route::Services}
                variant={HeroVariant::Default}
            />

            <Section background={SectionBackground::White} id="approach">
                <header class="block-header">
                    <h2 class="block-header__title">{ t.t("approach.title") }</h2>
                    <p class="block-header__subtitle">{ t.t("approach.subtitle") }</p>
                </header>
                <div class="grid grid--3">
                    { for approach.into_iter().enumerate().map(|(index, card)| {
                        let variant = CardVariant::from_name(&card.id).unwrap_or_default();
                        html! {
                            <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)}>
                                <Card variant={variant} to={Route::solution(&card.id)}>
                                    if let Some(subtitle) = card.subtitle {
                                        <span class="card__eyebrow">{ subtitle }</span>
                                    }
                                    <h3 class="card__title">{ card.title }</h3>
                                    <p class="card__text">{ card.description }</p>
                                    if let Some(link) = card.link {
                                        <span class="card__more">
                                            { link }
                                            <Icon kind={IconKind::ArrowRight} class="card__more-icon" />
                                        </span>
                                    }
                                </Card>
                            </Reveal>
                        }
                    }) }
                </div>
            </Section>

            <Section background={SectionBackground::Default} id="why">
                <h2 class="block-header__title">{ t.t("why.title") }</h2>
                <ul class="checklist">
                    { for reasons.into_iter().enumerate().map(|(index, text)| html! {
                        <li>
                            <Reveal preset={animation::SLIDE_IN_LEFT} delay={STAGGER.delay_for(index)} class="checklist__item">
                                <Icon kind={IconKind::CheckCircle} class="checklist__icon" />
                                <span>{ text }</span>
                            </Reveal>
                        </li>
                    }) }
                </ul>
            </Section>

            <Section background={SectionBackground::White} class="partners">
                <p class="partners__title">{ t.t("partners.title") }</p>
                <div class="partners__row">
                    { for PARTNERS.iter().map(|name| html! {
                        <span class="partners__badge">{ *name }</span>
                    }) }
                </div>
            </Section>
        </div>
    })
}
