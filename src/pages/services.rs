use yew::prelude::*;

use crate::animation::{self, STAGGER};
use crate::components::features::{usable_records, HeroSection, HeroVariant};
use crate::components::motion::Reveal;
use crate::components::ui::{Button, ButtonSize, Card, Icon, IconKind, Section, SectionBackground};
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

/// The service lines the services page knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    DigitalProcess,
    DecisionAcceleration,
    AiArchitecture,
    Other,
}

impl ServiceKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "digital-process" => ServiceKind::DigitalProcess,
            "decision-acceleration" => ServiceKind::DecisionAcceleration,
            "ai-architecture" => ServiceKind::AiArchitecture,
            _ => ServiceKind::Other,
        }
    }

    pub fn route(self) -> Route {
        match self {
            ServiceKind::DigitalProcess => Route::Simplify,
            ServiceKind::DecisionAcceleration => Route::Accelerate,
            ServiceKind::AiArchitecture => Route::Intellify,
            ServiceKind::Other => Route::Services,
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            ServiceKind::DigitalProcess => IconKind::Settings,
            ServiceKind::DecisionAcceleration => IconKind::Zap,
            ServiceKind::AiArchitecture => IconKind::Brain,
            ServiceKind::Other => IconKind::Strategy,
        }
    }

    fn accent(self) -> &'static str {
        match self {
            ServiceKind::DigitalProcess => "service--simplify",
            ServiceKind::DecisionAcceleration => "service--accelerate",
            ServiceKind::AiArchitecture => "service--smartify",
            ServiceKind::Other => "service--default",
        }
    }
}

#[function_component(Services)]
pub fn services() -> HtmlResult {
    let t = use_translation(Namespace::Services)?;
    let services = usable_records("Services", &t.records("services"), |service| {
        let (title, description) = service.title_and_description()?;
        let kind = ServiceKind::from_id(service.id.as_deref().unwrap_or_default());
        Some((kind, title.to_string(), description.to_string(), service.link.clone()))
    });

    Ok(html! {
        <div class="page page--services">
            <HeroSection
                title={html! { { t.t("hero.title") } }}
                subtitle={t.t("hero.subtitle")}
                description={html! { { t.t("hero.description") } }}
                variant={HeroVariant::Light}
            />

            <Section background={SectionBackground::Default}>
                <div class="grid grid--3">
                    { for services.into_iter().enumerate().map(|(index, (kind, title, description, link))| {
                        html! {
                            <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)}>
                                <Card class={classes!("service", kind.accent())} to={kind.route()}>
                                    <div class="service__icon"><Icon kind={kind.icon()} /></div>
                                    <h3 class="card__title">{ title }</h3>
                                    <p class="card__text">{ description }</p>
                                    if let Some(link) = link {
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

            <Section background={SectionBackground::Gradient}>
                <div class="cta-band">
                    <p class="cta-band__text">{ t.t("cta.text") }</p>
                    <Button to={Route::Contact} size={ButtonSize::Lg}>{ t.t("cta.button") }</Button>
                </div>
            </Section>
        </div>
    })
}
