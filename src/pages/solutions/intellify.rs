use yew::prelude::*;

use super::{ImpactList, SolutionSwitcher};
use crate::animation::{self, STAGGER};
use crate::components::features::{usable_records, Columns, FeatureShowcase, HeroSection, HeroVariant};
use crate::components::motion::Reveal;
use crate::components::ui::{Button, ButtonSize, CardVariant, IconKind, Section, SectionBackground};
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
struct Stage {
    number: usize,
    title: String,
    subtitle: Option<String>,
}

#[function_component(Intellify)]
pub fn intellify() -> HtmlResult {
    let t = use_translation(Namespace::Solutions)?;
    let common = use_translation(Namespace::Common)?;

    let stages = usable_records("Methodology", &t.records("smartify.methodology.stages"), |stage| {
        Some((stage.title()?.to_string(), stage.subtitle.clone()))
    })
    .into_iter()
    .enumerate()
    .map(|(index, (title, subtitle))| Stage {
        number: index + 1,
        title,
        subtitle,
    })
    .collect::<Vec<_>>();

    Ok(html! {
        <div class="page page--intellify">
            <HeroSection
                title={html! { { t.t("smartify.hero.title") } }}
                subtitle={t.t("smartify.hero.subtitle")}
                description={html! { { t.t("smartify.hero.description") } }}
                variant={HeroVariant::Default}
            />

            <SolutionSwitcher active={Route::Intellify} />

            <Section background={SectionBackground::Default} id="intro">
                <div class="prose">
                    <h2>{ t.t("smartify.intro.title") }</h2>
                    <p>{ t.html("smartify.intro.description") }</p>
                    <p class="prose__lead">{ t.t("smartify.intro.conclusion") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::White} id="purpose">
                <div class="prose">
                    <h2>{ t.t("smartify.purpose.title") }</h2>
                    <p>{ t.t("smartify.purpose.text") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::Default} id="what-we-do">
                <FeatureShowcase
                    title={t.t("smartify.whatWeDo.title")}
                    features={t.records("smartify.whatWeDo.items")}
                    columns={Columns::Two}
                    variant={CardVariant::Smartify}
                />
            </Section>

            <Section background={SectionBackground::White} id="impact">
                <h2 class="block-header__title">{ t.t("smartify.impact.title") }</h2>
                <ImpactList items={t.list("smartify.impact.items")} icon={IconKind::Lightbulb} />
            </Section>

            <Section background={SectionBackground::Dark} id="approach">
                <div class="prose prose--inverted">
                    <h2>{ t.t("smartify.approach.title") }</h2>
                    <p class="prose__quote">{ t.html("smartify.approach.main") }</p>
                    <p>{ t.t("smartify.approach.conclusion") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::Default} id="methodology">
                <header class="block-header">
                    <h2 class="block-header__title">{ t.t("smartify.methodology.title") }</h2>
                    <p class="block-header__subtitle">{ t.t("smartify.methodology.subtitle") }</p>
                </header>
                <ol class="stages">
                    { for stages.into_iter().map(|stage| html! {
                        <li class="stages__item">
                            <Reveal preset={animation::SCALE_IN} delay={STAGGER.delay_for(stage.number - 1)}>
                                <span class="stages__number">{ format!("{:02}", stage.number) }</span>
                                <h3 class="stages__title">{ stage.title }</h3>
                                if let Some(subtitle) = stage.subtitle {
                                    <p class="stages__subtitle">{ subtitle }</p>
                                }
                            </Reveal>
                        </li>
                    }) }
                </ol>
                <p class="stages__footer">{ t.t("smartify.methodology.footer") }</p>
            </Section>

            <Section background={SectionBackground::Gradient}>
                <div class="cta-band">
                    <Button to={Route::Contact} size={ButtonSize::Lg}>
                        { common.t("buttons.startTogether") }
                    </Button>
                </div>
            </Section>
        </div>
    })
}
