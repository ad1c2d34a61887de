use yew::prelude::*;

use crate::animation::{self, STAGGER};
use crate::components::features::{HeroSection, HeroVariant};
use crate::components::motion::Reveal;
use crate::components::ui::{Icon, IconKind, Section, SectionBackground};
use crate::i18n::{use_translation, Namespace};

#[function_component(About)]
pub fn about() -> HtmlResult {
    let t = use_translation(Namespace::About)?;
    let items: Vec<String> = t
        .records("whatWeDo.items")
        .iter()
        .filter_map(|item| item.text().map(str::to_string))
        .collect();

    Ok(html! {
        <div class="page page--about">
            <HeroSection
                title={html! { { t.t("hero.title") } }}
                subtitle={t.t("hero.subtitle")}
                variant={HeroVariant::Light}
            />

            <Section background={SectionBackground::White} id="who-we-are">
                <div class="prose">
                    <h2>{ t.t("whoWeAre.title") }</h2>
                    <p class="prose__lead">{ t.html("whoWeAre.intro") }</p>
                    <p>{ t.html("whoWeAre.description") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::Dark} id="belief">
                <div class="prose prose--inverted">
                    <h2>{ t.t("belief.title") }</h2>
                    <p class="prose__quote">{ t.html("belief.main") }</p>
                    <p>{ t.t("belief.description") }</p>
                    <p>{ t.html("belief.extended") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::Default} id="what-we-do">
                <h2 class="block-header__title">{ t.t("whatWeDo.title") }</h2>
                <ul class="checklist checklist--grid">
                    { for items.into_iter().enumerate().map(|(index, text)| html! {
                        <li>
                            <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)} class="checklist__item">
                                <Icon kind={IconKind::Check} class="checklist__icon" />
                                <span>{ text }</span>
                            </Reveal>
                        </li>
                    }) }
                </ul>
            </Section>
        </div>
    })
}
