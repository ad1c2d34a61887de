use yew::prelude::*;

use super::{ImpactList, SolutionSwitcher};
use crate::components::features::{Columns, FeatureShowcase, HeroSection, HeroVariant, StatsGrid, StatsVariant};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, CardVariant, Section, SectionBackground};
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

#[function_component(Simplify)]
pub fn simplify() -> HtmlResult {
    let t = use_translation(Namespace::Solutions)?;

    Ok(html! {
        <div class="page page--simplify">
            <HeroSection
                title={html! { { t.t("simplify.hero.title") } }}
                subtitle={t.t("simplify.hero.subtitle")}
                description={html! { { t.t("simplify.hero.description") } }}
                cta_text={t.t("simplify.hero.cta")}
                cta_link={Route::Contact}
                variant={HeroVariant::Light}
            />

            <SolutionSwitcher active={Route::Simplify} />

            <Section background={SectionBackground::Default} id="intro">
                <div class="prose">
                    <h2>{ t.t("simplify.intro.title") }</h2>
                    <p>{ t.html("simplify.intro.description") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::White} id="what-we-do">
                <FeatureShowcase
                    title={t.t("simplify.whatWeDo.title")}
                    subtitle={t.t("simplify.whatWeDo.subtitle")}
                    features={t.records("simplify.whatWeDo.items")}
                    columns={Columns::Three}
                    variant={CardVariant::Simplify}
                />
            </Section>

            <Section background={SectionBackground::Default} id="impact">
                <h2 class="block-header__title">{ t.t("simplify.impact.title") }</h2>
                <ImpactList items={t.list("simplify.impact.items")} />
                <StatsGrid
                    stats={t.records("simplify.impact.metrics")}
                    variant={StatsVariant::Default}
                />
            </Section>

            <Section background={SectionBackground::Dark}>
                <div class="cta-band cta-band--inverted">
                    <p class="cta-band__lead">{ t.t("simplify.footer.main") }</p>
                    <p class="cta-band__text">{ t.t("simplify.footer.cta") }</p>
                    <Button to={Route::Contact} size={ButtonSize::Lg} variant={ButtonVariant::Secondary}>
                        { t.t("simplify.footer.button") }
                    </Button>
                </div>
            </Section>
        </div>
    })
}
