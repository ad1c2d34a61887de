use yew::prelude::*;

use super::{ImpactList, SolutionSwitcher};
use crate::animation::{self, STAGGER};
use crate::components::features::{usable_records, HeroSection, HeroVariant, StatsGrid, StatsVariant};
use crate::components::motion::Reveal;
use crate::components::ui::{
    Button, ButtonSize, Card, CardVariant, Icon, IconKind, Section, SectionBackground,
};
use crate::i18n::{use_translation, Namespace};
use crate::routes::Route;

/// Glyph for one of the accelerate work streams.
pub fn work_stream_icon(id: &str) -> IconKind {
    match id {
        "flows" => IconKind::GitPullRequest,
        "approval" => IconKind::CheckCircle,
        "support" => IconKind::Package,
        "feedback" => IconKind::Refresh,
        _ => IconKind::Zap,
    }
}

#[function_component(Accelerate)]
pub fn accelerate() -> HtmlResult {
    let t = use_translation(Namespace::Accelerate)?;

    let streams = usable_records("WorkStreams", &t.records("whatWeDo.items"), |item| {
        let title = item.title()?.to_string();
        let text = item.text()?.to_string();
        Some((work_stream_icon(item.id.as_deref().unwrap_or_default()), title, text))
    });

    Ok(html! {
        <div class="page page--accelerate">
            <HeroSection
                title={html! { { t.t("hero.title") } }}
                subtitle={t.t("hero.subtitle")}
                description={t.html("hero.intro")}
                variant={HeroVariant::Dark}
            />

            <SolutionSwitcher active={Route::Accelerate} />

            <Section background={SectionBackground::Default} id="purpose">
                <div class="prose">
                    <h2>{ t.t("purpose.title") }</h2>
                    <p>{ t.t("purpose.description") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::White} id="what-we-do">
                <h2 class="block-header__title">{ t.t("whatWeDo.title") }</h2>
                <div class="grid grid--2">
                    { for streams.into_iter().enumerate().map(|(index, (icon, title, text))| html! {
                        <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)}>
                            <Card variant={CardVariant::Accelerate}>
                                <div class="card__icon"><Icon kind={icon} /></div>
                                <h3 class="card__title">{ title }</h3>
                                <p class="card__text">{ text }</p>
                            </Card>
                        </Reveal>
                    }) }
                </div>
            </Section>

            <Section background={SectionBackground::Default} id="impact">
                <h2 class="block-header__title">{ t.t("impact.title") }</h2>
                <ImpactList items={t.list("impact.items")} icon={IconKind::Zap} />
                <StatsGrid
                    title={t.t("impact.metricsLabel")}
                    stats={t.records("impact.metrics")}
                    variant={StatsVariant::Gradient}
                />
            </Section>

            <Section background={SectionBackground::Dark} id="perspective">
                <div class="prose prose--inverted">
                    <h2>{ t.t("perspective.title") }</h2>
                    <p class="prose__quote">{ t.html("perspective.text") }</p>
                </div>
            </Section>

            <Section background={SectionBackground::Gradient}>
                <div class="cta-band">
                    <p class="cta-band__text">{ t.t("cta.title") }</p>
                    <Button to={Route::Contact} size={ButtonSize::Lg}>{ t.t("cta.button") }</Button>
                </div>
            </Section>
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_streams_have_distinct_icons() {
        let icons: Vec<_> = ["flows", "approval", "support", "feedback"]
            .into_iter()
            .map(work_stream_icon)
            .collect();
        for (i, a) in icons.iter().enumerate() {
            assert!(icons[i + 1..].iter().all(|b| b != a));
        }
        assert_eq!(work_stream_icon("other"), IconKind::Zap);
    }
}
