use yew::prelude::*;

use super::usable_records;
use crate::animation::{self, STAGGER};
use crate::components::motion::Reveal;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, CardVariant, Icon, IconKind};
use crate::i18n::ContentRecord;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    Two,
    #[default]
    Three,
    Four,
}

impl Columns {
    pub fn class(self) -> &'static str {
        match self {
            Columns::Two => "grid--2",
            Columns::Three => "grid--3",
            Columns::Four => "grid--4",
        }
    }
}

/// A feature that passed validation, ready to draw.
#[derive(Debug, Clone, PartialEq)]
struct Feature {
    title: String,
    description: String,
    icon: IconKind,
    variant: CardVariant,
    link: Option<FeatureLink>,
}

#[derive(Debug, Clone, PartialEq)]
enum FeatureLink {
    Internal(Route),
    External(AttrValue),
}

fn feature_from(record: &ContentRecord, fallback: CardVariant) -> Option<Feature> {
    let (title, description) = record.title_and_description()?;
    let icon = IconKind::from_key(record.icon.as_deref().unwrap_or_default());
    let variant = record
        .color
        .as_deref()
        .and_then(CardVariant::from_name)
        .unwrap_or(fallback);
    let link = match (&record.link_to, &record.link) {
        (Some(path), _) => Route::from_link(path).map(FeatureLink::Internal),
        (None, Some(href)) => Some(FeatureLink::External(AttrValue::from(href.clone()))),
        (None, None) => None,
    };

    Some(Feature {
        title: title.to_string(),
        description: description.to_string(),
        icon,
        variant,
        link,
    })
}

#[derive(Properties, PartialEq)]
pub struct FeatureShowcaseProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub features: Vec<ContentRecord>,
    #[prop_or_default]
    pub columns: Columns,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub show_links: bool,
    /// Label of the per-feature link.
    #[prop_or(AttrValue::Static("→"))]
    pub link_label: AttrValue,
}

#[function_component(FeatureShowcase)]
pub fn feature_showcase(props: &FeatureShowcaseProps) -> Html {
    let features = usable_records("FeatureShowcase", &props.features, |record| {
        feature_from(record, props.variant)
    });

    html! {
        <div class="feature-showcase">
            if props.title.is_some() || props.subtitle.is_some() {
                <header class="block-header">
                    if let Some(title) = &props.title {
                        <h2 class="block-header__title">{ title.clone() }</h2>
                    }
                    if let Some(subtitle) = &props.subtitle {
                        <p class="block-header__subtitle">{ subtitle.clone() }</p>
                    }
                </header>
            }
            <div class={classes!("grid", props.columns.class())}>
                { for features.into_iter().enumerate().map(|(index, feature)| {
                    let link = match (&feature.link, props.show_links) {
                        (Some(FeatureLink::Internal(to)), true) => html! {
                            <Button to={to.clone()} variant={ButtonVariant::Ghost} size={ButtonSize::Sm}>
                                { props.link_label.clone() }
                            </Button>
                        },
                        (Some(FeatureLink::External(href)), true) => html! {
                            <Button href={href.clone()} variant={ButtonVariant::Ghost} size={ButtonSize::Sm}>
                                { props.link_label.clone() }
                            </Button>
                        },
                        _ => html! {},
                    };
                    html! {
                        <Reveal preset={animation::STAGGER_ITEM} delay={STAGGER.delay_for(index)}>
                            <Card variant={feature.variant}>
                                <div class="card__icon"><Icon kind={feature.icon} /></div>
                                <h3 class="card__title">{ feature.title }</h3>
                                <p class="card__text">{ feature.description }</p>
                                { link }
                            </Card>
                        </Reveal>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(icon: Option<&str>, color: Option<&str>) -> ContentRecord {
        ContentRecord {
            title: Some("Strategy".into()),
            description: Some("Roadmaps".into()),
            icon: icon.map(Into::into),
            color: color.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_icon_and_color_use_defaults() {
        let feature = feature_from(&record(Some("rocket"), Some("purple")), CardVariant::Accelerate).unwrap();
        assert_eq!(feature.icon, IconKind::Strategy);
        assert_eq!(feature.variant, CardVariant::Accelerate);
    }

    #[test]
    fn record_color_overrides_block_variant() {
        let feature = feature_from(&record(Some("brain"), Some("smartify")), CardVariant::Default).unwrap();
        assert_eq!(feature.icon, IconKind::Brain);
        assert_eq!(feature.variant, CardVariant::Smartify);
    }

    #[test]
    fn internal_links_must_name_a_page() {
        let mut with_route = record(None, None);
        with_route.link_to = Some("/solutions/accelerate".into());
        assert_eq!(
            feature_from(&with_route, CardVariant::Default).unwrap().link,
            Some(FeatureLink::Internal(Route::Accelerate))
        );

        with_route.link_to = Some("/blog".into());
        assert_eq!(feature_from(&with_route, CardVariant::Default).unwrap().link, None);
    }

    #[test]
    fn missing_description_rejects_the_record() {
        let mut incomplete = record(None, None);
        incomplete.description = None;
        assert!(feature_from(&incomplete, CardVariant::Default).is_none());
    }
}
