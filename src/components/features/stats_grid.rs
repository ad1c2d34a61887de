use yew::prelude::*;

use super::usable_records;
use crate::animation::{self, STAGGER};
use crate::components::motion::Reveal;
use crate::i18n::ContentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsVariant {
    #[default]
    Default,
    Dark,
    Gradient,
}

impl StatsVariant {
    fn class(self) -> &'static str {
        match self {
            StatsVariant::Default => "stats--default",
            StatsVariant::Dark => "stats--dark",
            StatsVariant::Gradient => "stats--gradient",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub stats: Vec<ContentRecord>,
    #[prop_or_default]
    pub variant: StatsVariant,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    let stats = usable_records("StatsGrid", &props.stats, |record| {
        record
            .value_and_label()
            .map(|(value, label)| (value.to_string(), label.to_string()))
    });

    html! {
        <div class={classes!("stats", props.variant.class())}>
            if let Some(title) = &props.title {
                <h3 class="stats__title">{ title.clone() }</h3>
            }
            <div class="stats__grid">
                { for stats.into_iter().enumerate().map(|(index, (value, label))| html! {
                    <Reveal preset={animation::SCALE_IN} delay={STAGGER.delay_for(index)} class="stats__item">
                        <span class="stats__value">{ value }</span>
                        <span class="stats__label">{ label }</span>
                    </Reveal>
                }) }
            </div>
        </div>
    }
}
