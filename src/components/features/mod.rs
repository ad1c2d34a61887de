//! Content blocks composed from locale records.

mod feature_showcase;
mod hero_section;
mod stats_grid;

pub use feature_showcase::{Columns, FeatureShowcase, FeatureShowcaseProps};
pub use hero_section::{hero_card_variant, HeroSection, HeroSectionProps, HeroVariant};
pub use stats_grid::{StatsGrid, StatsGridProps, StatsVariant};

use log::debug;

use crate::i18n::ContentRecord;

/// Keeps the records `pick` accepts, in order. Rejected ones are skipped
/// and logged; a block never renders a half-empty item.
pub fn usable_records<'a, T>(
    block: &str,
    records: &'a [ContentRecord],
    pick: impl Fn(&'a ContentRecord) -> Option<T>,
) -> Vec<T> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let picked = pick(record);
            if picked.is_none() {
                debug!("{}: skipping record {} ({:?})", block, record.id_or(index), record);
            }
            picked
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_records_are_skipped_in_order() {
        let records = vec![
            ContentRecord {
                title: Some("Flows".into()),
                description: Some("Map them".into()),
                ..Default::default()
            },
            ContentRecord {
                title: Some("Orphan".into()),
                ..Default::default()
            },
            ContentRecord {
                title: Some("Support".into()),
                description: Some("Faster answers".into()),
                ..Default::default()
            },
        ];
        let titles = usable_records("test", &records, |r| r.title_and_description().map(|(t, _)| t));
        assert_eq!(titles, vec!["Flows", "Support"]);
    }
}
