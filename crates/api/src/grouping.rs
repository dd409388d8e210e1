//! Post-filter grouping for the v1 listing endpoint.

use std::collections::BTreeMap;

use timeline_db::models::historical_event::HistoricalEventDto;

/// Two-level grouping of mapped events: period, then country.
pub type GroupedEvents = BTreeMap<String, BTreeMap<String, Vec<HistoricalEventDto>>>;

/// Group DTOs first by `period`, then by `country`.
///
/// Innermost lists keep the order the events arrive in, which is the
/// filter layer's id order; `BTreeMap` keys make the outer levels
/// deterministic too.
pub fn group_by_period_and_country(events: Vec<HistoricalEventDto>) -> GroupedEvents {
    let mut grouped: GroupedEvents = BTreeMap::new();
    for event in events {
        grouped
            .entry(event.period.clone())
            .or_default()
            .entry(event.country.clone())
            .or_default()
            .push(event);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: i64, event: &str, period: &str, country: &str) -> HistoricalEventDto {
        HistoricalEventDto {
            id,
            year: "1".to_string(),
            event: event.to_string(),
            figure: "Someone".to_string(),
            details: None,
            period: period.to_string(),
            country: country.to_string(),
            topics: Vec::new(),
            resources: Vec::new(),
        }
    }

    #[test]
    fn shared_period_with_differing_countries_nests_under_one_key() {
        let grouped = group_by_period_and_country(vec![
            dto(1, "Unification of Egypt", "Ancient Period", "Egypt"),
            dto(2, "Assassination of Caesar", "Ancient Period", "Rome"),
        ]);

        assert_eq!(grouped.len(), 1);
        let ancient = &grouped["Ancient Period"];
        assert_eq!(ancient.len(), 2);
        assert_eq!(ancient["Egypt"][0].id, 1);
        assert_eq!(ancient["Rome"][0].id, 2);
    }

    #[test]
    fn innermost_lists_preserve_arrival_order() {
        let grouped = group_by_period_and_country(vec![
            dto(3, "Protectorate", "Modern Era", "Morocco"),
            dto(5, "Independence", "Modern Era", "Morocco"),
        ]);

        let morocco = &grouped["Modern Era"]["Morocco"];
        assert_eq!(morocco[0].id, 3);
        assert_eq!(morocco[1].id, 5);
    }

    #[test]
    fn empty_input_groups_to_empty_map() {
        assert!(group_by_period_and_country(Vec::new()).is_empty());
    }
}
