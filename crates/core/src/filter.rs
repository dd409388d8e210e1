//! Filter selection for the v1 event listing endpoint.
//!
//! Exactly one filter applies per request, chosen by strict precedence:
//! free-text search beats period, period beats country, and with nothing
//! supplied every event matches. The literal `"All"` is a sentinel sent by
//! clients to mean "no filter" and is treated the same as an absent value.

/// Sentinel filter value meaning "no filter applied".
pub const ALL_SENTINEL: &str = "All";

/// The single filter a v1 listing request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFilter {
    /// Case-insensitive substring match over event name, figure, and details.
    Search(String),
    /// Exact period match.
    Period(String),
    /// Exact country match.
    Country(String),
    /// No filter; every event matches.
    All,
}

impl EventFilter {
    /// Resolve optional query parameters to a single filter.
    ///
    /// Precedence: `search` > `period` > `country` > none. Later parameters
    /// are ignored once an earlier one is present, so a request carrying both
    /// `search` and `period` filters by search alone. An empty `search`
    /// counts as absent; `period` and `country` only treat the `"All"`
    /// sentinel as absent, so an empty string exact-matches (and matches
    /// nothing).
    pub fn from_params(
        search: Option<&str>,
        period: Option<&str>,
        country: Option<&str>,
    ) -> Self {
        if let Some(q) = search.filter(|q| !q.is_empty()) {
            return EventFilter::Search(q.to_string());
        }
        if let Some(p) = period.filter(|p| *p != ALL_SENTINEL) {
            return EventFilter::Period(p.to_string());
        }
        if let Some(c) = country.filter(|c| *c != ALL_SENTINEL) {
            return EventFilter::Country(c.to_string());
        }
        EventFilter::All
    }
}
