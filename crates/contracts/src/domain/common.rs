use std::fmt;

/// Derived comparison between scanned and manually entered vehicle numbers.
/// Computed on the fly from the record, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    NotApplicable,
    Ok,
    NotOk,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::NotApplicable => "N/A",
            MatchStatus::Ok => "OK",
            MatchStatus::NotOk => "Not OK",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match-status filter choice as offered in the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFilter {
    #[default]
    All,
    Ok,
    NotOk,
}

impl MatchFilter {
    pub const OPTIONS: [MatchFilter; 3] = [MatchFilter::All, MatchFilter::Ok, MatchFilter::NotOk];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchFilter::All => "All",
            MatchFilter::Ok => "OK",
            MatchFilter::NotOk => "Not OK",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "OK" => MatchFilter::Ok,
            "Not OK" => MatchFilter::NotOk,
            _ => MatchFilter::All,
        }
    }

    /// Whether a record with the given derived status passes this filter.
    pub fn accepts(&self, status: MatchStatus) -> bool {
        match self {
            MatchFilter::All => true,
            MatchFilter::Ok => status == MatchStatus::Ok,
            MatchFilter::NotOk => status == MatchStatus::NotOk,
        }
    }
}

impl fmt::Display for MatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_round_trips_through_labels() {
        for f in MatchFilter::OPTIONS {
            assert_eq!(MatchFilter::from_str(f.as_str()), f);
        }
        assert_eq!(MatchFilter::from_str("anything else"), MatchFilter::All);
    }

    #[test]
    fn all_accepts_every_status() {
        for s in [MatchStatus::NotApplicable, MatchStatus::Ok, MatchStatus::NotOk] {
            assert!(MatchFilter::All.accepts(s));
        }
        assert!(!MatchFilter::Ok.accepts(MatchStatus::NotApplicable));
        assert!(MatchFilter::NotOk.accepts(MatchStatus::NotOk));
    }
}
