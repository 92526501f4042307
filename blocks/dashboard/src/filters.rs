use salon_atoms::stylists::{Gender, StylistRecord};

/// List-view filters. Empty city and no gender match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    /// Case-insensitive substring of the city field
    pub city: String,
    pub gender: Option<Gender>,
}

impl RosterFilter {
    pub fn new(city: impl Into<String>, gender: Option<Gender>) -> Self {
        Self {
            city: city.into(),
            gender,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.gender.is_none()
    }

    pub fn matches(&self, record: &StylistRecord) -> bool {
        let matches_city = self.city.is_empty()
            || record.city.to_lowercase().contains(&self.city.to_lowercase());
        let matches_gender = match self.gender {
            Some(gender) => record.gender == Some(gender),
            None => true,
        };
        matches_city && matches_gender
    }

    /// Matching records, in their original order
    pub fn apply<'a>(&self, records: &'a [StylistRecord]) -> Vec<&'a StylistRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{stylist, with_gender};

    fn roster() -> Vec<StylistRecord> {
        vec![
            with_gender(stylist("1", "a@x.com", "Leeds", "Hair"), Gender::Female),
            with_gender(stylist("2", "b@x.com", "York", "Nails"), Gender::Male),
            stylist("3", "c@x.com", "North Leeds", "Makeup"),
            with_gender(stylist("4", "d@x.com", "Hull", "Hair"), Gender::Female),
        ]
    }

    fn ids(records: &[&StylistRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let records = roster();
        let filtered = RosterFilter::default().apply(&records);
        assert_eq!(filtered.len(), records.len());
        assert!(filtered.iter().zip(&records).all(|(a, b)| *a == b));
    }

    #[test]
    fn city_is_case_insensitive_substring() {
        let records = roster();
        let filtered = RosterFilter::new("LEE", None).apply(&records);
        assert_eq!(ids(&filtered), vec!["1", "3"]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let records = roster();
        let filtered = RosterFilter::new("leeds", Some(Gender::Female)).apply(&records);
        assert_eq!(ids(&filtered), vec!["1"]);
    }

    #[test]
    fn unmatched_gender_gives_empty_set() {
        let records = vec![with_gender(stylist("1", "a@x.com", "Leeds", "Hair"), Gender::Female)];
        assert!(RosterFilter::new("", Some(Gender::Male)).apply(&records).is_empty());
    }
}
