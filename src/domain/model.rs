use serde::{Deserialize, Serialize};

/// One `{name, age}` row of a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayKid {
    pub name: String,
    pub age: u32,
}

/// One `{suite, passenger}` row of a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub suite: String,
    pub passenger: String,
}

/// Names to ages, iterated in insertion order.
///
/// Inserting a name that is already present replaces its age and keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<BirthdayKid>", into = "Vec<BirthdayKid>")]
pub struct NameAgeMap {
    entries: Vec<(String, u32)>,
}

impl NameAgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, age: u32) -> Option<u32> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, age)),
            None => {
                self.entries.push((name, age));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, age)| *age)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, age)| (name.as_str(), *age))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for NameAgeMap {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, age) in iter {
            map.insert(name, age);
        }
        map
    }
}

impl From<Vec<BirthdayKid>> for NameAgeMap {
    fn from(kids: Vec<BirthdayKid>) -> Self {
        kids.into_iter().map(|kid| (kid.name, kid.age)).collect()
    }
}

impl From<NameAgeMap> for Vec<BirthdayKid> {
    fn from(map: NameAgeMap) -> Self {
        map.entries
            .into_iter()
            .map(|(name, age)| BirthdayKid { name, age })
            .collect()
    }
}

/// Suite ids to passenger names, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Booking>", into = "Vec<Booking>")]
pub struct SuiteMap {
    entries: Vec<(String, String)>,
}

impl SuiteMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        suite: impl Into<String>,
        passenger: impl Into<String>,
    ) -> Option<String> {
        let suite = suite.into();
        let passenger = passenger.into();
        match self.entries.iter_mut().find(|(s, _)| *s == suite) {
            Some((_, slot)) => Some(std::mem::replace(slot, passenger)),
            None => {
                self.entries.push((suite, passenger));
                None
            }
        }
    }

    pub fn get(&self, suite: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == suite)
            .map(|(_, passenger)| passenger.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(suite, passenger)| (suite.as_str(), passenger.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, P: Into<String>> FromIterator<(S, P)> for SuiteMap {
    fn from_iter<I: IntoIterator<Item = (S, P)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (suite, passenger) in iter {
            map.insert(suite, passenger);
        }
        map
    }
}

impl From<Vec<Booking>> for SuiteMap {
    fn from(bookings: Vec<Booking>) -> Self {
        bookings
            .into_iter()
            .map(|booking| (booking.suite, booking.passenger))
            .collect()
    }
}

impl From<SuiteMap> for Vec<Booking> {
    fn from(map: SuiteMap) -> Self {
        map.entries
            .into_iter()
            .map(|(suite, passenger)| Booking { suite, passenger })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_age_map_keeps_insertion_order() {
        let kids: NameAgeMap = [("Timmy", 9), ("Sarah", 6), ("Amanda", 27)]
            .into_iter()
            .collect();

        let names: Vec<&str> = kids.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Timmy", "Sarah", "Amanda"]);
        assert_eq!(kids.get("Sarah"), Some(6));
        assert_eq!(kids.get("Bob"), None);
    }

    #[test]
    fn test_name_age_map_reinsert_replaces_in_place() {
        let mut kids = NameAgeMap::new();
        kids.insert("Timmy", 9);
        kids.insert("Sarah", 6);

        assert_eq!(kids.insert("Timmy", 10), Some(9));
        assert_eq!(kids.len(), 2);
        assert_eq!(kids.iter().next(), Some(("Timmy", 10)));
    }

    #[test]
    fn test_suite_map_lookup() {
        let passengers: SuiteMap = [("suite_a", "Amanda Presley"), ("suite_b", "Seymour Hoffman")]
            .into_iter()
            .collect();

        assert_eq!(passengers.get("suite_a"), Some("Amanda Presley"));
        assert_eq!(passengers.get("suite_z"), None);
        assert!(!passengers.is_empty());
    }
}
