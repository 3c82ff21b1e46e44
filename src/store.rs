//! In-memory record store.
//!
//! A `Store` owns every record of one kind. Records are kept in the kind's
//! canonical order after every mutation, so the order a listing shows is the
//! order that 1-based indices resolve against.

use tracing::warn;

use crate::error::StoreError;
use crate::record::{is_valid_name, Record};

/// Ordered, name-unique collection of one record kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Store<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Store<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded records, applying the same checks as `create`.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.create(record)?;
        }
        Ok(store)
    }

    /// Records in canonical order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at 1-based `index` in the order returned by `list`.
    pub fn get_by_index(&self, index: usize) -> Result<&R, StoreError> {
        index
            .checked_sub(1)
            .and_then(|i| self.records.get(i))
            .ok_or(StoreError::IndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }

    /// Whether `name` is free, treating the record named `except` as absent.
    pub fn name_available(&self, name: &str, except: Option<&str>) -> bool {
        except == Some(name) || self.records.iter().all(|r| r.name() != name)
    }

    /// Add a new record.
    pub fn create(&mut self, candidate: R) -> Result<(), StoreError> {
        self.check(&candidate, None)?;
        self.records.push(candidate);
        self.sort();
        Ok(())
    }

    /// Swap `old` for `new`. `new` may keep `old`'s name.
    pub fn replace(&mut self, old: &R, new: R) -> Result<(), StoreError> {
        let pos = self.position(old)?;
        self.check(&new, Some(old.name()))?;
        self.records[pos] = new;
        self.sort();
        Ok(())
    }

    /// Remove exactly one record equal to `record`.
    pub fn delete(&mut self, record: &R) -> Result<R, StoreError> {
        let pos = self.position(record)?;
        Ok(self.records.remove(pos))
    }

    fn position(&self, record: &R) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r == record)
            .ok_or_else(|| StoreError::NotFound(record.name().to_string()))
    }

    fn check(&self, candidate: &R, except: Option<&str>) -> Result<(), StoreError> {
        let name = candidate.name();
        let result = if !is_valid_name(name) {
            Err(StoreError::InvalidName(name.to_string()))
        } else if !self.name_available(name, except) {
            Err(StoreError::DuplicateName(name.to_string()))
        } else {
            candidate.validate()
        };
        if let Err(err) = &result {
            warn!(kind = R::KIND, %err, "rejected record");
        }
        result
    }

    fn sort(&mut self) {
        self.records.sort_by(|a, b| a.canonical_cmp(b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LocationRecord, TransportRecord};

    fn car() -> TransportRecord {
        TransportRecord::new("Car", 80.0).unwrap()
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut store = Store::new();
        store.create(car()).unwrap();
        let err = store
            .create(TransportRecord::new("Car", 100.0).unwrap())
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("Car".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].speed(), 80.0);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut store = Store::new();
        store.create(car()).unwrap();
        store.create(TransportRecord::new("car", 60.0).unwrap()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn invalid_names_rejected() {
        let mut store = Store::new();
        assert_eq!(
            store.create(TransportRecord::new("", 1.0).unwrap()),
            Err(StoreError::InvalidName(String::new()))
        );
        assert!(matches!(
            store.create(TransportRecord::new("a?b", 1.0).unwrap()),
            Err(StoreError::InvalidName(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_sorted_by_kind() {
        let transports = Store::from_records([
            TransportRecord::new("Plane", 900.0).unwrap(),
            TransportRecord::new("Walk", 5.0).unwrap(),
            car(),
        ])
        .unwrap();
        let names: Vec<_> = transports.list().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Walk", "Car", "Plane"]);

        let locations = Store::from_records([
            LocationRecord::new("Tokyo", 35.6762, 139.6503).unwrap(),
            LocationRecord::new("Berlin", 52.52, 13.405).unwrap(),
        ])
        .unwrap();
        assert_eq!(locations.get_by_index(1).unwrap().name(), "Berlin");
        assert_eq!(locations.get_by_index(2).unwrap().name(), "Tokyo");
    }

    #[test]
    fn get_by_index_bounds() {
        let store = Store::from_records([car()]).unwrap();
        assert_eq!(store.get_by_index(1).unwrap(), &car());
        assert_eq!(
            store.get_by_index(0),
            Err(StoreError::IndexOutOfRange { index: 0, count: 1 })
        );
        assert_eq!(
            store.get_by_index(2),
            Err(StoreError::IndexOutOfRange { index: 2, count: 1 })
        );
    }

    #[test]
    fn replace_may_keep_own_name() {
        let mut store = Store::from_records([car()]).unwrap();
        let faster = TransportRecord::new("Car", 120.0).unwrap();
        store.replace(&car(), faster.clone()).unwrap();
        assert_eq!(store.list(), [faster]);
    }

    #[test]
    fn replace_cannot_steal_a_name() {
        let bus = TransportRecord::new("Bus", 50.0).unwrap();
        let mut store = Store::from_records([car(), bus.clone()]).unwrap();
        let err = store
            .replace(&bus, TransportRecord::new("Car", 50.0).unwrap())
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("Car".into()));
        assert!(store.list().contains(&bus));
    }

    #[test]
    fn replace_reorders() {
        let walk = TransportRecord::new("Walk", 5.0).unwrap();
        let mut store = Store::from_records([walk.clone(), car()]).unwrap();
        store
            .replace(&walk, TransportRecord::new("Walk", 500.0).unwrap())
            .unwrap();
        assert_eq!(store.get_by_index(2).unwrap().name(), "Walk");
    }

    #[test]
    fn delete_removes_one() {
        let bus = TransportRecord::new("Bus", 50.0).unwrap();
        let mut store = Store::from_records([car(), bus.clone()]).unwrap();
        assert_eq!(store.delete(&bus).unwrap(), bus);
        assert_eq!(store.list(), [car()]);
        assert_eq!(store.delete(&bus), Err(StoreError::NotFound("Bus".into())));
    }
}
