//! Accepted incidents, kept per analyst in submission order.
//!
//! Incident IDs share one namespace across all analysts.

use crate::errors::{IrmsError, IrmsResult};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    pub rating: u8,
    pub owner: String,
    pub submitted_at: DateTime<Utc>,
}

impl Incident {
    pub fn as_pair(&self) -> (String, u8) {
        (self.id.clone(), self.rating)
    }
}

#[derive(Debug, Default)]
pub struct IncidentLedger {
    by_analyst: HashMap<String, Vec<Incident>>,
    ids: HashSet<String>,
}

impl IncidentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn incidents_of(&self, owner: &str) -> &[Incident] {
        self.by_analyst
            .get(owner)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lowest rating among the analyst's accepted incidents so far
    pub fn lowest_rating(&self, owner: &str) -> Option<u8> {
        self.incidents_of(owner).iter().map(|i| i.rating).min()
    }

    /// Commit an accepted incident. Rules must already have been checked.
    pub fn append(&mut self, owner: &str, id: &str, rating: u8) -> IrmsResult<&Incident> {
        if !self.ids.insert(id.to_string()) {
            return Err(IrmsError::duplicate_incident(id));
        }
        let list = self.by_analyst.entry(owner.to_string()).or_default();
        list.push(Incident {
            id: id.to_string(),
            rating,
            owner: owner.to_string(),
            submitted_at: Utc::now(),
        });
        Ok(&list[list.len() - 1])
    }

    /// Positional lookup; any index outside `0..len` fails, negatives included
    pub fn get(&self, owner: &str, index: i64) -> IrmsResult<&Incident> {
        let list = self.incidents_of(owner);
        usize::try_from(index)
            .ok()
            .and_then(|i| list.get(i))
            .ok_or(IrmsError::IndexOutOfBounds {
                index,
                len: list.len(),
            })
    }

    pub fn is_saved(&self, id: &str, rating: i64) -> bool {
        self.by_analyst
            .values()
            .flatten()
            .any(|incident| incident.id == id && i64::from(incident.rating) == rating)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
