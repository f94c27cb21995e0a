//! Cost table
//!
//! Ordered mapping from item name to cost. The order is part of the
//! election rules: when several items become affordable at the same
//! moment, the one inserted first wins.
//!
//! Inserting a name that is already present updates its cost in place and
//! keeps its original position, the way an insertion-ordered dictionary
//! behaves.
//!
//! # Serialization
//!
//! A cost table serializes as a map (`{"Park": 9.9, "Trees": 2000}`).
//! Deserialization keeps the document order of the keys.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A purchasable item and its cost
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    cost: f64,
}

impl Item {
    /// Item name (unique within a cost table)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item cost (currency units)
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Insertion-ordered item costs
///
/// # Example
/// ```
/// use participatory_budget_core_rs::CostTable;
///
/// let costs = CostTable::new()
///     .with_item("Park", 9.9)
///     .with_item("Trees", 2000.0)
///     .with_item("Lights", 3000.0);
///
/// let names: Vec<&str> = costs.names().collect();
/// assert_eq!(names, vec!["Park", "Trees", "Lights"]);
/// assert_eq!(costs.cost("Trees"), Some(2000.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTable {
    items: Vec<Item>,
}

impl CostTable {
    /// Create an empty cost table
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert or update an item, returning its previous cost if it existed
    ///
    /// Updating keeps the item's original position.
    pub fn insert(&mut self, name: impl Into<String>, cost: f64) -> Option<f64> {
        let name = name.into();
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => Some(std::mem::replace(&mut item.cost, cost)),
            None => {
                self.items.push(Item { name, cost });
                None
            }
        }
    }

    /// Builder form of [`CostTable::insert`]
    pub fn with_item(mut self, name: impl Into<String>, cost: f64) -> Self {
        self.insert(name, cost);
        self
    }

    /// Cost of `name`, if the table lists it
    pub fn cost(&self, name: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.cost)
    }

    /// Check whether `name` is listed
    pub fn contains(&self, name: &str) -> bool {
        self.cost(name).is_some()
    }

    /// Iterate items in priority order
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Iterate item names in priority order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a CostTable {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = CostTable::new();
        for (name, cost) in iter {
            table.insert(name, cost);
        }
        table
    }
}

impl Serialize for CostTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for item in &self.items {
            map.serialize_entry(&item.name, &item.cost)?;
        }
        map.end()
    }
}

struct CostTableVisitor;

impl<'de> Visitor<'de> for CostTableVisitor {
    type Value = CostTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from item name to cost")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = CostTable::new();
        while let Some((name, cost)) = access.next_entry::<String, f64>()? {
            table.insert(name, cost);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for CostTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CostTableVisitor)
    }
}
