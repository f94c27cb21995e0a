//! Event logging for election replay and auditing.
//!
//! Every balance change made during an election is captured as an
//! [`Event`]. The log lets callers verify an outcome without re-running
//! the election, and explains how a top-up total was reached.
//!
//! # Event Types
//!
//! - **TopUp**: one search round added money to every citizen
//! - **ItemSelected**: the affordability check found an item
//! - **Settlement**: a supporter of the chosen item was zeroed
//!
//! Rounds count top-ups: events before the first top-up are in round 0.
//! Citizens are numbered from 1, as in election reports.
//!
//! # Example
//!
//! ```rust
//! use participatory_budget_core_rs::models::{Event, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(Event::TopUp {
//!     round: 1,
//!     amount: 1.0,
//!     total_top_up: 1.0,
//! });
//!
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.events()[0].event_type(), "TopUp");
//! ```

use serde::{Deserialize, Serialize};

/// Election event capturing a state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum Event {
    /// Every citizen received `amount`; `total_top_up` is the running total
    TopUp {
        round: usize,
        amount: f64,
        total_top_up: f64,
    },

    /// An item became affordable
    ItemSelected {
        round: usize,
        item: String,
        cost: f64,
        supporter_total: f64,
    },

    /// A supporter's balance was zeroed
    Settlement {
        round: usize,
        citizen: usize,
        item: String,
        previous_balance: f64,
    },
}

impl Event {
    /// Get the search round in which this event occurred
    pub fn round(&self) -> usize {
        match self {
            Event::TopUp { round, .. } => *round,
            Event::ItemSelected { round, .. } => *round,
            Event::Settlement { round, .. } => *round,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::TopUp { .. } => "TopUp",
            Event::ItemSelected { .. } => "ItemSelected",
            Event::Settlement { .. } => "Settlement",
        }
    }

    /// Get the citizen number if the event concerns a single citizen
    pub fn citizen(&self) -> Option<usize> {
        match self {
            Event::Settlement { citizen, .. } => Some(*citizen),
            _ => None,
        }
    }

    /// Get the item name if the event concerns an item
    pub fn item(&self) -> Option<&str> {
        match self {
            Event::ItemSelected { item, .. } => Some(item),
            Event::Settlement { item, .. } => Some(item),
            Event::TopUp { .. } => None,
        }
    }
}

/// Event log for storing and querying election events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific citizen (1-based)
    pub fn events_for_citizen(&self, citizen: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.citizen() == Some(citizen))
            .collect()
    }

    /// Get events for a specific item
    pub fn events_for_item(&self, item: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.item() == Some(item))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
