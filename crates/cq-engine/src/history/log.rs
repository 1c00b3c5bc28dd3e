//! Arena-backed doubly-linked event log.

use std::fmt;

use cq_core::LocationId;

use super::event::{Event, EventIndex};

/// Chronological history of turns.
///
/// Nodes live in a `Vec` and link to each other by index. The list only
/// grows at the tail and only shrinks from the tail, so the tail is always
/// the last slot of the arena.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    nodes: Vec<Event>,
    head: Option<EventIndex>,
    tail: Option<EventIndex>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event as the new tail.
    ///
    /// `reaching` is stored as the previous tail's `next_command`; it is
    /// ignored when the log is empty.
    pub fn append(&mut self, mut event: Event, reaching: Option<String>) -> EventIndex {
        let index = EventIndex(self.nodes.len());
        event.prev = self.tail;
        event.next = None;
        event.next_command = None;

        match self.tail {
            Some(old_tail) => {
                let prev = &mut self.nodes[old_tail.0];
                prev.next = Some(index);
                prev.next_command = reaching;
            }
            None => self.head = Some(index),
        }

        self.nodes.push(event);
        self.tail = Some(index);
        index
    }

    /// Remove and return the tail event.
    ///
    /// The new tail has its `next` link and `next_command` cleared.
    pub fn remove_tail(&mut self) -> Option<Event> {
        let tail = self.tail?;
        let event = self.nodes.pop()?;
        debug_assert_eq!(tail.0, self.nodes.len());

        match event.prev {
            Some(prev) => {
                let node = &mut self.nodes[prev.0];
                node.next = None;
                node.next_command = None;
                self.tail = Some(prev);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        Some(event)
    }

    /// Whether the log has no events.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The first event.
    pub fn head(&self) -> Option<&Event> {
        self.head.and_then(|index| self.get(index))
    }

    /// The most recent event.
    pub fn tail(&self) -> Option<&Event> {
        self.tail.and_then(|index| self.get(index))
    }

    /// Look up an event by index.
    pub fn get(&self, index: EventIndex) -> Option<&Event> {
        self.nodes.get(index.0)
    }

    /// Walk the events from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            log: self,
            cursor: self.head,
        }
    }

    /// Location ids from head to tail.
    pub fn id_sequence(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.iter().map(|event| event.location)
    }
}

/// Iterator over the log following `next` links.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    log: &'a EventLog,
    cursor: Option<EventIndex>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Event;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.log.get(self.cursor?)?;
        self.cursor = event.next;
        Some(event)
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self {
            let command = event.next_command.as_deref().unwrap_or("None");
            writeln!(f, "Location: {}, Command: {command}", event.location)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::EventKind;
    use cq_core::ItemId;

    fn walk() -> EventLog {
        let mut log = EventLog::new();
        log.append(Event::new(EventKind::Start, LocationId(1)), None);
        log.append(
            Event::new(EventKind::Move, LocationId(2)).with_moves_spent(1),
            Some("go outside".to_string()),
        );
        log.append(
            Event::new(EventKind::Move, LocationId(3)).with_moves_spent(1),
            Some("go east".to_string()),
        );
        log
    }

    #[test]
    fn empty_log() {
        let mut log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.head().is_none());
        assert!(log.tail().is_none());
        assert!(log.remove_tail().is_none());
        assert_eq!(log.id_sequence().count(), 0);
    }

    #[test]
    fn append_links_and_sets_reaching_command() {
        let log = walk();
        assert_eq!(log.len(), 3);
        let ids: Vec<_> = log.id_sequence().collect();
        assert_eq!(ids, vec![LocationId(1), LocationId(2), LocationId(3)]);

        let head = log.head().unwrap();
        assert!(head.prev().is_none());
        assert_eq!(head.next_command.as_deref(), Some("go outside"));

        let tail = log.tail().unwrap();
        assert!(tail.next().is_none());
        assert!(tail.next_command.is_none());
        assert_eq!(log.get(tail.prev().unwrap()).unwrap().location, LocationId(2));
    }

    #[test]
    fn first_append_ignores_reaching_command() {
        let mut log = EventLog::new();
        log.append(
            Event::new(EventKind::Start, LocationId(4)),
            Some("ignored".to_string()),
        );
        assert!(log.head().unwrap().next_command.is_none());
        assert_eq!(log.head(), log.tail());
    }

    #[test]
    fn remove_tail_clears_new_tail_links() {
        let mut log = walk();
        let removed = log.remove_tail().unwrap();
        assert_eq!(removed.location, LocationId(3));

        let tail = log.tail().unwrap();
        assert_eq!(tail.location, LocationId(2));
        assert!(tail.next().is_none());
        assert!(tail.next_command.is_none());
        assert_eq!(log.id_sequence().collect::<Vec<_>>(), vec![LocationId(1), LocationId(2)]);
    }

    #[test]
    fn remove_last_node_empties_log() {
        let mut log = EventLog::new();
        log.append(Event::new(EventKind::Start, LocationId(1)), None);
        assert!(log.remove_tail().is_some());
        assert!(log.is_empty());
        assert!(log.head().is_none());
    }

    #[test]
    fn append_after_remove_reuses_slot() {
        let mut log = walk();
        log.remove_tail();
        log.append(
            Event::new(EventKind::Pickup, LocationId(2)).with_item(ItemId(5)),
            Some("pickup note".to_string()),
        );
        assert_eq!(log.len(), 3);
        assert_eq!(log.tail().unwrap().item, Some(ItemId(5)));
        assert_eq!(log.iter().count(), 3);
    }

    #[test]
    fn id_sequence_is_restartable() {
        let log = walk();
        let first: Vec<_> = log.id_sequence().collect();
        let second: Vec<_> = log.id_sequence().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn display_lists_locations_and_commands() {
        insta::assert_snapshot!(walk().to_string(), @r"
        Location: 1, Command: go outside
        Location: 2, Command: go east
        Location: 3, Command: None
        ");
    }
}
