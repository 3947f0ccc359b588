//! The static state/transition table.

use crate::core::{Event, State};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Outgoing transitions of a single state.
///
/// In JSON this is `{ "transitions": { "<event>": "<target>" } }`. The
/// `transitions` key may be omitted for states without outgoing edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDefinition<S: State, E: Event> {
    #[serde(default)]
    transitions: HashMap<E, S>,
}

impl<S: State, E: Event> Default for StateDefinition<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateDefinition<S, E> {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Add a transition, returning the definition for chaining.
    pub fn with_transition(mut self, event: E, target: S) -> Self {
        self.add_transition(event, target);
        self
    }

    /// Add or replace the transition taken on `event`.
    ///
    /// Returns the previous target if the event was already mapped.
    pub fn add_transition(&mut self, event: E, target: S) -> Option<S> {
        self.transitions.insert(event, target)
    }

    /// The state `event` leads to, if this state handles it.
    pub fn target<Q>(&self, event: &Q) -> Option<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.transitions.get(event)
    }

    pub fn handles<Q>(&self, event: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.transitions.contains_key(event)
    }

    /// Events this state handles, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.transitions.keys()
    }

    /// `(event, target)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &S)> {
        self.transitions.iter()
    }
}

/// Mapping from state to its definition.
///
/// Keeps the order in which states were inserted (for JSON input, document
/// order) while still offering constant-time lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTable<S: State, E: Event> {
    entries: Vec<(S, StateDefinition<S, E>)>,
    index: HashMap<S, usize>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace the definition of `state`.
    ///
    /// Replacing keeps the state's original position. Returns the previous
    /// definition, if any.
    pub fn insert(
        &mut self,
        state: S,
        definition: StateDefinition<S, E>,
    ) -> Option<StateDefinition<S, E>> {
        match self.index.get(&state) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, definition)),
            None => {
                self.index.insert(state.clone(), self.entries.len());
                self.entries.push((state, definition));
                None
            }
        }
    }

    /// Definition of `state`, inserting an empty one at the end if absent.
    pub fn definition_mut(&mut self, state: S) -> &mut StateDefinition<S, E> {
        let slot = match self.index.get(&state) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(state.clone(), slot);
                self.entries.push((state, StateDefinition::new()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get<Q>(&self, state: &Q) -> Option<&StateDefinition<S, E>>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(state).map(|&slot| &self.entries[slot].1)
    }

    /// The stored identifier equal to `state`, with its definition.
    pub fn get_key_value<Q>(&self, state: &Q) -> Option<(&S, &StateDefinition<S, E>)>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(state).map(|&slot| {
            let (id, definition) = &self.entries[slot];
            (id, definition)
        })
    }

    pub fn contains<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(state)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &StateDefinition<S, E>)> {
        self.entries.iter().map(|(state, definition)| (state, definition))
    }

    /// State identifiers in insertion order.
    pub fn state_ids(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|(state, _)| state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: State, E: Event> FromIterator<(S, StateDefinition<S, E>)> for TransitionTable<S, E> {
    fn from_iter<I: IntoIterator<Item = (S, StateDefinition<S, E>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (state, definition) in iter {
            table.insert(state, definition);
        }
        table
    }
}

impl<S: State, E: Event> Serialize for TransitionTable<S, E> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (state, definition) in &self.entries {
            map.serialize_entry(state, definition)?;
        }
        map.end()
    }
}

impl<'de, S: State, E: Event> Deserialize<'de> for TransitionTable<S, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

struct TableVisitor<S, E>(PhantomData<(S, E)>);

impl<'de, S: State, E: Event> Visitor<'de> for TableVisitor<S, E> {
    type Value = TransitionTable<S, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of states to state definitions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut table = TransitionTable::new();
        while let Some((state, definition)) = map.next_entry::<S, StateDefinition<S, E>>()? {
            if table.contains(&state) {
                return Err(de::Error::custom(format!(
                    "State '{}' is defined more than once",
                    state.name()
                )));
            }
            table.insert(state, definition);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Table = TransitionTable<String, String>;
    type Definition = StateDefinition<String, String>;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn insert_preserves_order() {
        let mut table = Table::new();
        table.insert(s("C"), Definition::new());
        table.insert(s("A"), Definition::new());
        table.insert(s("B"), Definition::new());

        let ids: Vec<&String> = table.state_ids().collect();
        assert_eq!(ids, [&s("C"), &s("A"), &s("B")]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut table = Table::new();
        table.insert(s("A"), Definition::new());
        table.insert(s("B"), Definition::new());

        let previous = table.insert(s("A"), Definition::new().with_transition(s("go"), s("B")));
        assert!(previous.is_some());
        assert_eq!(table.len(), 2);
        assert_eq!(table.state_ids().next(), Some(&s("A")));
        assert!(table.get("A").unwrap().handles("go"));
    }

    #[test]
    fn definition_mut_appends_missing_state() {
        let mut table = Table::new();
        table.definition_mut(s("A")).add_transition(s("go"), s("B"));
        table.definition_mut(s("B"));
        table.definition_mut(s("A")).add_transition(s("stay"), s("A"));

        assert_eq!(table.len(), 2);
        let a = table.get("A").unwrap();
        assert_eq!(a.target("go"), Some(&s("B")));
        assert_eq!(a.target("stay"), Some(&s("A")));
    }

    #[test]
    fn lookup_of_missing_state_is_none() {
        let table = Table::new();
        assert!(table.get("A").is_none());
        assert!(!table.contains("A"));
        assert!(table.is_empty());
    }

    #[test]
    fn deserializes_in_document_order() {
        let json = r#"{
            "Zeta": { "transitions": { "next": "Alpha" } },
            "Alpha": { "transitions": { "next": "Mid" } },
            "Mid": {}
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();

        let ids: Vec<&str> = table.state_ids().map(String::as_str).collect();
        assert_eq!(ids, ["Zeta", "Alpha", "Mid"]);
        assert_eq!(table.get("Mid").unwrap().events().count(), 0);
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let json = r#"{ "A": {}, "A": {} }"#;
        let result: Result<Table, _> = serde_json::from_str(json);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("defined more than once"));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let table: Table = vec![
            (s("B"), Definition::new()),
            (s("A"), Definition::new().with_transition(s("go"), s("B"))),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"B":{"transitions":{}},"A":{"transitions":{"go":"B"}}}"#
        );
    }
}
