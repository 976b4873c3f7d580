//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every declared state,
//! its outgoing event transitions. The JSON form is:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle", "pause": "paused" } },
//!     "paused":  { "transitions": { "resume": "running" } }
//!   }
//! }
//! ```
//!
//! Declaration order of `states` and of each `transitions` object is kept.
//! A state whose `transitions` entry is missing or is not an object is
//! still declared, with no outgoing transitions. A missing or non-object
//! `states` entry declares no states.

use crate::core::{Event, State};
use crate::error::MachineError;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Configuration of a whole machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in and returns to on reset.
    pub initial: State,

    /// Declared states with their transitions, in declaration order.
    #[serde(
        default,
        serialize_with = "serialize_ordered",
        deserialize_with = "deserialize_ordered"
    )]
    pub states: Vec<(State, StateConfig)>,
}

/// Outgoing transitions of a single declared state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateConfig {
    #[serde(serialize_with = "serialize_ordered")]
    pub transitions: Vec<(Event, State)>,
}

impl MachineConfig {
    /// Create a configuration with no declared states.
    pub fn new(initial: impl Into<State>) -> Self {
        Self {
            initial: initial.into(),
            states: Vec::new(),
        }
    }

    /// Declare a state with its transitions.
    ///
    /// Declaring the same state twice replaces its transitions but keeps
    /// its original position.
    pub fn with_state<E, T>(
        mut self,
        state: impl Into<State>,
        transitions: impl IntoIterator<Item = (E, T)>,
    ) -> Self
    where
        E: Into<Event>,
        T: Into<State>,
    {
        let config = StateConfig {
            transitions: transitions
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        };
        upsert(&mut self.states, state.into(), config);
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Empty input and JSON `null` mean no configuration was supplied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::config::MachineConfig;
    /// use waypoint::MachineError;
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{"initial": "off", "states": {"off": {"transitions": {"flip": "on"}}, "on": {}}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.states.len(), 2);
    ///
    /// let missing = MachineConfig::from_json("null");
    /// assert!(matches!(missing, Err(MachineError::InvalidConfig { .. })));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        if json.trim().is_empty() {
            return Err(MachineError::missing_config());
        }
        let config: Option<Self> = serde_json::from_str(json)?;
        config.ok_or_else(MachineError::missing_config)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, MachineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn upsert<K: PartialEq, V>(entries: &mut Vec<(K, V)>, key: K, value: V) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_ordered<K, V, S>(entries: &Vec<(K, V)>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    V: Serialize,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Visitor methods for every non-map shape, all yielding the default value.
macro_rules! default_for_non_maps {
    ($de:lifetime) => {
        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(Default::default())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(Default::default())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(Default::default())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(Default::default())
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
            Ok(Default::default())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Default::default())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Default::default())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<$de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Default::default())
        }
    };
}

fn deserialize_ordered<'de, K, V, D>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    struct OrderedVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for OrderedVisitor<K, V>
    where
        K: Deserialize<'de> + PartialEq,
        V: Deserialize<'de>,
    {
        type Value = Vec<(K, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map")
        }

        default_for_non_maps!('de);

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::new();
            while let Some((key, value)) = map.next_entry()? {
                upsert(&mut entries, key, value);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(OrderedVisitor(PhantomData))
}

impl<'de> Deserialize<'de> for StateConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StateConfigVisitor;

        impl<'de> Visitor<'de> for StateConfigVisitor {
            type Value = StateConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a state declaration")
            }

            default_for_non_maps!('de);

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut config = StateConfig::default();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "transitions" {
                        config.transitions = map.next_value::<TransitionMap>()?.0;
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(config)
            }
        }

        deserializer.deserialize_any(StateConfigVisitor)
    }
}

/// Event-to-target map that reads any non-object as empty.
#[derive(Default)]
struct TransitionMap(Vec<(Event, State)>);

impl<'de> Deserialize<'de> for TransitionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TransitionMapVisitor;

        impl<'de> Visitor<'de> for TransitionMapVisitor {
            type Value = TransitionMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of event names to target states")
            }

            default_for_non_maps!('de);

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut transitions = Vec::new();
                while let Some((event, target)) = map.next_entry::<Event, State>()? {
                    upsert(&mut transitions, event, target);
                }
                Ok(TransitionMap(transitions))
            }
        }

        deserializer.deserialize_any(TransitionMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: &str = r#"{
        "initial": "idle",
        "states": {
            "idle": { "transitions": { "start": "running" } },
            "running": { "transitions": { "stop": "idle", "pause": "paused" } },
            "paused": { "transitions": { "resume": "running" } }
        }
    }"#;

    fn names(config: &MachineConfig) -> Vec<&str> {
        config.states.iter().map(|(s, _)| s.as_str()).collect()
    }

    #[test]
    fn parses_states_in_declaration_order() {
        let config = MachineConfig::from_json(PLAYER).unwrap();

        assert_eq!(config.initial, State::from("idle"));
        assert_eq!(names(&config), ["idle", "running", "paused"]);

        let running = &config.states[1].1;
        assert_eq!(
            running.transitions,
            vec![
                (Event::from("stop"), State::from("idle")),
                (Event::from("pause"), State::from("paused")),
            ]
        );
    }

    #[test]
    fn declaration_order_is_not_alphabetical() {
        let config = MachineConfig::from_json(
            r#"{"initial": "z", "states": {"z": {}, "a": {}, "m": {}}}"#,
        )
        .unwrap();
        assert_eq!(names(&config), ["z", "a", "m"]);
    }

    #[test]
    fn missing_or_malformed_transitions_yield_empty_map() {
        let config = MachineConfig::from_json(
            r#"{
                "initial": "a",
                "states": {
                    "a": {},
                    "b": { "transitions": null },
                    "c": { "transitions": "nope", "label": "ignored" },
                    "d": { "transitions": [1, 2, 3] },
                    "e": null,
                    "f": 42
                }
            }"#,
        )
        .unwrap();

        assert_eq!(names(&config), ["a", "b", "c", "d", "e", "f"]);
        assert!(config.states.iter().all(|(_, s)| s.transitions.is_empty()));
    }

    #[test]
    fn missing_states_means_no_declared_states() {
        let config = MachineConfig::from_json(r#"{"initial": "idle"}"#).unwrap();
        assert!(config.states.is_empty());
    }

    #[test]
    fn null_or_non_object_states_means_no_declared_states() {
        for states in ["null", "\"idle\"", "[\"idle\"]", "7"] {
            let json = format!(r#"{{"initial": "a", "states": {states}}}"#);
            let config = MachineConfig::from_json(&json).unwrap();
            assert_eq!(config.initial, State::from("a"));
            assert!(config.states.is_empty());
        }
    }

    #[test]
    fn null_or_empty_input_is_missing_config() {
        for input in ["null", "", "   "] {
            let err = MachineConfig::from_json(input).unwrap_err();
            assert_eq!(err, MachineError::missing_config());
        }
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = MachineConfig::from_json(r#"{"initial": "#).unwrap_err();
        assert!(matches!(err, MachineError::InvalidConfig { .. }));

        let err = MachineConfig::from_json(r#"{"states": {}}"#).unwrap_err();
        assert!(matches!(err, MachineError::InvalidConfig { reason } if reason.contains("initial")));
    }

    #[test]
    fn with_state_replaces_in_place() {
        let config = MachineConfig::new("a")
            .with_state("a", [("go", "b")])
            .with_state("b", [("back", "a")])
            .with_state("a", [("jump", "b")]);

        assert_eq!(names(&config), ["a", "b"]);
        assert_eq!(
            config.states[0].1.transitions,
            vec![(Event::from("jump"), State::from("b"))]
        );
    }

    #[test]
    fn json_output_reparses_to_same_config() {
        let config = MachineConfig::from_json(PLAYER).unwrap();
        let json = config.to_json().unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }
}
