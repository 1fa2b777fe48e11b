//! Wire encoding for player outcomes and round results.
//!
//! Player records decode leniently: a field holding the wrong JSON type is
//! treated as absent so the scorer reports it the same way as a missing one.

use alloc::string::String;

use serde::de::IgnoredAny;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::player::PlayerOutcome;
use crate::result::{RoundResult, integral_score};

/// A value of type `T`, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct WirePlayer {
    #[serde(default)]
    name: Option<Lenient<String>>,
    #[serde(default)]
    status: Option<Lenient<String>>,
    #[serde(default, rename = "cardValueSum")]
    card_value_sum: Option<Lenient<f64>>,
}

#[derive(Serialize)]
struct WirePlayerRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(rename = "cardValueSum", skip_serializing_if = "Option::is_none")]
    card_value_sum: Option<f64>,
}

impl<'de> Deserialize<'de> for PlayerOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(wire) = Lenient::<WirePlayer>::deserialize(deserializer)?.into_option() else {
            return Ok(Self::default());
        };

        Ok(Self {
            name: wire.name.and_then(Lenient::into_option),
            status: wire.status.and_then(Lenient::into_option),
            card_value_sum: wire.card_value_sum.and_then(Lenient::into_option),
        })
    }
}

impl Serialize for PlayerOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WirePlayerRef {
            name: self.name.as_deref(),
            status: self.status.as_deref(),
            card_value_sum: self.card_value_sum,
        }
        .serialize(serializer)
    }
}

impl Serialize for RoundResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, score) in self.iter() {
            match integral_score(score) {
                Some(whole) => map.serialize_entry(name, &whole)?,
                None => map.serialize_entry(name, &score)?,
            }
        }
        map.end()
    }
}
