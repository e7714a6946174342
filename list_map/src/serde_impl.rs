//! A [`ListMap`] serializes as a struct holding the key list and the value list.
use crate::ListMap;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
#[serde(rename = "ListMap")]
struct PartsRef<'a, K, V> {
    keys: &'a [K],
    values: &'a [V],
}

#[derive(Deserialize)]
#[serde(rename = "ListMap", deny_unknown_fields)]
struct Parts<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K: Serialize, V: Serialize> Serialize for ListMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PartsRef {
            keys: self.key_slice(),
            values: self.value_slice(),
        }
        .serialize(serializer)
    }
}

impl<'de, K, V> Deserialize<'de> for ListMap<K, V>
where
    K: Deserialize<'de> + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Parts { keys, values } = Parts::deserialize(deserializer)?;
        ListMap::from_parts(keys, values).map_err(D::Error::custom)
    }
}
