//! Lists that may also be given as a single value
//!
//! With `try_parsing` enabled the environment source turns
//! `CEA_SAMPLER__ANALYSIS__ALPHAS=0.01` into a float before list splitting is
//! considered, so a one-element list arrives as a scalar.

use serde::de::{self, Deserialize, Deserializer, IntoDeserializer, SeqAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Deserialize a `Vec<T>` from either a sequence or a single value
pub(super) fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_any(OneOrManyVisitor(PhantomData))
}

struct OneOrManyVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrManyVisitor<T> {
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a value or a list of values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(values)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(|one| vec![one])
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(|one| vec![one])
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(|one| vec![one])
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(|one| vec![one])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Counts {
        #[serde(deserialize_with = "deserialize")]
        counts: Vec<usize>,
    }

    #[derive(Debug, Deserialize)]
    struct Rates {
        #[serde(deserialize_with = "deserialize")]
        rates: Vec<f64>,
    }

    #[test]
    fn test_accepts_a_list() {
        let parsed: Counts = serde_json::from_str(r#"{ "counts": [200, 2000] }"#).unwrap();
        assert_eq!(parsed.counts, vec![200, 2000]);
    }

    #[test]
    fn test_accepts_a_single_integer() {
        let parsed: Counts = serde_json::from_str(r#"{ "counts": 2000 }"#).unwrap();
        assert_eq!(parsed.counts, vec![2000]);
    }

    #[test]
    fn test_single_integer_widens_to_float() {
        let parsed: Rates = serde_json::from_str(r#"{ "rates": 1000 }"#).unwrap();
        assert_eq!(parsed.rates, vec![1000.0]);
    }

    #[test]
    fn test_accepts_a_single_float() {
        let parsed: Rates = serde_json::from_str(r#"{ "rates": 0.01 }"#).unwrap();
        assert_eq!(parsed.rates, vec![0.01]);
    }

    #[test]
    fn test_rejects_negative_count() {
        assert!(serde_json::from_str::<Counts>(r#"{ "counts": -5 }"#).is_err());
    }
}
