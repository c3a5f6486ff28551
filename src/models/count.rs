use serde::{de::{self, Visitor}, Deserializer};
use std::fmt;

/// Tolerant decoder for upstream numeric fields.
///
/// disease.sh mostly sends integers, but some fields come back as floats,
/// negatives or `null`. Values are kept as sent; only null becomes 0.
pub fn deserialize_count<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or null")
        }

        fn visit_u64<E>(self, value: u64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_i64<E>(self, value: i64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_f64<E>(self, value: f64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_unit<E>(self) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }

        fn visit_none<E>(self) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Counted {
        #[serde(deserialize_with = "super::deserialize_count")]
        value: f64,
    }

    fn decode(json: &str) -> f64 {
        serde_json::from_str::<Counted>(json).unwrap().value
    }

    #[test]
    fn accepts_loose_numbers() {
        assert_eq!(decode(r#"{"value": 42}"#), 42.0);
        assert_eq!(decode(r#"{"value": null}"#), 0.0);
        assert_eq!(decode(r#"{"value": 7964680234}"#), 7_964_680_234.0);
    }

    #[test]
    fn keeps_sign_and_fraction() {
        assert_eq!(decode(r#"{"value": -5}"#), -5.0);
        assert_eq!(decode(r#"{"value": 42.9}"#), 42.9);
    }

    #[test]
    fn rejects_strings() {
        assert!(serde_json::from_str::<Counted>(r#"{"value": "12"}"#).is_err());
    }
}
