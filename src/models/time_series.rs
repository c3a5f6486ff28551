use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::rc::Rc;
use super::count::deserialize_count;

/// Date label -> cumulative count, in the order upstream sent it.
///
/// Upstream keys are `M/D/YY` strings; they are kept verbatim and never
/// re-sorted, so index `i` is always the i-th key of the JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    entries: Vec<(String, f64)>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(label, value)| (label.into(), value)).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeSeriesVisitor;

        // Values go through the same loose counter decoding as the stats
        struct Count(f64);

        impl<'de> Deserialize<'de> for Count {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_count(deserializer).map(Count)
            }
        }

        impl<'de> Visitor<'de> for TimeSeriesVisitor {
            type Value = TimeSeries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object of date -> count")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TimeSeries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, Count(value))) = map.next_entry::<String, Count>()? {
                    entries.push((label, value));
                }
                Ok(TimeSeries { entries })
            }
        }

        deserializer.deserialize_map(TimeSeriesVisitor)
    }
}

/// Payload of `/v3/covid-19/historical/all?lastdays=all`
///
/// `cases` is shared with the chart as-is, it is never copied.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HistoricalData {
    #[serde(default)]
    pub cases: Rc<TimeSeries>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_upstream_key_order() {
        // Lexicographic order would put 10/1/20 before 2/1/20
        let json = r#"{
            "cases": {"1/22/20": 557, "2/1/20": 12038, "10/1/20": 34079542, "3/1/22": 437000000},
            "deaths": {"1/22/20": 17},
            "recovered": {}
        }"#;

        let data: HistoricalData = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = data.cases.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["1/22/20", "2/1/20", "10/1/20", "3/1/22"]);

        let values: Vec<f64> = data.cases.iter().map(|(_, value)| value).collect();
        assert_eq!(values, vec![557.0, 12_038.0, 34_079_542.0, 437_000_000.0]);
    }

    #[test]
    fn missing_cases_is_empty() {
        let data: HistoricalData = serde_json::from_str(r#"{"deaths": {}}"#).unwrap();
        assert!(data.cases.is_empty());
    }

    #[test]
    fn null_points_read_as_zero() {
        let data: HistoricalData =
            serde_json::from_str(r#"{"cases": {"1/22/20": null, "1/23/20": 655}}"#).unwrap();
        let values: Vec<f64> = data.cases.iter().map(|(_, value)| value).collect();
        assert_eq!(values, vec![0.0, 655.0]);
    }

    #[test]
    fn cases_are_shared_not_copied() {
        let data: HistoricalData =
            serde_json::from_str(r#"{"cases": {"1/22/20": 557}}"#).unwrap();
        let handed_out = Rc::clone(&data.cases);
        assert!(Rc::ptr_eq(&handed_out, &data.clone().cases));
    }
}
