use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat questionnaire answer set keyed by question.
///
/// Lookups never fail: absent keys read as `None`, and numeric lookups fall back to a
/// caller-supplied default when the answer is missing or has no numeric prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuizAnswers(BTreeMap<String, String>);

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(question.into(), answer.into());
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.0.get(question).map(String::as_str)
    }

    /// Exact, case-sensitive comparison against a single expected answer.
    pub fn is(&self, question: &str, expected: &str) -> bool {
        self.get(question) == Some(expected)
    }

    pub fn is_any(&self, question: &str, expected: &[&str]) -> bool {
        self.get(question)
            .map(|answer| expected.contains(&answer))
            .unwrap_or(false)
    }

    /// Decimal reading of the answer's leading number, e.g. `"32.5 kg/m2"` reads as 32.5.
    pub fn number_or(&self, question: &str, default: f64) -> f64 {
        self.get(question)
            .and_then(leading_decimal)
            .unwrap_or(default)
    }

    /// Whole-number reading of the answer's leading digits; fractions are truncated.
    pub fn whole_number_or(&self, question: &str, default: i64) -> i64 {
        self.get(question)
            .and_then(leading_integer)
            .unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(question, answer)| (question.as_str(), answer.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QuizAnswers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(question, answer)| (question.into(), answer.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for QuizAnswers {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self(value)
    }
}

// Questionnaire clients send ages and BMIs as JSON numbers as often as strings, so scalars
// are stringified and structured values are dropped instead of failing the payload.
impl<'de> Deserialize<'de> for QuizAnswers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let answers = raw
            .into_iter()
            .filter_map(|(question, value)| {
                let answer = match value {
                    Value::String(text) => text,
                    Value::Number(number) => number.to_string(),
                    Value::Bool(flag) => flag.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((question, answer))
            })
            .collect();
        Ok(Self(answers))
    }
}

fn leading_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if digits == 0 {
        return None;
    }

    trimmed[..end].trim_end_matches('.').parse().ok()
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let sign_len = end;
    while bytes.get(end).map_or(false, u8::is_ascii_digit) {
        end += 1;
    }

    if end == sign_len {
        return None;
    }

    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_lookups_read_leading_numbers() {
        let answers: QuizAnswers = [("bmi", "32.5 kg/m2"), ("age", " 45 years")]
            .into_iter()
            .collect();

        assert_eq!(answers.number_or("bmi", 25.0), 32.5);
        assert_eq!(answers.whole_number_or("age", 30), 45);
    }

    #[test]
    fn numeric_lookups_fall_back_to_defaults() {
        let answers: QuizAnswers = [("bmi", "unknown"), ("age", "-")].into_iter().collect();

        assert_eq!(answers.number_or("bmi", 25.0), 25.0);
        assert_eq!(answers.whole_number_or("age", 30), 30);
        assert_eq!(answers.number_or("missing", 25.0), 25.0);
    }

    #[test]
    fn whole_numbers_truncate_fractions() {
        let answers: QuizAnswers = [("age", "19.9")].into_iter().collect();
        assert_eq!(answers.whole_number_or("age", 30), 19);
    }

    #[test]
    fn decimal_accepts_trailing_dot_and_sign() {
        let answers: QuizAnswers = [("a", "30."), ("b", "-2.5")].into_iter().collect();
        assert_eq!(answers.number_or("a", 0.0), 30.0);
        assert_eq!(answers.number_or("b", 0.0), -2.5);
    }

    #[test]
    fn deserialize_stringifies_scalars_and_drops_structures() {
        let answers: QuizAnswers = serde_json::from_str(
            r#"{"age": 45, "bmi": 31.2, "consent": true, "notes": null, "tags": ["a"], "smoking": "No"}"#,
        )
        .expect("answers deserialize");

        assert_eq!(answers.get("age"), Some("45"));
        assert_eq!(answers.get("bmi"), Some("31.2"));
        assert_eq!(answers.get("consent"), Some("true"));
        assert_eq!(answers.get("notes"), None);
        assert_eq!(answers.get("tags"), None);
        assert!(answers.is("smoking", "No"));
        assert_eq!(answers.len(), 4);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let answers: QuizAnswers = [("breastfeeding", "Yes")].into_iter().collect();
        assert!(!answers.is("breastfeeding", "yes"));
        assert!(answers.is_any("breastfeeding", &["no", "Yes"]));
    }
}
