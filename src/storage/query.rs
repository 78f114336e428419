//! Query types accepted by `RecordClient::fetch_records`
//!
//! The shapes follow the record service's request body: a list of selected
//! fields, `where` conditions that must all hold, optional condition groups,
//! and an ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison applied by a [`Condition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    EqualTo,
    NotEqualTo,
    StartsWith,
    Contains,
    GreaterThan,
    LessThan,
}

/// A single field test. A condition holds when the field matches any of
/// `values` (for `NotEqualTo`: matches none of them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "FieldName")]
    pub field: String,
    #[serde(rename = "Operator")]
    pub operator: Operator,
    #[serde(rename = "Values")]
    pub values: Vec<Value>,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, values: Vec<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            values,
        }
    }

    pub fn equal_to(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::EqualTo, vec![value.into()])
    }

    pub fn starts_with(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::new(field, Operator::StartsWith, vec![Value::String(prefix.into())])
    }

    /// Test the condition against what a record offers for the field.
    /// A missing field satisfies only `NotEqualTo`.
    pub fn matches(&self, field: &FieldValue) -> bool {
        let hit = |op: Operator, value: &Value| {
            field
                .candidate_for(value)
                .is_some_and(|candidate| apply(op, candidate, value))
        };
        match self.operator {
            Operator::NotEqualTo => !self.values.iter().any(|v| hit(Operator::EqualTo, v)),
            op => self.values.iter().any(|v| hit(op, v)),
        }
    }
}

/// The value a record offers to a condition on one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Missing,
    Plain(Value),
    /// A reference field: the stored id and the referenced record's name.
    /// Numeric condition values compare with the id, anything else with
    /// the name.
    Reference { id: Value, name: Option<Value> },
}

impl FieldValue {
    fn candidate_for(&self, value: &Value) -> Option<&Value> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Plain(stored) => Some(stored),
            FieldValue::Reference { id, .. } if value.is_number() => Some(id),
            FieldValue::Reference { name, .. } => name.as_ref(),
        }
    }
}

fn apply(op: Operator, candidate: &Value, value: &Value) -> bool {
    match op {
        Operator::EqualTo => loose_eq(candidate, value),
        Operator::NotEqualTo => !loose_eq(candidate, value),
        Operator::StartsWith => as_text(candidate).starts_with(&as_text(value)),
        Operator::Contains => as_text(candidate).contains(&as_text(value)),
        Operator::GreaterThan => compare_values(candidate, value) == Ordering::Greater,
        Operator::LessThan => compare_values(candidate, value) == Ordering::Less,
    }
}

/// Equality that treats `1`, `1.0` and `"1"` alike
fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => as_text(a) == as_text(b),
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Total order used for comparisons and sorting. Numbers compare
/// numerically, everything else by its text, and null sorts first.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => as_text(a).cmp(&as_text(b)),
        },
    }
}

/// How the conditions of a group combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupOperator {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    pub operator: GroupOperator,
    pub conditions: Vec<Condition>,
}

impl ConditionGroup {
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self {
            operator: GroupOperator::And,
            conditions,
        }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Self {
            operator: GroupOperator::Or,
            conditions,
        }
    }
}

/// A field to return. `reference_field` asks for the named field of the
/// referenced record instead of the bare id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_field: Option<String>,
}

impl FieldSelector {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_field: None,
        }
    }

    pub fn reference(name: impl Into<String>, referenced: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_field: Some(referenced.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    #[serde(rename = "fieldName")]
    pub field: String,
    #[serde(rename = "sorttype")]
    pub direction: SortDirection,
}

/// Request body for `fetch_records`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchQuery {
    /// Fields to return; empty means every field
    #[serde(default)]
    pub fields: Vec<FieldSelector>,
    #[serde(default, rename = "where")]
    pub conditions: Vec<Condition>,
    #[serde(default, rename = "whereGroups")]
    pub groups: Vec<ConditionGroup>,
    #[serde(default, rename = "orderBy")]
    pub order_by: Vec<OrderBy>,
}

impl FetchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, fields: Vec<FieldSelector>) -> Self {
        self.fields = fields;
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn group(mut self, group: ConditionGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn order(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by.push(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    /// Evaluate the filters against a record. `field_value` yields what the
    /// record offers for a field name.
    pub fn accepts<F>(&self, field_value: F) -> bool
    where
        F: Fn(&str) -> FieldValue,
    {
        let plain = self
            .conditions
            .iter()
            .all(|c| c.matches(&field_value(&c.field)));

        plain
            && self.groups.iter().all(|group| {
                let mut results = group
                    .conditions
                    .iter()
                    .map(|c| c.matches(&field_value(&c.field)));
                match group.operator {
                    GroupOperator::And => results.all(|hit| hit),
                    GroupOperator::Or => results.any(|hit| hit),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(value: Value) -> FieldValue {
        FieldValue::Plain(value)
    }

    fn reference(id: i64, name: &str) -> FieldValue {
        FieldValue::Reference {
            id: json!(id),
            name: Some(json!(name)),
        }
    }

    #[test]
    fn test_equal_to_is_loose_on_numbers() {
        let cond = Condition::equal_to("Id", 3);
        assert!(cond.matches(&plain(json!(3.0))));
        assert!(cond.matches(&plain(json!("3"))));
        assert!(!cond.matches(&plain(json!(4))));
        assert!(!cond.matches(&FieldValue::Missing));
    }

    #[test]
    fn test_not_equal_to_on_reference_name() {
        let cond = Condition::new("category_c", Operator::NotEqualTo, vec![json!("Food")]);
        assert!(!cond.matches(&reference(7, "Food")));
        assert!(cond.matches(&reference(8, "Rent")));
        assert!(cond.matches(&FieldValue::Missing));
    }

    #[test]
    fn test_reference_compares_numbers_with_id_and_text_with_name() {
        // category "1" stored under id 2
        let numeric_name = reference(2, "1");
        assert!(Condition::equal_to("category_c", "1").matches(&numeric_name));
        assert!(!Condition::equal_to("category_c", 1).matches(&numeric_name));
        assert!(Condition::equal_to("category_c", 2).matches(&numeric_name));
        assert!(!Condition::equal_to("category_c", "2").matches(&numeric_name));

        let dangling = FieldValue::Reference {
            id: json!(1),
            name: None,
        };
        assert!(!Condition::equal_to("category_c", "1").matches(&dangling));
    }

    #[test]
    fn test_starts_with_month_prefix() {
        let cond = Condition::starts_with("date_c", "2025-03");
        assert!(cond.matches(&plain(json!("2025-03-14"))));
        assert!(!cond.matches(&plain(json!("2025-04-01"))));
    }

    #[test]
    fn test_greater_and_less_than() {
        let gt = Condition::new("amount_c", Operator::GreaterThan, vec![json!(100)]);
        assert!(gt.matches(&plain(json!(100.5))));
        assert!(!gt.matches(&plain(json!(100))));

        let lt = Condition::new("due_date_c", Operator::LessThan, vec![json!("2025-06-01")]);
        assert!(lt.matches(&plain(json!("2025-05-31"))));
    }

    #[test]
    fn test_groups_combine() {
        let query = FetchQuery::new()
            .filter(Condition::equal_to("month_c", "2025-01"))
            .group(ConditionGroup::any(vec![
                Condition::equal_to("status_c", "Planned"),
                Condition::equal_to("status_c", "Pending"),
            ]));

        let record = |month: &'static str, status: &'static str| {
            move |field: &str| match field {
                "month_c" => plain(json!(month)),
                "status_c" => plain(json!(status)),
                _ => FieldValue::Missing,
            }
        };

        assert!(query.accepts(record("2025-01", "Pending")));
        assert!(!query.accepts(record("2025-01", "Completed")));
        assert!(!query.accepts(record("2025-02", "Planned")));
    }

    #[test]
    fn test_query_serializes_with_service_names() {
        let query = FetchQuery::new()
            .filter(Condition::equal_to("Name", "Food"))
            .order("due_date_c", SortDirection::Asc);
        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body["where"][0]["FieldName"], "Name");
        assert_eq!(body["where"][0]["Operator"], "EqualTo");
        assert_eq!(body["orderBy"][0]["sorttype"], "ASC");
    }

    #[test]
    fn test_compare_values_null_first() {
        assert_eq!(compare_values(&Value::Null, &json!(1)), Ordering::Less);
        assert_eq!(compare_values(&json!("b"), &json!("a")), Ordering::Greater);
    }
}
