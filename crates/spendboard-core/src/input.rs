//! Type-boundary validation for records arriving as untyped JSON.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use spendboard_domain::{PeriodSelector, Purchase, PurchaseItem};

use crate::CoreError;

/// Decodes a JSON array of records, naming the collection and index of the first bad element.
pub fn records_from_value<T>(collection: &str, value: &Value) -> Result<Vec<T>, CoreError>
where
    T: DeserializeOwned,
{
    let Value::Array(elements) = value else {
        return Err(CoreError::InvalidInput(format!(
            "`{collection}` must be an array, got {}",
            kind_of(value)
        )));
    };
    elements
        .iter()
        .enumerate()
        .map(|(position, element)| {
            T::deserialize(element).map_err(|err| {
                CoreError::InvalidInput(format!("`{collection}`[{position}]: {err}"))
            })
        })
        .collect()
}

pub fn purchases_from_value(value: &Value) -> Result<Vec<Purchase>, CoreError> {
    records_from_value("purchases", value)
}

pub fn items_from_value(value: &Value) -> Result<Vec<PurchaseItem>, CoreError> {
    records_from_value("items", value)
}

/// Decodes and range-checks a period selector.
pub fn period_from_value(value: &Value) -> Result<PeriodSelector, CoreError> {
    let period = PeriodSelector::deserialize(value)
        .map_err(|err| CoreError::InvalidInput(format!("`period`: {err}")))?;
    period
        .validate()
        .map_err(|err| CoreError::InvalidInput(format!("`period`: {err}")))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
