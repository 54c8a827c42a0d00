//! Dispatch of fixture cases to `aquant-core`.
//!
//! Every supported function reads its arguments from the case's JSON
//! `inputs` and renders its result as a string:
//!
//! | function                 | inputs                                 | output            |
//! |--------------------------|----------------------------------------|-------------------|
//! | `has_pair_sum` (etc.)    | `array` (ints or null), `target`       | `true` / `false`  |
//! | `array_max`, `array_min` | `array`                                | value or `none`   |
//! | `array_sum`              | `array`                                | 64-bit sum        |
//! | `unique`                 | `array`                                | `[a, b, c]`       |
//! | `string_split`           | `s`, `delim` (one character)           | JSON string array |
//! | `string_trim`            | `s`                                    | trimmed text      |

use aquant_core::{PairRelation, array, pair, string};
use serde_json::Value;

use crate::error::HarnessError;

/// Functions understood by [`execute_case`].
pub const SUPPORTED_FUNCTIONS: [&str; 9] = [
    "has_pair_sum",
    "has_pair_product",
    "has_pair_difference",
    "array_max",
    "array_min",
    "array_sum",
    "unique",
    "string_split",
    "string_trim",
];

/// Run `function` on `inputs` and render the result.
pub fn execute_case(function: &str, inputs: &Value) -> Result<String, HarnessError> {
    if let Some(relation) = pair_relation(function) {
        let arr = int_array(function, inputs)?;
        let target = i32_field(function, inputs, "target")?;
        let found = pair::try_has_pair(relation, arr.as_deref(), target)?;
        return Ok(found.to_string());
    }

    match function {
        "array_max" | "array_min" => {
            let arr = required_array(function, inputs)?;
            let value = if function == "array_max" {
                array::max(&arr)
            } else {
                array::min(&arr)
            };
            Ok(value.map_or_else(|| "none".to_string(), |v| v.to_string()))
        }
        "array_sum" => Ok(array::sum(&required_array(function, inputs)?).to_string()),
        "unique" => {
            let distinct = array::unique(&required_array(function, inputs)?)?;
            Ok(array::format_array(&distinct))
        }
        "string_split" => {
            let s = str_field(function, inputs, "s")?;
            let delim = str_field(function, inputs, "delim")?;
            let mut chars = delim.chars();
            let (Some(delim), None) = (chars.next(), chars.next()) else {
                return Err(HarnessError::invalid(function, "delim must be one character"));
            };
            Ok(serde_json::to_string(&string::split(s, delim))?)
        }
        "string_trim" => Ok(string::trim(str_field(function, inputs, "s")?).to_string()),
        other => Err(HarnessError::UnsupportedFunction(other.to_string())),
    }
}

/// Relation tested by a `has_pair_*` function name.
#[must_use]
pub fn pair_relation(function: &str) -> Option<PairRelation> {
    let name = function.strip_prefix("has_pair_")?;
    PairRelation::ALL
        .into_iter()
        .find(|relation| relation.name() == name)
}

/// `array` as an optional list; missing or `null` means no array.
fn int_array(function: &str, inputs: &Value) -> Result<Option<Vec<i32>>, HarnessError> {
    match inputs.get("array") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| to_i32(function, "array", item))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(HarnessError::invalid(function, "array must be a list or null")),
    }
}

fn required_array(function: &str, inputs: &Value) -> Result<Vec<i32>, HarnessError> {
    int_array(function, inputs)?.ok_or_else(|| HarnessError::invalid(function, "array is required"))
}

fn i32_field(function: &str, inputs: &Value, key: &str) -> Result<i32, HarnessError> {
    let value = inputs
        .get(key)
        .ok_or_else(|| HarnessError::invalid(function, format!("{key} is required")))?;
    to_i32(function, key, value)
}

fn to_i32(function: &str, key: &str, value: &Value) -> Result<i32, HarnessError> {
    value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| HarnessError::invalid(function, format!("{key} holds a non-i32 value: {value}")))
}

fn str_field<'a>(function: &str, inputs: &'a Value, key: &str) -> Result<&'a str, HarnessError> {
    inputs
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| HarnessError::invalid(function, format!("{key} must be a string")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pair_functions_render_booleans() {
        let inputs = json!({"array": [1, 4, 5, 7, 9], "target": 10});
        assert_eq!(execute_case("has_pair_sum", &inputs).unwrap(), "true");
        assert_eq!(execute_case("has_pair_product", &inputs).unwrap(), "false");
        assert_eq!(
            execute_case("has_pair_difference", &json!({"array": null, "target": 0})).unwrap(),
            "false"
        );
    }

    #[test]
    fn pair_relation_requires_exact_name() {
        assert_eq!(pair_relation("has_pair_sum"), Some(PairRelation::Sum));
        assert_eq!(pair_relation("has_pair_difference"), Some(PairRelation::Difference));
        assert_eq!(pair_relation("has_pair_diff"), None);
        assert_eq!(pair_relation("array_sum"), None);
    }

    #[test]
    fn reductions() {
        let inputs = json!({"array": [3, -8, 2147483647, 2147483647]});
        assert_eq!(execute_case("array_max", &inputs).unwrap(), "2147483647");
        assert_eq!(execute_case("array_min", &inputs).unwrap(), "-8");
        assert_eq!(execute_case("array_sum", &inputs).unwrap(), "4294967289");
        assert_eq!(execute_case("array_max", &json!({"array": []})).unwrap(), "none");
        assert_eq!(execute_case("unique", &inputs).unwrap(), "[3, -8, 2147483647]");
    }

    #[test]
    fn string_functions() {
        assert_eq!(
            execute_case("string_split", &json!({"s": "a,,b", "delim": ","})).unwrap(),
            r#"["a","","b"]"#
        );
        assert_eq!(
            execute_case("string_trim", &json!({"s": "  hi there \n"})).unwrap(),
            "hi there"
        );
    }

    #[test]
    fn bad_inputs_are_rejected() {
        assert!(matches!(
            execute_case("has_pair_sum", &json!({"array": [1, 2]})),
            Err(HarnessError::InvalidInput { .. })
        ));
        assert!(matches!(
            execute_case("has_pair_sum", &json!({"array": [4294967296_i64], "target": 1})),
            Err(HarnessError::InvalidInput { .. })
        ));
        assert!(matches!(
            execute_case("string_split", &json!({"s": "x", "delim": ",;"})),
            Err(HarnessError::InvalidInput { .. })
        ));
        assert!(matches!(
            execute_case("array_sum", &json!({})),
            Err(HarnessError::InvalidInput { .. })
        ));
        assert!(matches!(
            execute_case("strlen", &json!({})),
            Err(HarnessError::UnsupportedFunction(name)) if name == "strlen"
        ));
    }
}
