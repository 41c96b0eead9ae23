//! Field-level validation over the generic JSON value tree.
//!
//! Every accessor reads one named field from a key-value node, requires the
//! stated type and range, and fails with a message naming the offending key
//! so the top-level error is self-diagnosing.

use serde_json::{Map, Value};

use crate::core::{Color, Vec3};
use crate::error::{RaysceneError, RaysceneResult};

/// Look up `key`, failing with a missing-field error if absent.
pub fn require_key<'a>(obj: &'a Map<String, Value>, key: &str) -> RaysceneResult<&'a Value> {
    obj.get(key)
        .ok_or_else(|| RaysceneError::missing_field(format!("key \"{key}\"")))
}

pub fn get_bool(obj: &Map<String, Value>, key: &str) -> RaysceneResult<bool> {
    require_key(obj, key)?
        .as_bool()
        .ok_or_else(|| RaysceneError::wrong_type(format!("key \"{key}\" must be a bool")))
}

/// Read a numeric field as `f64`. Integer literals are accepted.
pub fn get_float(obj: &Map<String, Value>, key: &str) -> RaysceneResult<f64> {
    require_key(obj, key)?
        .as_f64()
        .ok_or_else(|| RaysceneError::wrong_type(format!("key \"{key}\" must be a number")))
}

pub fn get_string(obj: &Map<String, Value>, key: &str) -> RaysceneResult<String> {
    require_key(obj, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| RaysceneError::wrong_type(format!("key \"{key}\" must be a string")))
}

/// Read an integral field strictly greater than zero.
///
/// Floats are rejected even when they hold an integral value, so `2.0` is a
/// wrong type rather than a resolution of 2.
pub fn get_positive_integer(obj: &Map<String, Value>, key: &str) -> RaysceneResult<u32> {
    let number = match require_key(obj, key)? {
        Value::Number(n) if n.is_i64() || n.is_u64() => n,
        _ => {
            return Err(RaysceneError::wrong_type(format!(
                "key \"{key}\" must be an integer"
            )));
        }
    };
    match number.as_u64() {
        Some(0) | None => Err(RaysceneError::out_of_range(format!(
            "key \"{key}\" must be positive"
        ))),
        Some(n) => u32::try_from(n).map_err(|_| {
            RaysceneError::out_of_range(format!("key \"{key}\" is too large for a resolution"))
        }),
    }
}

/// Read an ordered sequence of exactly 3 numbers as a [`Vec3`].
pub fn get_vector3(obj: &Map<String, Value>, key: &str) -> RaysceneResult<Vec3> {
    let array = require_key(obj, key)?
        .as_array()
        .ok_or_else(|| RaysceneError::wrong_type(format!("expected \"{key}\" to be an array")))?;
    if array.len() != 3 {
        return Err(RaysceneError::wrong_length(format!(
            "expected array \"{key}\" to have 3 elements, but found {} elements",
            array.len()
        )));
    }
    let mut components = [0.0; 3];
    for (slot, value) in components.iter_mut().zip(array) {
        *slot = value.as_f64().ok_or_else(|| {
            RaysceneError::wrong_type(format!("key \"{key}\" must contain only numbers"))
        })?;
    }
    Ok(Vec3::new(components[0], components[1], components[2]))
}

pub fn get_positive_float(obj: &Map<String, Value>, key: &str) -> RaysceneResult<f64> {
    let x = get_float(obj, key)?;
    if x <= 0.0 {
        return Err(RaysceneError::out_of_range(format!(
            "key \"{key}\" must be positive"
        )));
    }
    Ok(x)
}

pub fn get_negative_float(obj: &Map<String, Value>, key: &str) -> RaysceneResult<f64> {
    let x = get_float(obj, key)?;
    if x >= 0.0 {
        return Err(RaysceneError::out_of_range(format!(
            "key \"{key}\" must be negative"
        )));
    }
    Ok(x)
}

pub fn get_nonnegative_float(obj: &Map<String, Value>, key: &str) -> RaysceneResult<f64> {
    let x = get_float(obj, key)?;
    if x < 0.0 {
        return Err(RaysceneError::out_of_range(format!(
            "key \"{key}\" must be non-negative"
        )));
    }
    Ok(x)
}

/// Read a 3-element numeric sequence as a [`Color`], requiring every
/// component in `[0, 1]`.
pub fn get_color(obj: &Map<String, Value>, key: &str) -> RaysceneResult<Color> {
    let v = get_vector3(obj, key)?;
    for (component, value) in [("r", v.x), ("g", v.y), ("b", v.z)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(RaysceneError::out_of_range(format!(
                "key \"{key}\" has {component} component outside the range [0, 1]"
            )));
        }
    }
    Color::new(v.x, v.y, v.z)
}

/// Read a required nested object field.
pub fn get_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> RaysceneResult<&'a Map<String, Value>> {
    require_key(obj, key)?
        .as_object()
        .ok_or_else(|| RaysceneError::wrong_type(format!("key \"{key}\" must be an object")))
}

/// Read a required array field.
pub fn get_array<'a>(obj: &'a Map<String, Value>, key: &str) -> RaysceneResult<&'a Vec<Value>> {
    require_key(obj, key)?
        .as_array()
        .ok_or_else(|| RaysceneError::wrong_type(format!("expected \"{key}\" to be an array")))
}

/// Require a list element to be an object, naming the list and position.
pub fn element_object<'a>(
    value: &'a Value,
    list: &str,
    index: usize,
) -> RaysceneResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        RaysceneError::wrong_type(format!("\"{list}\"[{index}] must be an object"))
    })
}
