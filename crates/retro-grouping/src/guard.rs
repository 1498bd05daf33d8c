//! Shape guard for drag/drop payloads arriving as untyped JSON.
//!
//! Checks shape only, not business rules: a self-drop or a conflicting group
//! pair is still well-shaped.

use serde_json::{Map, Value};

use crate::drop_action::DragDropState;
use crate::error::GuardError;

/// Whether `candidate` is a well-shaped drag/drop state.
///
/// `activeId` and `targetId` must be non-empty strings. `activeGroupId` and
/// `targetGroupId` must be absent, `null`, or a string.
#[must_use]
pub fn is_valid_drag_drop_state(candidate: &Value) -> bool {
    check(candidate).is_ok()
}

impl DragDropState {
    /// Convert an untyped candidate, reporting the first field that fails the
    /// shape guard.
    pub fn from_value(candidate: &Value) -> Result<Self, GuardError> {
        let fields = check(candidate)?;
        Ok(Self {
            active_id: fields.active_id.to_owned(),
            active_group_id: fields.active_group_id.map(str::to_owned),
            target_id: fields.target_id.to_owned(),
            target_group_id: fields.target_group_id.map(str::to_owned),
        })
    }
}

struct Fields<'a> {
    active_id: &'a str,
    active_group_id: Option<&'a str>,
    target_id: &'a str,
    target_group_id: Option<&'a str>,
}

fn check(candidate: &Value) -> Result<Fields<'_>, GuardError> {
    let Value::Object(map) = candidate else {
        return Err(GuardError::NotAnObject);
    };
    Ok(Fields {
        active_id: id_field(map, "activeId")?,
        active_group_id: group_field(map, "activeGroupId")?,
        target_id: id_field(map, "targetId")?,
        target_group_id: group_field(map, "targetGroupId")?,
    })
}

fn id_field<'a>(map: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, GuardError> {
    match map.get(field) {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.as_str()),
        _ => Err(GuardError::InvalidId { field }),
    }
}

fn group_field<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, GuardError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(id.as_str())),
        Some(_) => Err(GuardError::InvalidGroupId { field }),
    }
}
