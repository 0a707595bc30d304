//! String-valued form model bound to HTML inputs.
//!
//! DESIGN
//! ======
//! Inputs always hold text, so the form keeps one `String` per schema field
//! and converts to typed JSON only when a payload is built. Emptiness, not
//! falsiness, decides whether a required field is missing: `"0"` is a value.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::entity::Resource;
use crate::error::FormError;
use crate::schema::{FieldKind, FormMode, Schema};

/// Current input values of one form, keyed by JSON field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<&'static str, String>,
}

impl FormData {
    /// A form holding each field's default value.
    #[must_use]
    pub fn blank(schema: Schema, mode: FormMode) -> Self {
        let values = schema
            .fields_for(mode)
            .map(|f| (f.name, f.default.to_owned()))
            .collect();
        Self { values }
    }

    /// A form holding the exact values of `record`.
    ///
    /// Fields the record does not carry (create-only fields such as a
    /// password) fall back to their defaults.
    #[must_use]
    pub fn from_record<R: Resource>(record: &R, mode: FormMode) -> Self {
        let json = serde_json::to_value(record).unwrap_or(Value::Null);
        Self::from_json(R::KIND.schema(), mode, &json)
    }

    /// Same as [`Self::from_record`] for an untyped JSON object.
    #[must_use]
    pub fn from_json(schema: Schema, mode: FormMode, json: &Value) -> Self {
        let values = schema
            .fields_for(mode)
            .map(|f| {
                let value = json
                    .get(f.name)
                    .map_or_else(|| f.default.to_owned(), json_to_input);
                (f.name, value)
            })
            .collect();
        Self { values }
    }

    /// Value of `name`, or `""` for fields this form does not hold.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Overwrite one field. Returns `false` for names this form does not hold.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Names of required fields whose input is blank.
    #[must_use]
    pub fn missing_required(&self, schema: Schema, mode: FormMode) -> Vec<&'static str> {
        schema
            .fields_for(mode)
            .filter(|f| f.required && self.get(f.name).trim().is_empty())
            .map(|f| f.name)
            .collect()
    }

    /// Convert to the JSON body the backend expects.
    ///
    /// Optional blank fields become `null`; numeric kinds become JSON numbers.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] if a required field is blank and
    /// [`FormError::InvalidInteger`] if a numeric field does not parse.
    pub fn to_payload(&self, schema: Schema, mode: FormMode) -> Result<Value, FormError> {
        let missing = self.missing_required(schema, mode);
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let mut body = Map::new();
        for field in schema.fields_for(mode) {
            let raw = self.get(field.name);
            let trimmed = raw.trim();
            let value = if trimmed.is_empty() {
                Value::Null
            } else if field.kind.is_numeric() {
                let number = trimmed
                    .parse::<i64>()
                    .map_err(|_| FormError::InvalidInteger {
                        label: field.label,
                        value: raw.to_owned(),
                    })?;
                Value::from(number)
            } else if matches!(field.kind, FieldKind::Password) {
                Value::String(raw.to_owned())
            } else {
                Value::String(trimmed.to_owned())
            };
            body.insert(field.name.to_owned(), value);
        }
        Ok(Value::Object(body))
    }
}

fn json_to_input(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => if *flag { "1" } else { "0" }.to_owned(),
        other => other.to_string(),
    }
}
