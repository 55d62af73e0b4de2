//! Event field collection

use std::fmt;

use tracing::field::{Field, Visit};

/// Collects an event's `message` and its other fields as `key=value`
#[derive(Debug, Default)]
pub(crate) struct FieldCollector {
    message: Option<String>,
    fields: Vec<String>,
}

impl FieldCollector {
    /// Message followed by the remaining fields, space separated
    pub(crate) fn finish(self) -> String {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        parts.extend(self.message);
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}
