//! # Field specifications for the attribute editors
//!
//! A [`FieldSpec`] says how one record key is edited: free text, an integer, or
//! one of a fixed list of choices. The UI components hold no policy of their own;
//! every raw input goes through [`FieldSpec::interpret`], which decides whether a
//! change is emitted at all and with what value.
//!
//! Numeric input is coerced at the boundary: surrounding whitespace is trimmed,
//! an empty box clears the field, and anything that is not a base-10 `i64`
//! (fractions included) is rejected without emitting a change. Number fields
//! render as text boxes with a numeric input mode, so the raw value is exactly
//! what was typed: a half-typed `-` arrives as `"-"` and is rejected, while
//! `""` only ever means the box was emptied.

use crate::models::{FieldValue, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Exactly one of an ordered list of allowed values.
    SingleChoice(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A change emitted by an attribute editor. `value: None` clears the field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldChange {
    pub field: String,
    pub value: Option<FieldValue>,
}

impl FieldChange {
    pub fn set(field: &str, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.to_string(),
            value: Some(value.into()),
        }
    }

    pub fn clear(field: &str) -> Self {
        Self {
            field: field.to_string(),
            value: None,
        }
    }

    /// Apply to a record; last write per field wins.
    pub fn apply_to(&self, record: &mut Record) {
        match &self.value {
            Some(value) => record.set(&self.field, value.clone()),
            None => record.clear(&self.field),
        }
    }
}

pub const SEX_CHOICES: &[&str] = &["male", "female"];
pub const WEIGHT_GOAL_CHOICES: &[&str] = &["loose", "maintain", "gain"];

/// The user form, in display order.
pub const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name"),
    FieldSpec::text("email"),
    FieldSpec::number("age"),
    FieldSpec::choice("sex", SEX_CHOICES),
    FieldSpec::number("height"),
    FieldSpec::number("activity_level"),
    FieldSpec::choice("weight_goal", WEIGHT_GOAL_CHOICES),
];

/// `weight_goal` → `"Weight Goal"`.
///
/// Splits on `_`, uppercases the first character of each segment and joins
/// with spaces. Empty segments stay empty, so the result is defined for every
/// input.
pub fn humanize(name: &str) -> String {
    name.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Why a numeric input was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotAnInteger(pub String);

/// `Ok(None)` for an empty box, `Ok(Some(n))` for an integer.
pub fn coerce_number(raw: &str) -> Result<Option<i64>, NotAnInteger> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| NotAnInteger(raw.to_string()))
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
        }
    }

    pub const fn choice(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::SingleChoice(choices),
        }
    }

    pub fn label(&self) -> String {
        humanize(self.name)
    }

    /// Virtual keyboard hint for the control (`inputmode`).
    pub fn input_mode(&self) -> &'static str {
        match self.kind {
            FieldKind::Number => "numeric",
            _ => "text",
        }
    }

    /// Allowed values, empty for non-choice fields.
    pub fn choices(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::SingleChoice(choices) => choices,
            _ => &[],
        }
    }

    /// Turn raw control input into a change, or nothing.
    ///
    /// Disabled fields never emit. For choice fields `raw` is the selected
    /// choice value and must be one of [`choices`](Self::choices).
    pub fn interpret(&self, raw: &str, disabled: bool) -> Option<FieldChange> {
        if disabled {
            return None;
        }
        match self.kind {
            FieldKind::Text => Some(FieldChange::set(self.name, raw)),
            FieldKind::Number => match coerce_number(raw) {
                Ok(Some(n)) => Some(FieldChange::set(self.name, n)),
                Ok(None) => Some(FieldChange::clear(self.name)),
                Err(NotAnInteger(input)) => {
                    tracing::debug!("{}: ignoring non-integer input {input:?}", self.name);
                    None
                }
            },
            FieldKind::SingleChoice(choices) => choices
                .iter()
                .find(|c| **c == raw)
                .map(|c| FieldChange::set(self.name, *c)),
        }
    }

    /// Value to show in a text or number control.
    pub fn input_value(&self, record: &Record) -> String {
        record.display(self.name)
    }

    /// The choice currently held by the record, if it is one of the allowed ones.
    pub fn selected_choice(&self, record: &Record) -> Option<&'static str> {
        let current = record.get(self.name)?.as_text()?;
        self.choices().iter().copied().find(|c| *c == current)
    }

    pub fn is_selected(&self, record: &Record, choice: &str) -> bool {
        self.selected_choice(record) == Some(choice)
    }
}
