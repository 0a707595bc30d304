//! Static field descriptors that drive forms, tables and payloads.
//!
//! DESIGN
//! ======
//! A schema is plain `'static` data so every entity module can declare its
//! fields as a `const` slice and generic UI code can iterate them without
//! knowing the record type.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

/// One entry of a select input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Wire value sent to the backend.
    pub value: &'static str,
    /// Human-readable option text.
    pub label: &'static str,
}

/// Input widget and JSON type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, sent as a JSON string.
    Text,
    /// Email address, sent as a JSON string.
    Email,
    /// Secret text, sent as a JSON string and never listed.
    Password,
    /// Calendar date (`YYYY-MM-DD`), sent as a JSON string.
    Date,
    /// Whole number, sent as a JSON number.
    Integer,
    /// Closed set of string values.
    Select(&'static [Choice]),
    /// Yes/no flag, sent as `1` or `0`.
    Flag,
}

impl FieldKind {
    /// HTML `type` attribute for input-based kinds.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::Select(_) => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Integer | Self::Flag => "number",
        }
    }

    /// Options rendered for select-like kinds.
    #[must_use]
    pub fn choices(self) -> Option<&'static [Choice]> {
        match self {
            Self::Select(choices) => Some(choices),
            Self::Flag => Some(FLAG_CHOICES),
            _ => None,
        }
    }

    /// Whether the payload value is a JSON number.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Flag)
    }
}

const FLAG_CHOICES: &[Choice] = &[
    Choice {
        value: "1",
        label: "Yes",
    },
    Choice {
        value: "0",
        label: "No",
    },
];

/// Which form a field appears in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forms {
    Both,
    CreateOnly,
}

/// The form a schema is being applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl Forms {
    #[must_use]
    pub fn includes(self, mode: FormMode) -> bool {
        match self {
            Self::Both => true,
            Self::CreateOnly => mode == FormMode::Create,
        }
    }
}

/// Descriptor for a single record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key used by the backend.
    pub name: &'static str,
    /// Label shown next to the input and as the column header.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Required fields must be non-empty before a request is built.
    pub required: bool,
    pub forms: Forms,
    /// Initial value of the input in a blank form.
    pub default: &'static str,
}

impl FieldSpec {
    /// A required field shown in both forms with an empty default.
    #[must_use]
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            forms: Forms::Both,
            default: "",
        }
    }

    /// An optional field shown in both forms with an empty default.
    #[must_use]
    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, label, kind)
        }
    }

    #[must_use]
    pub const fn create_only(self) -> Self {
        Self {
            forms: Forms::CreateOnly,
            ..self
        }
    }

    #[must_use]
    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Table text for a raw form value: choice labels for select kinds,
    /// the value itself otherwise.
    #[must_use]
    pub fn display(&self, raw: &str) -> String {
        self.kind
            .choices()
            .and_then(|choices| choices.iter().find(|c| c.value == raw))
            .map_or_else(|| raw.to_owned(), |c| c.label.to_owned())
    }
}

/// Ordered field list of one entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Fields shown in the given form, in declaration order.
    pub fn fields_for(self, mode: FormMode) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(move |f| f.forms.includes(mode))
    }

    /// Fields rendered as table columns (everything the edit form shows).
    pub fn columns(self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields_for(FormMode::Edit)
    }

    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
