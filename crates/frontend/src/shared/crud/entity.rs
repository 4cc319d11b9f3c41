//! Entity descriptor: everything a generic list page needs to know about
//! one backend resource.

use super::form_fields::{FieldValue, FormFields};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "table__cell",
            Align::Right => "table__cell table__cell--right",
            Align::Center => "table__cell table__cell--center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    pub align: Align,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            align: Align::Left,
        }
    }

    pub const fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub const fn center(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

/// One rendered table cell. Text stays plain text until the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Money(f64),
    Number { value: f64, decimals: u8 },
    Date(String),
    DateTime(String),
    Badge { label: String, tone: Tone },
    Color(String),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Empty,
        }
    }

    pub fn active(active: bool) -> Self {
        if active {
            CellValue::Badge {
                label: "Ativo".to_string(),
                tone: Tone::Success,
            }
        } else {
            CellValue::Badge {
                label: "Inativo".to_string(),
                tone: Tone::Neutral,
            }
        }
    }
}

/// Option of a fixed select: (wire value, label)
pub type SelectOption = (&'static str, &'static str);

/// Options loaded from another endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupDef {
    pub endpoint: &'static str,
    /// Record field shown as the option label
    pub label_field: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number { step: &'static str },
    Integer,
    Date,
    Color,
    Email,
    Password,
    Checkbox,
    Select(Vec<SelectOption>),
    Lookup(LookupDef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub default: FieldValue,
}

impl FieldDef {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        let default = match kind {
            FieldKind::Checkbox => FieldValue::Flag(true),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            key,
            label,
            kind,
            required: false,
            placeholder: "",
            default,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn default_value(mut self, value: FieldValue) -> Self {
        self.default = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    Text,
    Date,
    Select(Vec<SelectOption>),
    Lookup(LookupDef),
    /// Sim / Não select sent as `true` / `false`
    Active,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDef {
    /// Query parameter name
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterDef {
    pub fn new(key: &'static str, label: &'static str, kind: FilterKind) -> Self {
        Self { key, label, kind }
    }

    pub fn active() -> Self {
        Self::new("ativo", "Ativo", FilterKind::Active)
    }
}

/// A backend resource listed, created, edited and deleted by one page
pub trait CrudEntity: 'static {
    type Record: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;
    type Payload: Serialize;

    /// Tab key, also the page id prefix
    const KEY: &'static str;
    /// Page title (plural)
    const TITLE: &'static str;
    /// Modal title when creating, e.g. "Nova cidade"
    const NEW_TITLE: &'static str;
    /// Modal title when editing
    const EDIT_TITLE: &'static str;
    const ENDPOINT: &'static str;
    const PERMISSION_PREFIX: &'static str;
    /// No create / edit / delete, whatever the granted codes say
    const READ_ONLY: bool = false;

    fn record_id(record: &Self::Record) -> RecordId;

    /// Short description used in confirmation messages
    fn display_name(record: &Self::Record) -> String;

    fn columns() -> Vec<ColumnDef>;

    /// One cell per column, same order as [`CrudEntity::columns`]
    fn cells(record: &Self::Record) -> Vec<CellValue>;

    fn filters() -> Vec<FilterDef> {
        Vec::new()
    }

    fn fields() -> Vec<FieldDef> {
        Vec::new()
    }

    /// Field values of a blank "new" form
    fn default_form() -> FormFields {
        FormFields::from_defaults(&Self::fields())
    }

    fn to_form(record: &Self::Record) -> FormFields;

    /// Parse and validate the form into the request body
    fn to_payload(form: &FormFields) -> Result<Self::Payload, FieldErrors>;

    fn item_path(id: RecordId) -> String {
        format!("{}/{}", Self::ENDPOINT, id)
    }
}
