//! Dish form metadata: labels, placeholders, and limits per field.
//!
//! Front ends render their inputs from these so that what the form offers
//! and what the schemas accept cannot drift apart.

use crate::domain::value_objects::DishField;

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
    Number,
    Select,
}

/// Presentation metadata for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub field: DishField,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub input: InputKind,
    pub max_len: Option<usize>,
}

pub const NAME_FIELD: FormField = FormField {
    field: DishField::Name,
    label: "Nombre del Platillo",
    placeholder: Some("Ej: Hamburguesa Trufada"),
    required: true,
    input: InputKind::Text,
    max_len: Some(NAME_MAX_LEN),
};

pub const DESCRIPTION_FIELD: FormField = FormField {
    field: DishField::Description,
    label: "Descripción",
    placeholder: Some("Ej: Carne angus y trufa"),
    required: false,
    input: InputKind::TextArea,
    max_len: Some(DESCRIPTION_MAX_LEN),
};

/// Price bounds and step live in `domain::price`.
pub const PRICE_FIELD: FormField = FormField {
    field: DishField::Price,
    label: "Precio ($)",
    placeholder: Some("0.00"),
    required: true,
    input: InputKind::Number,
    max_len: None,
};

pub const CATEGORY_FIELD: FormField = FormField {
    field: DishField::Category,
    label: "Categoría",
    placeholder: None,
    required: true,
    input: InputKind::Select,
    max_len: None,
};

/// Creation form fields, in display order.
pub const FORM_FIELDS: [FormField; 4] = [NAME_FIELD, DESCRIPTION_FIELD, PRICE_FIELD, CATEGORY_FIELD];

/// Metadata for a field, if it appears on the creation form.
pub fn form_field(field: DishField) -> Option<&'static FormField> {
    FORM_FIELDS.iter().find(|f| f.field == field)
}
