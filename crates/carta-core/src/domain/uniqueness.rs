//! Menu-wide name uniqueness.
//!
//! Names compare after trimming and lowercasing. Accents are significant:
//! "Cafe" and "Café" are different names.

use crate::domain::{
    entities::common::{DishId, normalize_name},
    validation::{FieldError, ValidationErrorKind, ValidationErrors, ValidationResult},
    value_objects::DishField,
};

/// Anything with an id and a display name.
pub trait NamedRecord {
    fn record_id(&self) -> &DishId;
    fn record_name(&self) -> &str;
}

impl<R: NamedRecord + ?Sized> NamedRecord for &R {
    fn record_id(&self) -> &DishId {
        (**self).record_id()
    }

    fn record_name(&self) -> &str {
        (**self).record_name()
    }
}

/// `true` when no record in `existing` shares the candidate's normalized name.
///
/// The record whose id equals `exclude_id` is skipped, so a dish can keep its
/// own name when edited. An empty snapshot is always unique.
pub fn is_name_unique<R: NamedRecord>(
    candidate: &str,
    existing: &[R],
    exclude_id: Option<&DishId>,
) -> bool {
    let wanted = normalize_name(candidate);
    !existing
        .iter()
        .filter(|record| exclude_id != Some(record.record_id()))
        .any(|record| normalize_name(record.record_name()) == wanted)
}

/// Same check, reported as a `NAME_EXISTS` failure on the name field.
pub fn ensure_name_unique<R: NamedRecord>(
    candidate: &str,
    existing: &[R],
    exclude_id: Option<&DishId>,
) -> ValidationResult<()> {
    if is_name_unique(candidate, existing, exclude_id) {
        Ok(())
    } else {
        Err(ValidationErrors::from(FieldError::new(
            DishField::Name,
            ValidationErrorKind::NameExists,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dish::DishSummary;

    fn summary(id: &str, name: &str) -> DishSummary {
        DishSummary {
            id: DishId::try_new(id).unwrap(),
            name: name.to_string(),
        }
    }

    #[test]
    fn empty_menu_is_always_unique() {
        let none: [DishSummary; 0] = [];
        assert!(is_name_unique("Tacos", &none, None));
    }

    #[test]
    fn comparison_ignores_case_and_padding() {
        let menu = [summary("1", "Café")];
        assert!(!is_name_unique("café ", &menu, None));
        assert!(!is_name_unique("  CAFÉ", &menu, None));
    }

    #[test]
    fn stored_name_padding_is_ignored_too() {
        let menu = [summary("1", "café ")];
        assert!(!is_name_unique("Café", &menu, None));
        let own = DishId::try_new("1").unwrap();
        assert!(is_name_unique("Café", &menu, Some(&own)));
    }

    #[test]
    fn accents_are_significant() {
        let menu = [summary("1", "Café")];
        assert!(is_name_unique("Cafe", &menu, None));
    }

    #[test]
    fn excluded_record_does_not_collide_with_itself() {
        let menu = [summary("1", "Café")];
        let own = DishId::try_new("1").unwrap();
        assert!(is_name_unique("café ", &menu, Some(&own)));
    }

    #[test]
    fn exclusion_only_skips_the_matching_id() {
        let menu = [summary("1", "Flan"), summary("2", "Café")];
        let own = DishId::try_new("1").unwrap();
        assert!(!is_name_unique("Café", &menu, Some(&own)));
    }

    #[test]
    fn ensure_reports_name_exists() {
        let menu = [summary("1", "Tiramisú")];
        let errors = ensure_name_unique("tiramisú", &menu, None).unwrap_err();
        assert_eq!(errors.kinds(), vec![ValidationErrorKind::NameExists]);
        assert_eq!(errors.for_field(DishField::Name).len(), 1);
        assert!(ensure_name_unique("Tarta", &menu, None).is_ok());
    }
}
