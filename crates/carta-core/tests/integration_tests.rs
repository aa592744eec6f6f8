//! Integration tests for carta-core.

use std::sync::{Arc, RwLock};

use carta_core::{
    application::ApplicationError,
    domain::{MAX_PRICE, MIN_PRICE},
    prelude::*,
};
use rust_decimal::Decimal;
use serde_json::json;

/// Minimal store so the service can be driven end to end without adapters.
#[derive(Default, Clone)]
struct VecStore {
    dishes: Arc<RwLock<Vec<Dish>>>,
}

impl DishStore for VecStore {
    fn list(&self) -> MenuResult<Vec<Dish>> {
        Ok(self.dishes.read().unwrap().clone())
    }

    fn get(&self, id: &DishId) -> MenuResult<Option<Dish>> {
        Ok(self
            .dishes
            .read()
            .unwrap()
            .iter()
            .find(|d| d.id() == id)
            .cloned())
    }

    fn insert(&self, dish: Dish) -> MenuResult<()> {
        self.dishes.write().unwrap().push(dish);
        Ok(())
    }

    fn replace(&self, dish: Dish) -> MenuResult<()> {
        let mut dishes = self.dishes.write().unwrap();
        let slot = dishes
            .iter_mut()
            .find(|d| d.id() == dish.id())
            .ok_or_else(|| ApplicationError::DishNotFound {
                id: dish.id().to_string(),
            })?;
        *slot = dish;
        Ok(())
    }

    fn remove(&self, id: &DishId) -> MenuResult<Dish> {
        let mut dishes = self.dishes.write().unwrap();
        let index = dishes
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| ApplicationError::DishNotFound { id: id.to_string() })?;
        Ok(dishes.remove(index))
    }

    fn len(&self) -> MenuResult<usize> {
        Ok(self.dishes.read().unwrap().len())
    }
}

fn service() -> (MenuService, VecStore) {
    let store = VecStore::default();
    (MenuService::new(Box::new(store.clone())), store)
}

fn kinds(err: &MenuError) -> Vec<ValidationErrorKind> {
    err.validation_errors()
        .map(ValidationErrors::kinds)
        .unwrap_or_default()
}

#[test]
fn create_on_empty_menu() {
    let (service, store) = service();

    let dish = service
        .create_dish(&json!({"name": "Tacos", "price": 9.99, "category": "Entradas"}))
        .unwrap();

    assert_eq!(dish.status(), DishStatus::Available);
    assert_eq!(dish.category(), Category::Entradas);
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn duplicate_name_is_not_added() {
    let (service, store) = service();
    service
        .create_dish(&json!({"name": "Tacos", "price": 9.99, "category": "Entradas"}))
        .unwrap();

    let err = service
        .create_dish(&json!({"name": "  TACOS ", "price": 11, "category": "Platos Fuertes"}))
        .unwrap_err();

    assert_eq!(kinds(&err), vec![ValidationErrorKind::NameExists]);
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn every_failure_is_reported_at_once() {
    let (service, store) = service();

    let err = service
        .create_dish(&json!({
            "name": "",
            "description": "d".repeat(600),
            "price": 10.555,
            "category": "Sopas"
        }))
        .unwrap_err();

    assert_eq!(
        kinds(&err),
        vec![
            ValidationErrorKind::NameRequired,
            ValidationErrorKind::DescriptionTooLong,
            ValidationErrorKind::PriceTooManyDecimals,
            ValidationErrorKind::CategoryInvalid,
        ]
    );
    assert!(store.is_empty().unwrap());
}

#[test]
fn status_only_update_touches_status_and_timestamp() {
    let (service, _store) = service();
    let dish = service
        .create_dish(&json!({
            "name": "Hamburguesa Trufada",
            "description": "Carne angus y trufa",
            "price": 15.5,
            "category": "Entradas"
        }))
        .unwrap();

    let updated = service
        .update_dish(dish.id(), &json!({"status": "SoldOut"}))
        .unwrap();

    assert_eq!(updated.status(), DishStatus::SoldOut);
    assert!(updated.updated_at() >= dish.updated_at());
    assert_eq!(updated.name(), dish.name());
    assert_eq!(updated.description(), dish.description());
    assert_eq!(updated.price(), dish.price());
    assert_eq!(updated.category(), dish.category());
    assert_eq!(updated.created_at(), dish.created_at());
}

#[test]
fn toggle_then_delete() {
    let (service, store) = service();
    let dish = service
        .create_dish(&json!({"name": "Tiramisú", "price": 8, "category": "Postres"}))
        .unwrap();

    let toggled = service.toggle_status(dish.id()).unwrap();
    assert_eq!(toggled.status(), DishStatus::SoldOut);
    assert_eq!(service.get_dish(dish.id()).unwrap().status(), DishStatus::SoldOut);

    let removed = service.delete_dish(dish.id()).unwrap();
    assert_eq!(removed.id(), dish.id());
    assert!(store.is_empty().unwrap());

    let err = service.delete_dish(dish.id()).unwrap_err();
    assert!(matches!(
        err,
        MenuError::Application(ApplicationError::DishNotFound { .. })
    ));
}

#[test]
fn renaming_freed_name_is_allowed() {
    let (service, _store) = service();
    let first = service
        .create_dish(&json!({"name": "Café", "price": 2.5, "category": "Bebidas"}))
        .unwrap();
    service
        .update_dish(first.id(), &json!({"name": "Café de Olla"}))
        .unwrap();

    assert!(service.is_name_available("café", None).unwrap());
    assert!(!service.is_name_available("CAFÉ DE OLLA", None).unwrap());
    assert!(
        service
            .is_name_available("CAFÉ DE OLLA", Some(first.id()))
            .unwrap()
    );
}

#[test]
fn uniqueness_examples() {
    let snapshot = [DishSummary {
        id: DishId::try_new("1").unwrap(),
        name: "café ".into(),
    }];
    assert!(!is_name_unique("Café", &snapshot, None));
    assert!(is_name_unique(
        "Café",
        &snapshot,
        Some(&DishId::try_new("1").unwrap())
    ));
}

#[test]
fn formatting_examples() {
    assert_eq!(format_currency(Decimal::new(155, 1)), "$15.50");
    assert_eq!(format_price(Decimal::from(8)), "8.00");

    for raw in ["0.01", "1.005", "15.5", "999999.99", "42"] {
        let once = format_price(raw.parse().unwrap());
        let twice = format_price(once.parse().unwrap());
        assert_eq!(once, twice, "format_price not idempotent for {raw}");
    }
}

#[test]
fn price_bounds_are_inclusive() {
    let (service, _store) = service();
    for (name, price) in [("Min", MIN_PRICE), ("Max", MAX_PRICE)] {
        let amount: f64 = price.to_string().parse().unwrap();
        let dish = service
            .create_dish(&json!({"name": name, "price": amount, "category": "Bebidas"}))
            .unwrap();
        assert_eq!(dish.price().amount(), price);
    }
}
