//! Built-in entity classes.
//!
//! Each class is a plain attribute bag: a [`ModelSchema`] listing the
//! class-level fields and their defaults, with no behavior beyond [`Entity`].
//!
//! [`Entity`]: crate::Entity

use crate::{FieldSpec, ModelSchema};

pub const BASE_MODEL: &str = "BaseModel";
pub const USER: &str = "User";
pub const STATE: &str = "State";
pub const CITY: &str = "City";
pub const AMENITY: &str = "Amenity";
pub const PLACE: &str = "Place";
pub const REVIEW: &str = "Review";

/// The generic base object; identity and timestamps only.
pub fn base_model() -> ModelSchema {
    ModelSchema::new(BASE_MODEL)
}

pub fn user() -> ModelSchema {
    ModelSchema::new(USER)
        .with_field(FieldSpec::text("email"))
        .with_field(FieldSpec::text("password"))
        .with_field(FieldSpec::text("first_name"))
        .with_field(FieldSpec::text("last_name"))
}

pub fn state() -> ModelSchema {
    ModelSchema::new(STATE).with_field(FieldSpec::text("name"))
}

pub fn city() -> ModelSchema {
    ModelSchema::new(CITY)
        .with_field(FieldSpec::text("state_id"))
        .with_field(FieldSpec::text("name"))
}

pub fn amenity() -> ModelSchema {
    ModelSchema::new(AMENITY).with_field(FieldSpec::text("name"))
}

pub fn place() -> ModelSchema {
    ModelSchema::new(PLACE)
        .with_field(FieldSpec::text("city_id"))
        .with_field(FieldSpec::text("user_id"))
        .with_field(FieldSpec::text("name"))
        .with_field(FieldSpec::text("description"))
        .with_field(FieldSpec::integer("number_rooms"))
        .with_field(FieldSpec::integer("number_bathrooms"))
        .with_field(FieldSpec::integer("max_guest"))
        .with_field(FieldSpec::integer("price_by_night"))
        .with_field(FieldSpec::float("latitude"))
        .with_field(FieldSpec::float("longitude"))
        .with_field(FieldSpec::list("amenity_ids"))
}

pub fn review() -> ModelSchema {
    ModelSchema::new(REVIEW)
        .with_field(FieldSpec::text("place_id"))
        .with_field(FieldSpec::text("user_id"))
        .with_field(FieldSpec::text("text"))
}

/// Every built-in class, in declaration order.
pub fn builtin_schemas() -> Vec<ModelSchema> {
    vec![
        base_model(),
        user(),
        state(),
        city(),
        amenity(),
        place(),
        review(),
    ]
}
