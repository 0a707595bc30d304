use serde_json::json;

use super::*;
use crate::entity::EntityKind;
use crate::{Supply, User};

#[test]
fn blank_form_holds_defaults_for_mode() {
    let schema = EntityKind::User.schema();
    let mut edit = FormData::blank(schema, FormMode::Edit);
    assert_eq!(edit.get("role"), "Patient");
    assert!(!edit.set("password", "pw"));

    let mut create = FormData::blank(schema, FormMode::Create);
    assert!(create.set("password", "pw"));
    assert_eq!(create.get("password"), "pw");
}

#[test]
fn unknown_field_reads_empty_and_cannot_be_set() {
    let mut form = FormData::blank(EntityKind::Room.schema(), FormMode::Edit);
    assert_eq!(form.get("nope"), "");
    assert!(!form.set("nope", "x"));
    assert_eq!(form.get("nope"), "");
}

#[test]
fn from_record_stringifies_every_column() {
    let supply = Supply {
        id: 2,
        code: 0,
        name: "Gauze".to_owned(),
        description: "Sterile, 10cm".to_owned(),
        quantity: 40,
    };
    let form = FormData::from_record(&supply, FormMode::Edit);
    assert_eq!(form.get("code"), "0");
    assert_eq!(form.get("name"), "Gauze");
    assert_eq!(form.get("description"), "Sterile, 10cm");
    assert_eq!(form.get("quantity"), "40");
}

#[test]
fn from_json_falls_back_to_defaults_for_absent_keys() {
    let form = FormData::from_json(
        EntityKind::User.schema(),
        FormMode::Edit,
        &json!({ "username": "bob", "genre": null }),
    );
    assert_eq!(form.get("username"), "bob");
    assert_eq!(form.get("genre"), "");
    assert_eq!(form.get("role"), "Patient");
}

#[test]
fn missing_required_lists_fields_in_schema_order() {
    let form = FormData::blank(EntityKind::Supply.schema(), FormMode::Edit);
    let err = form
        .to_payload(EntityKind::Supply.schema(), FormMode::Edit)
        .expect_err("blank supply is incomplete");
    assert_eq!(
        err,
        FormError::MissingFields(vec!["code", "name", "description", "quantity"])
    );
    assert_eq!(
        err.to_string(),
        "missing required fields: code, name, description, quantity"
    );
}

#[test]
fn optional_fields_are_not_required() {
    let schema = EntityKind::User.schema();
    let mut form = FormData::blank(schema, FormMode::Edit);
    form.set("username", "u");
    form.set("email", "u@example.com");
    form.set("name", "U");
    form.set("dob", "2000-02-02");
    assert!(form.missing_required(schema, FormMode::Edit).is_empty());
    let payload = form.to_payload(schema, FormMode::Edit).expect("payload");
    assert_eq!(payload["genre"], serde_json::Value::Null);
    assert_eq!(payload["roomId"], serde_json::Value::Null);
    assert!(payload.get("password").is_none());
}

#[test]
fn payload_trims_text_and_parses_integers() {
    let schema = EntityKind::Supply.schema();
    let mut form = FormData::blank(schema, FormMode::Create);
    form.set("code", " 17 ");
    form.set("name", " Saline ");
    form.set("description", "0.9% NaCl");
    form.set("quantity", "-3");
    let payload = form.to_payload(schema, FormMode::Create).expect("payload");
    assert_eq!(
        payload,
        json!({ "code": 17, "name": "Saline", "description": "0.9% NaCl", "quantity": -3 })
    );
}

#[test]
fn invalid_integer_reports_label_and_raw_value() {
    let schema = EntityKind::Supply.schema();
    let mut form = FormData::blank(schema, FormMode::Create);
    form.set("code", "1.5");
    form.set("name", "Tape");
    form.set("description", "Roll");
    form.set("quantity", "1");
    let err = form.to_payload(schema, FormMode::Create).expect_err("not whole");
    assert_eq!(
        err,
        FormError::InvalidInteger {
            label: "Code",
            value: "1.5".to_owned()
        }
    );
    assert_eq!(err.user_message(), "Code must be a whole number.");
}

#[test]
fn selected_user_round_trips_to_same_payload_values() {
    let user = User {
        id: 1,
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        name: "Ana".to_owned(),
        genre: Some("F".to_owned()),
        dob: "1990-01-01".to_owned(),
        role: crate::Role::HealthProfessional,
        room_id: Some(5),
    };
    let schema = EntityKind::User.schema();
    let payload = FormData::from_record(&user, FormMode::Edit)
        .to_payload(schema, FormMode::Edit)
        .expect("payload");
    assert_eq!(payload["genre"], json!("F"));
    assert_eq!(payload["role"], json!("HealthProfessional"));
    assert_eq!(payload["roomId"], json!(5));
}
