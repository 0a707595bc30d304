use super::*;
use crate::entity::EntityKind;

#[test]
fn create_only_fields_are_hidden_from_edit_and_columns() {
    let schema = EntityKind::User.schema();
    assert!(schema.fields_for(FormMode::Create).any(|f| f.name == "password"));
    assert!(!schema.fields_for(FormMode::Edit).any(|f| f.name == "password"));
    assert!(!schema.columns().any(|f| f.name == "password"));
}

#[test]
fn columns_follow_declaration_order() {
    let names = EntityKind::Room
        .schema()
        .columns()
        .map(|f| f.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["number", "type", "capacity"]);
}

#[test]
fn display_maps_choice_values_to_labels() {
    let schema = EntityKind::Appointment.schema();
    let online = schema.field("online").expect("online field");
    assert_eq!(online.display("1"), "Yes");
    assert_eq!(online.display("0"), "No");

    let details = schema.field("details").expect("details field");
    assert_eq!(details.display("1"), "1");
}

#[test]
fn display_passes_through_unknown_choice() {
    let role = EntityKind::User.schema().field("role").expect("role field");
    assert_eq!(role.display("Admin"), "Administrator");
    assert_eq!(role.display("Janitor"), "Janitor");
}

#[test]
fn input_types_match_kinds() {
    assert_eq!(FieldKind::Email.input_type(), "email");
    assert_eq!(FieldKind::Date.input_type(), "date");
    assert_eq!(FieldKind::Integer.input_type(), "number");
    assert_eq!(FieldKind::Password.input_type(), "password");
    assert!(FieldKind::Flag.is_numeric());
    assert!(FieldKind::Text.choices().is_none());
}

#[test]
fn builder_helpers_set_flags() {
    const FIELD: FieldSpec = FieldSpec::optional("note", "Note", FieldKind::Text)
        .create_only()
        .with_default("n/a");
    assert!(!FIELD.required);
    assert_eq!(FIELD.forms, Forms::CreateOnly);
    assert_eq!(FIELD.default, "n/a");
    assert!(FIELD.forms.includes(FormMode::Create));
    assert!(!FIELD.forms.includes(FormMode::Edit));
}
