use super::*;

#[test]
fn create_button_label_names_the_entity() {
    assert_eq!(create_button_label(EntityKind::Appointment, false), "Create appointment");
    assert_eq!(create_button_label(EntityKind::Room, false), "Create room");
}

#[test]
fn create_button_label_while_loading() {
    assert_eq!(create_button_label(EntityKind::User, true), "Creating...");
}
