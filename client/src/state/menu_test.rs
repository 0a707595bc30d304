use super::*;

#[test]
fn menu_defaults_to_users() {
    let menu = MenuState::default();
    assert!(menu.is_active(EntityKind::User));
    assert!(!menu.is_active(EntityKind::Room));
}

#[test]
fn select_switches_active_entity() {
    let mut menu = MenuState::default();
    menu.select(EntityKind::Appointment);
    assert_eq!(menu.active, EntityKind::Appointment);
    assert!(!menu.is_active(EntityKind::User));
}
