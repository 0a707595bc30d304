use super::*;

#[test]
fn update_button_label_reflects_loading() {
    assert_eq!(update_button_label(EntityKind::Supply, false), "Update supply");
    assert_eq!(update_button_label(EntityKind::Supply, true), "Saving...");
}

#[test]
fn selected_id_text_is_blank_without_selection() {
    assert_eq!(selected_id_text(None), "");
    assert_eq!(selected_id_text(Some(12)), "12");
}
