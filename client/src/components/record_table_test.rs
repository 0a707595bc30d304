use super::*;
use records::{Appointment, Role, User};

#[test]
fn row_cells_start_with_id_and_follow_columns() {
    let user = User {
        id: 3,
        username: "joao".to_owned(),
        email: "joao@example.com".to_owned(),
        name: "João".to_owned(),
        genre: Some("M".to_owned()),
        dob: "1985-07-12".to_owned(),
        role: Role::HealthProfessional,
        room_id: None,
    };
    assert_eq!(
        row_cells(&user),
        vec![
            "3",
            "joao",
            "joao@example.com",
            "João",
            "Male",
            "1985-07-12",
            "Health professional",
            ""
        ]
    );
}

#[test]
fn row_cells_render_flags_as_yes_no() {
    let appointment = Appointment {
        id: 8,
        assigned_to: 1,
        assigned_by: 2,
        date: "2025-05-05".to_owned(),
        details: "Online consult".to_owned(),
        online: true,
        room: 0,
    };
    let cells = row_cells(&appointment);
    assert_eq!(cells[5], "Yes");
    assert_eq!(cells[6], "0");
}
