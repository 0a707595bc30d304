use serde_json::json;

use crate::{Appointment, Room, User};

#[test]
fn integers_accept_numeric_strings_and_whole_floats() {
    let room: Room = serde_json::from_value(json!({
        "id": "3",
        "number": 104.0,
        "type": "AppointmentRoom",
        "capacity": " 2 "
    }))
    .expect("lenient room");
    assert_eq!((room.id, room.number, room.capacity), (3, 104, 2));
}

#[test]
fn integers_reject_fractions_and_text() {
    let fraction = serde_json::from_value::<Room>(json!({
        "id": 1, "number": 1.5, "type": "AppointmentRoom", "capacity": 1
    }));
    assert!(fraction.is_err());

    let text = serde_json::from_value::<Room>(json!({
        "id": 1, "number": "one", "type": "AppointmentRoom", "capacity": 1
    }));
    assert!(text.is_err());
}

#[test]
fn integers_reject_floats_at_or_beyond_i64_range() {
    let two_pow_63 = serde_json::from_value::<Room>(json!({
        "id": 1, "number": 9_223_372_036_854_775_808.0_f64, "type": "AppointmentRoom", "capacity": 1
    }));
    assert!(two_pow_63.is_err());

    let unsigned = serde_json::from_value::<Room>(json!({
        "id": 1, "number": 9_223_372_036_854_775_808_u64, "type": "AppointmentRoom", "capacity": 1
    }));
    assert!(unsigned.is_err());

    let largest_exact: Room = serde_json::from_value(json!({
        "id": 1, "number": 4_611_686_018_427_387_904.0_f64, "type": "AppointmentRoom", "capacity": 1
    }))
    .expect("2^62 fits");
    assert_eq!(largest_exact.number, 1_i64 << 62);
}

#[test]
fn optional_integer_treats_null_and_blank_as_absent() {
    let base = json!({
        "id": 1, "username": "u", "email": "e", "name": "n",
        "dob": "2000-01-01", "role": "Patient"
    });

    let missing: User = serde_json::from_value(base.clone()).expect("missing roomId");
    assert_eq!(missing.room_id, None);

    let mut null = base.clone();
    null["roomId"] = json!(null);
    assert_eq!(serde_json::from_value::<User>(null).expect("null").room_id, None);

    let mut blank = base.clone();
    blank["roomId"] = json!("");
    assert_eq!(serde_json::from_value::<User>(blank).expect("blank").room_id, None);

    let mut set = base;
    set["roomId"] = json!(8);
    assert_eq!(serde_json::from_value::<User>(set).expect("set").room_id, Some(8));
}

#[test]
fn flags_accept_booleans_and_numbers_and_serialize_as_integers() {
    let mut raw = json!({
        "id": 1, "assignedTo": 2, "assignedBy": 3, "date": "2025-01-01",
        "details": "d", "online": true, "room": 4
    });
    let online: Appointment = serde_json::from_value(raw.clone()).expect("bool flag");
    assert!(online.online);
    assert_eq!(serde_json::to_value(&online).expect("serialize")["online"], json!(1));

    raw["online"] = json!(0);
    let offline: Appointment = serde_json::from_value(raw).expect("numeric flag");
    assert!(!offline.online);
}
