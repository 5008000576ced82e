use contactbook_core::{Contact, ContactInput, ContactValidationError};
use uuid::Uuid;

fn eve() -> ContactInput {
    ContactInput::new("Eve", "1234567890", "0987654321")
}

#[test]
fn input_new_sets_defaults() {
    let input = eve();

    assert_eq!(input.name, "Eve");
    assert!(!input.is_favorite);
    assert_eq!(input.avatar, None);
    assert!(input.validate().is_ok());
}

#[test]
fn validate_rejects_blank_name_first() {
    let input = ContactInput::new("   ", "123", "456");
    assert_eq!(input.validate().unwrap_err(), ContactValidationError::EmptyName);
}

#[test]
fn validate_requires_ten_ascii_digits() {
    let short = ContactInput::new("Eve", "123456789", "0987654321");
    assert_eq!(
        short.validate().unwrap_err(),
        ContactValidationError::InvalidPhoneNumber("123456789".to_string())
    );

    let dashed = ContactInput::new("Eve", "1234567890", "098-765-4321");
    assert_eq!(
        dashed.validate().unwrap_err(),
        ContactValidationError::InvalidLandline("098-765-4321".to_string())
    );

    // Arabic-Indic digits are not accepted.
    let non_ascii = ContactInput::new("Eve", "١٢٣٤٥٦٧٨٩٠", "0987654321");
    assert!(matches!(
        non_ascii.validate(),
        Err(ContactValidationError::InvalidPhoneNumber(_))
    ));
}

#[test]
fn stored_contact_validates_with_form_rules() {
    let valid = Contact::from_input(Uuid::new_v4(), eve());
    assert!(valid.validate().is_ok());

    let mut edited = valid.clone();
    edited.phone_number = "12345".to_string();
    assert_eq!(
        edited.validate().unwrap_err(),
        ContactValidationError::InvalidPhoneNumber("12345".to_string())
    );

    edited.name = String::new();
    assert_eq!(edited.validate().unwrap_err(), ContactValidationError::EmptyName);
}

#[test]
fn validation_errors_have_readable_messages() {
    let err = ContactValidationError::InvalidLandline("12".to_string());
    assert_eq!(err.to_string(), "landline `12` must be exactly 10 digits");
}

#[test]
fn favorite_helpers_only_touch_the_flag() {
    let contact = Contact::from_input(Uuid::new_v4(), eve().avatar("file:///eve.png"));

    let favorite = contact.toggled_favorite();
    assert!(favorite.is_favorite);
    assert_eq!(favorite.id, contact.id);
    assert_eq!(favorite.avatar, contact.avatar);
    assert_eq!(favorite.toggled_favorite(), contact);
    assert_eq!(contact.with_favorite(false), contact);
}

#[test]
fn into_input_drops_only_the_id() {
    let input = eve().favorite(true);
    let contact = Contact::from_input(Uuid::new_v4(), input.clone());
    assert_eq!(contact.into_input(), input);
}

#[test]
fn contact_serialization_uses_camel_case_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let contact = Contact::from_input(id, eve().favorite(true));

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Eve");
    assert_eq!(json["phoneNumber"], "1234567890");
    assert_eq!(json["landline"], "0987654321");
    assert_eq!(json["isFavorite"], true);
    assert!(json["avatar"].is_null());

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}
