use super::*;

fn fields(json: serde_json::Value) -> ErrorPayload {
    ErrorPayload::from_body(&json.to_string(), "x")
}

#[test]
fn field_error_finds_matching_key() {
    let err = fields(serde_json::json!({ "username": ["already taken"], "email": ["invalid"] }));
    assert_eq!(field_error(Some(&err), "username").as_deref(), Some("already taken"));
    assert_eq!(field_error(Some(&err), "password"), None);
    assert_eq!(field_error(None, "username"), None);
}

#[test]
fn banner_shows_plain_messages() {
    let err = ErrorPayload::from("Passwords do not match");
    assert_eq!(banner_error(Some(&err)).as_deref(), Some("Passwords do not match"));
}

#[test]
fn banner_shows_only_keys_without_inputs() {
    let err = fields(serde_json::json!({
        "username": ["already taken"],
        "non_field_errors": ["Try again later."]
    }));
    assert_eq!(banner_error(Some(&err)).as_deref(), Some("non_field_errors: Try again later."));

    let inline_only = fields(serde_json::json!({ "email": ["invalid"] }));
    assert_eq!(banner_error(Some(&inline_only)), None);
}

#[test]
fn field_accessors_cover_every_input() {
    let mut form = RegisterRequest::default();
    for field in FORM_FIELDS {
        write_field(&mut form, field, format!("{field}-value"));
    }
    for field in FORM_FIELDS {
        assert_eq!(read_field(&form, field), format!("{field}-value"));
    }
    assert_eq!(form.password2, "password2-value");
}
