use super::*;

#[test]
fn validate_login_trims_identity() {
    assert_eq!(
        validate_login(Role::Admin, "  admin@lab.edu  ", "secret"),
        Ok(("admin@lab.edu".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_keeps_password_as_typed() {
    assert_eq!(
        validate_login(Role::Member, "jane", " pass word "),
        Ok(("jane".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login(Role::Admin, "   ", "secret"), Err("Please enter both email and password."));
    assert_eq!(validate_login(Role::Admin, "a@b.com", ""), Err("Please enter both email and password."));
    assert_eq!(validate_login(Role::Member, "jane", "   "), Err("Please enter both username and password."));
}
