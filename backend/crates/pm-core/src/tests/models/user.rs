use crate::User;

use uuid::Uuid;

fn user_named(name: Option<&str>) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.map(String::from),
        email: None,
        image: None,
    }
}

#[test]
fn test_initials_first_and_last_name() {
    assert_eq!(user_named(Some("ada king lovelace")).initials(), "AL");
}

#[test]
fn test_initials_single_name() {
    assert_eq!(user_named(Some("grace")).initials(), "G");
}

#[test]
fn test_initials_without_name() {
    assert_eq!(user_named(None).initials(), "?");
    assert_eq!(user_named(Some("   ")).initials(), "?");
}
