use crate::Identity;

#[test]
fn test_identity_new() {
    let identity = Identity::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "$argon2id$stub".to_string(),
    );

    assert_eq!(identity.username, "alice");
    assert_eq!(identity.email, "alice@example.com");
    assert_eq!(identity.password_digest, "$argon2id$stub");
}

#[test]
fn test_identity_ids_are_unique() {
    let a = Identity::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "digest".to_string(),
    );
    let b = Identity::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "digest".to_string(),
    );

    assert_ne!(a.id, b.id);
}
