use tasknote_core::{hash_password, verify_password};

#[test]
fn test_hash_password_is_hex_sha256() {
    let hash = hash_password("testpassword123");

    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_ne!(hash, "testpassword123");
}

#[test]
fn test_hash_password_is_deterministic() {
    assert_eq!(hash_password("same input"), hash_password("same input"));
}

#[test]
fn test_hash_password_empty() {
    assert_eq!(
        hash_password(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_verify_password_correct() {
    let hash = hash_password("correctpassword");
    assert!(verify_password("correctpassword", &hash));
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("correctpassword");
    assert!(!verify_password("wrongpassword", &hash));
    assert!(!verify_password("Correctpassword", &hash));
}

#[test]
fn test_verify_password_unicode() {
    let hash = hash_password("пароль密码🔒");
    assert!(verify_password("пароль密码🔒", &hash));
    assert!(!verify_password("пароль密码", &hash));
}
