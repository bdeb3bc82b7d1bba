use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use std::sync::LazyLock;

use crate::error::AdrError;

/// Stand-in hash verified for unknown usernames so both paths cost one Argon2 run.
static UNKNOWN_USER_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("adr-registry unknown user").unwrap_or_default());

/// Hash a password into an Argon2id PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AdrError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC string.
/// A malformed stored hash is an error; a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AdrError> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Check a login attempt. A missing account still pays for one verification.
pub fn verify_login(password: &str, stored: Option<&str>) -> Result<bool, AdrError> {
    match stored {
        Some(stored) => verify_password(password, stored),
        None => {
            let _ = verify_password(password, &UNKNOWN_USER_HASH);
            Ok(false)
        }
    }
}

/// Random password for first start when no admin password is configured.
pub fn generate_password() -> String {
    SaltString::generate(&mut OsRng).as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("s3cret").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("s3cret", &hash).unwrap());
        assert!(!verify_password("s3cret ", &hash).unwrap());
    }

    #[test]
    fn salts_differ() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }

    #[test]
    fn plaintext_is_not_a_hash() {
        assert!(verify_password("1234", "1234").is_err());
    }

    #[test]
    fn unknown_account_never_verifies() {
        assert!(!verify_login("adr-registry unknown user", None).unwrap());
        assert!(UNKNOWN_USER_HASH.starts_with("$argon2id$"));

        let hash = hash_password("pw").unwrap();
        assert!(verify_login("pw", Some(&hash)).unwrap());
        assert!(!verify_login("nope", Some(&hash)).unwrap());
    }

    #[test]
    fn generated_passwords_are_unique() {
        let a = generate_password();
        assert!(a.len() >= 16);
        assert_ne!(a, generate_password());
    }
}
