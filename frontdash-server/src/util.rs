//! Shared utility functions for frontdash-server

pub fn generate_code() -> String {
    use rand::Rng;
    let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    code.to_string()
}

/// Temporary passwords carry the `temp-` prefix so accounts created with one
/// are flagged for a forced password change on first login.
pub const TEMP_PASSWORD_PREFIX: &str = "temp-";

pub fn generate_temp_password() -> String {
    format!("{}{}", TEMP_PASSWORD_PREFIX, generate_code())
}

pub fn is_temp_password(password: &str) -> bool {
    password.starts_with(TEMP_PASSWORD_PREFIX)
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_password_shape() {
        let pw = generate_temp_password();
        assert!(is_temp_password(&pw));
        assert_eq!(pw.len(), TEMP_PASSWORD_PREFIX.len() + 6);
    }

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("secret123", "not-a-hash"));
    }
}
