use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();

// Hash of an arbitrary throwaway password, verified against when the
// email is unknown so login timing does not reveal account existence.
const DUMMY_HASH: &str = "$argon2id$v=19$m=65536,t=3,p=4$dW5rbm93bl9zYWx0X2R1bW15$E2LvWPx3FxvDaJxEMpLLBfWbLkPXfYHrF8z9CGCX3eI";

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(
                64 * 1024, // 64MB Memory (m)
                3,         // 3 Iterations (t)
                4,         // 4 Parallelism lanes (p)
                None,      // Default hash length (32 bytes)
            )
            .expect("Invalid Argon2 parameters");

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = Self::engine().verify_password(password.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Login-path verification. When the account does not exist, a
    /// dummy hash is verified instead so both branches cost the same.
    pub fn verify_login(password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => Self::verify_password(password, hash).unwrap_or(false),
            None => {
                let _ = Self::verify_password(password, DUMMY_HASH);
                false
            }
        }
    }
}

/// The auth provider rejects passwords shorter than this as weak.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn password_is_weak(password: &str) -> bool {
    password.len() < MIN_PASSWORD_LEN
}

/// Basic shape check, performed before any hashing or network call.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }

    // Domain must have at least one dot
    if !domain.contains('.') {
        return false;
    }

    true
}

/// Shared account behind "Login as a Guest", seeded by the first
/// migration. Its placeholder hash never verifies, so the only way in
/// is the guest route.
pub const GUEST_EMAIL: &str = "guest@briefshelf.app";
