use argon2::{
    password_hash::{PasswordHash, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use crate::config::Argon2Config;

/// Argon2id password hasher
///
/// Every stored `password_hash` goes through this type, so the credential
/// store never holds a plaintext password. Each hash gets a fresh salt from
/// the OS RNG and is encoded as a PHC string:
/// `$argon2id$v=19$m=65536,t=3,p=4$<salt>$<hash>`.
///
/// # Example
/// ```no_run
/// use hardened_api::config::Argon2Config;
/// use hardened_api::security::PasswordHasher;
///
/// let hasher = PasswordHasher::from_config(&Argon2Config::default()).unwrap();
///
/// let hash = hasher.hash("my_secure_password").unwrap();
/// assert!(hasher.verify("my_secure_password", &hash).unwrap());
/// ```
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher from the configured Argon2 parameters
    ///
    /// # Errors
    /// Returns an error if the parameters are out of the ranges accepted by
    /// Argon2 (e.g., memory cost below `8 * parallelism`).
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &Argon2Config) -> Result<Self, argon2::password_hash::Error> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            Some(config.hash_length as usize),
        )?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        Ok(Self { argon2 })
    }

    /// Hash a password with a freshly generated salt
    #[tracing::instrument(skip(self, password))]
    pub fn hash(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a password against a PHC hash string
    ///
    /// * `Ok(true)` - password matches
    /// * `Ok(false)` - password does not match
    /// * `Err(_)` - the hash string is malformed
    #[tracing::instrument(skip(self, password, hash))]
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
