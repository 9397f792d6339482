use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

#[derive(Debug)]
pub struct CredentialError;

// Hashing is CPU-bound; keep it off the async workers.
pub async fn hash_password(password: &str) -> Result<String, CredentialError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).map_err(|_| CredentialError)?,
        );
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| CredentialError)?
            .to_string();
        Ok(hash)
    })
    .await
    .map_err(|_| CredentialError)?
}

/// Mismatch is `Ok(false)`; only a malformed hash or runtime failure errors.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, CredentialError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(|_| CredentialError)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    })
    .await
    .map_err(|_| CredentialError)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_matching_password() {
        let hash = hash_password("S3cret!pw").await.unwrap();
        assert!(verify_password("S3cret!pw", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_wrong_password() {
        let hash = hash_password("S3cret!pw").await.unwrap();
        assert!(!verify_password("other", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn salts_differ_between_hashes() {
        let first = hash_password("same").await.unwrap();
        let second = hash_password("same").await.unwrap();
        assert_ne!(first, second);
    }
}
