use application::{password::PasswordHasherError, PasswordHasher};
use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

#[derive(Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: Option<u32>) -> Self {
        Self {
            cost: cost.unwrap_or(DEFAULT_COST),
        }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordHasherError> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || hash(plaintext, cost))
            .await
            .map_err(|err| PasswordHasherError::hash_error(err.to_string()))
            .and_then(|res| res.map_err(|err| PasswordHasherError::hash_error(err.to_string())))
    }

    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, PasswordHasherError> {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();
        tokio::task::spawn_blocking(move || verify(plaintext, &hashed))
            .await
            .map_err(|err| PasswordHasherError::verify_error(err.to_string()))
            .and_then(|res| res.map_err(|err| PasswordHasherError::verify_error(err.to_string())))
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(Some(DEFAULT_COST))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_roundtrip() {
        let hasher = BcryptPasswordHasher::new(Some(4));
        let hashed = hasher.hash("Bijin@123").await.unwrap();

        assert_ne!(hashed, "Bijin@123");
        assert!(hasher.verify("Bijin@123", &hashed).await.unwrap());
        assert!(!hasher.verify("wrongpw", &hashed).await.unwrap());
    }
}
