use crate::prelude::Result;

/// bcrypt work factor for newly stored hashes.
pub const HASH_COST: u32 = 10;

/// Hashes on the blocking pool; the result embeds its own salt and cost.
pub async fn hash(password: &str) -> Result<String> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST)).await??;
    Ok(hashed)
}

/// Checks a plaintext password against a stored hash.
pub async fn verify(password: &str, hashed: &str) -> Result<bool> {
    let password = password.to_string();
    let hashed = hashed.to_string();
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::{hash, verify};
    use crate::prelude::{Error, Result};

    #[traced_test]
    #[tokio::test]
    async fn test_hash_never_stores_plaintext() -> Result<()> {
        let hashed = hash("secret").await?;
        assert_ne!(hashed, "secret");
        assert!(hashed.starts_with("$2b$10$"));
        assert!(verify("secret", &hashed).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_hash_is_salted() -> Result<()> {
        let a = hash("secret").await?;
        let b = hash("secret").await?;
        assert_ne!(a, b);
        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_verify() -> Result<()> {
        let hashed = hash("secret").await?;
        assert!(!verify("Secret", &hashed).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let res = verify("secret", "not-a-bcrypt-hash").await;
        assert!(matches!(res, Err(Error::Hash(_))));
    }
}
