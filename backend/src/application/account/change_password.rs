use crate::application::error::AppResult;
use crate::application::ports::AuthBackend;
use crate::domain::{NewPassword, ValidationErrors};

/// Changes the signed-in user's password.
pub async fn execute<A: AuthBackend + ?Sized>(
    auth: &A,
    new_password: &str,
    confirm_password: &str,
) -> AppResult<()> {
    let mut errors = ValidationErrors::new();
    let password = errors.collect(NewPassword::new(new_password));
    if new_password != confirm_password {
        errors.add("confirm_password", "Passwords do not match");
    }
    errors.into_result()?;

    if let Some(password) = password {
        auth.update_password(password.expose()).await?;
        tracing::info!("password changed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::AppError;
    use crate::application::ports::{AuthError, MockAuthBackend};

    #[tokio::test]
    async fn strong_matching_password_is_sent() {
        let mut auth = MockAuthBackend::new();
        auth.expect_update_password()
            .withf(|p| p == "Campus#2026")
            .times(1)
            .returning(|_| Ok(()));
        execute(&auth, "Campus#2026", "Campus#2026").await.unwrap();
    }

    #[tokio::test]
    async fn mismatch_is_caught_locally() {
        let auth = MockAuthBackend::new();
        let err = execute(&auth, "Campus#2026", "Campus#2027").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(f) if f.contains("confirm_password")));
    }

    #[tokio::test]
    async fn signed_out_user_cannot_change_password() {
        let mut auth = MockAuthBackend::new();
        auth.expect_update_password()
            .returning(|_| Err(AuthError::NotSignedIn));
        let err = execute(&auth, "Campus#2026", "Campus#2026").await.unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed(_)));
    }
}
