use crate::application::error::AppResult;
use crate::application::ports::{AuthBackend, IdentityRepository};
use crate::domain::{DisplayName, Email, Identity, NewPassword, UserRole, ValidationErrors};
use serde::Deserialize;

/// Sign-up form as typed by the visitor.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: UserRole,
}

struct ValidRegistration {
    display_name: DisplayName,
    email: Email,
    password: NewPassword,
    role: UserRole,
}

impl RegistrationForm {
    fn validate(self) -> Result<ValidRegistration, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let display_name = errors.collect(DisplayName::new(self.full_name));
        let email = errors.collect(Email::new(self.email));
        let password = errors.collect(NewPassword::new(self.password.clone()));
        if self.confirm_password != self.password {
            errors.add("confirm_password", "Passwords do not match");
        }
        if !self.role.is_self_registrable() {
            errors.add("role", format!("{} accounts cannot be self-registered", self.role));
        }

        match (display_name, email, password) {
            (Some(display_name), Some(email), Some(password)) if errors.is_empty() => {
                Ok(ValidRegistration {
                    display_name,
                    email,
                    password,
                    role: self.role,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Creates the auth user and its profile, then signs out again so the new
/// account goes through the normal login.
///
/// The sign-out also runs when the profile write fails. The auth user then
/// stays behind without a profile and keeps its email taken, so signing up
/// again reports the email as registered until an administrator removes the
/// auth record.
pub async fn execute<A, I>(auth: &A, identities: &I, form: RegistrationForm) -> AppResult<Identity>
where
    A: AuthBackend + ?Sized,
    I: IdentityRepository + ?Sized,
{
    let valid = form.validate()?;

    let user = auth.sign_up(&valid.email, valid.password.expose()).await?;
    let identity = Identity::new(user.id, valid.email, valid.display_name, valid.role);
    let saved = identities.save(&identity).await;

    if let Err(e) = auth.sign_out().await {
        tracing::warn!(identity_id = %identity.id(), error = %e, "sign-out after registration failed");
    }
    if let Err(e) = saved {
        tracing::error!(
            identity_id = %identity.id(),
            error = %e,
            "profile write failed; auth user left without a profile"
        );
        return Err(e.into());
    }

    tracing::info!(identity_id = %identity.id(), role = %identity.role(), "account registered");
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::AppError;
    use crate::application::ports::{AuthError, MockAuthBackend, MockIdentityRepository, StoreError};
    use crate::domain::{AuthUser, IdentityId};

    fn form(role: UserRole) -> RegistrationForm {
        RegistrationForm {
            full_name: "Priya Sharma".into(),
            email: "Priya.Sharma@Campus.edu".into(),
            password: "Campus#2025".into(),
            confirm_password: "Campus#2025".into(),
            role,
        }
    }

    fn accepting_auth() -> MockAuthBackend {
        let mut auth = MockAuthBackend::new();
        auth.expect_sign_up().returning(|email, _| {
            Ok(AuthUser {
                id: IdentityId::new(),
                email: email.clone(),
            })
        });
        auth.expect_sign_out().returning(|| Ok(()));
        auth
    }

    #[tokio::test]
    async fn registers_student_with_active_profile() {
        let auth = accepting_auth();
        let mut identities = MockIdentityRepository::new();
        identities
            .expect_save()
            .withf(|i| i.role() == UserRole::Student && i.is_active())
            .times(1)
            .returning(|_| Ok(()));

        let identity = execute(&auth, &identities, form(UserRole::Student)).await.unwrap();
        assert_eq!(identity.email().as_str(), "priya.sharma@campus.edu");
    }

    #[tokio::test]
    async fn admin_cannot_self_register() {
        let auth = MockAuthBackend::new();
        let identities = MockIdentityRepository::new();
        let err = execute(&auth, &identities, form(UserRole::Admin)).await.unwrap_err();
        match err {
            AppError::Validation(fields) => assert!(fields.contains("role")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_bad_field_is_reported() {
        let auth = MockAuthBackend::new();
        let identities = MockIdentityRepository::new();
        let bad = RegistrationForm {
            full_name: "12".into(),
            email: "not-an-email".into(),
            password: "weak".into(),
            confirm_password: "different".into(),
            role: UserRole::Staff,
        };
        let err = execute(&auth, &identities, bad).await.unwrap_err();
        let AppError::Validation(fields) = err else {
            panic!("expected validation error");
        };
        for field in ["full_name", "email", "password", "confirm_password"] {
            assert!(fields.contains(field), "missing error for {field}");
        }
    }

    #[tokio::test]
    async fn taken_email_is_a_field_error() {
        let mut auth = MockAuthBackend::new();
        auth.expect_sign_up().returning(|_, _| Err(AuthError::EmailTaken));
        let identities = MockIdentityRepository::new();
        let err = execute(&auth, &identities, form(UserRole::Staff)).await.unwrap_err();
        match err {
            AppError::Validation(fields) => assert!(fields.contains("email")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_profile_write_still_signs_out() {
        let mut auth = MockAuthBackend::new();
        auth.expect_sign_up().returning(|email, _| {
            Ok(AuthUser {
                id: IdentityId::new(),
                email: email.clone(),
            })
        });
        auth.expect_sign_out().times(1).returning(|| Ok(()));
        let mut identities = MockIdentityRepository::new();
        identities
            .expect_save()
            .returning(|_| Err(StoreError::Unavailable("net".into())));

        let err = execute(&auth, &identities, form(UserRole::Student)).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
