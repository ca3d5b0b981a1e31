// Session value and screen-graph routing.
//
// `Session::Authenticated` can only be built by `resolve`, and `resolve` only
// ever takes the role from the stored profile. Nothing the login form sends can
// reach the role.

use crate::domain::entities::Identity;
use crate::domain::value_objects::{Email, IdentityId, UserRole};
use serde::Serialize;

/// What the auth backend reports about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub id: IdentityId,
    pub email: Email,
}

/// Raw auth state handed to `resolve`: the auth user (if any) together with
/// the profile record looked up for it (if any).
#[derive(Debug, Clone, Default)]
pub struct RawAuthState {
    pub user: Option<AuthUser>,
    pub profile: Option<Identity>,
}

impl RawAuthState {
    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// The signed-in branch. Owns the current profile context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedSession {
    identity: Identity,
    role: UserRole,
}

impl AuthenticatedSession {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(AuthenticatedSession),
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated(auth) => Some(auth.identity()),
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated(auth) => Some(auth.role()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Why `resolve` fell back to `Unauthenticated` although a user was present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveFallback {
    MissingProfile,
    ProfileMismatch,
}

/// Pure projection of raw auth state onto a `Session`.
pub fn resolve(raw: RawAuthState) -> Session {
    resolve_explained(raw).0
}

/// `resolve`, also reporting why a present user was not let in.
pub fn resolve_explained(raw: RawAuthState) -> (Session, Option<ResolveFallback>) {
    let Some(user) = raw.user else {
        return (Session::Unauthenticated, None);
    };
    match raw.profile {
        None => (Session::Unauthenticated, Some(ResolveFallback::MissingProfile)),
        Some(profile) if profile.id() != &user.id => {
            (Session::Unauthenticated, Some(ResolveFallback::ProfileMismatch))
        }
        Some(profile) => {
            let role = profile.role();
            (
                Session::Authenticated(AuthenticatedSession { identity: profile, role }),
                None,
            )
        }
    }
}

/// Root of each role's screen set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScreenGraphId {
    AuthFlow,
    StudentFlow,
    StaffFlow,
    AdminFlow,
}

pub fn select_root_screen_graph(session: &Session) -> ScreenGraphId {
    match session.role() {
        None => ScreenGraphId::AuthFlow,
        Some(UserRole::Student) => ScreenGraphId::StudentFlow,
        Some(UserRole::Staff) => ScreenGraphId::StaffFlow,
        Some(UserRole::Admin) => ScreenGraphId::AdminFlow,
    }
}
