use serde::{Deserialize, Serialize};

/// How the backend should sign in to ESPN on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthMethod {
    Cookies { espn_s2: String, swid: String },
    Login { username: String, password: String },
}

impl AuthMethod {
    pub fn label(&self) -> &'static str {
        match self {
            AuthMethod::Cookies { .. } => "ESPN cookies",
            AuthMethod::Login { .. } => "ESPN login",
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            AuthMethod::Cookies { espn_s2, swid } => {
                !espn_s2.trim().is_empty() && !swid.trim().is_empty()
            }
            AuthMethod::Login { username, password } => {
                !username.trim().is_empty() && !password.is_empty()
            }
        }
    }
}

/// Body of `POST /initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub league_id: i64,
    pub year: i32,
    #[serde(flatten)]
    pub auth: AuthMethod,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        self.auth.is_complete()
    }
}
