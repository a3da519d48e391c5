use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialUser {
    pub name: String,
    pub email: String,
    pub followers: Vec<String>,
    pub following: Vec<String>,
}

impl SocialUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            followers: Vec::new(),
            following: Vec::new(),
        }
    }
}
