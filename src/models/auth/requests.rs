use serde::Deserialize;

// GET /users?email=&password=
#[derive(Debug, Clone, Deserialize)]
pub struct LoginQuery {
    pub email: Option<String>,
    pub password: Option<String>,
}

// GET /subjects?name=
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectQuery {
    pub name: Option<String>,
}
