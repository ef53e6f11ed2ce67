use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rol asignado en el registro; inmutable durante la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    Mentor,
    Lecturer,
    Company,
    Mentee,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Mentor,
        Role::Lecturer,
        Role::Company,
        Role::Mentee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mentor => "mentor",
            Role::Lecturer => "lecturer",
            Role::Company => "company",
            Role::Mentee => "mentee",
        }
    }

    /// Parseo tolerante: ignora espacios y mayúsculas ("Mentor" == "mentor")
    pub fn parse(raw: &str) -> Option<Role> {
        let normalized = raw.trim().to_ascii_lowercase();
        Role::ALL.into_iter().find(|role| role.as_str() == normalized)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub date_registered: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Cambios parciales de perfil; el rol no se puede modificar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub education_level: Option<String>,
}

impl User {
    pub fn apply_profile_update(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(education_level) = update.education_level {
            self.education_level = Some(education_level);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err("Please fill in all fields".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub access: String,
    pub refresh: String,
    pub user: User,
}

impl LoginResponse {
    pub fn into_session(self) -> PersistedSession {
        PersistedSession {
            user: self.user,
            tokens: AuthTokens {
                access: self.access,
                refresh: self.refresh,
            },
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub location: String,
    pub role: Role,
    pub education_level: String,
}

/// Campos del formulario de alta tal como los escribe el usuario
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub location: String,
    pub role: String,
    pub education_level: String,
}

impl RegisterForm {
    pub fn into_request(self) -> Result<RegisterRequest, String> {
        let required = [&self.name, &self.email, &self.password, &self.role, &self.education_level];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err("Please fill in all required fields".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if self.password.chars().count() < 6 {
            return Err("Password must be at least 6 characters long".to_string());
        }
        let role = Role::parse(&self.role).ok_or_else(|| UnknownRole(self.role.clone()).to_string())?;

        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            role,
            education_level: self.education_level,
        })
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

/// Cuerpo de error del backend (`{detail}` o `{message}`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.detail
            .or(self.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Sesión tal como se guarda en localStorage y se recupera al arrancar
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PersistedSession {
    pub user: User,
    pub tokens: AuthTokens,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("Mentor", Role::Mentor)]
    #[case(" LECTURER ", Role::Lecturer)]
    #[case("company", Role::Company)]
    #[case("mentee", Role::Mentee)]
    fn role_parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::parse(raw), Some(expected));
    }

    #[test]
    fn unknown_roles_are_rejected() {
        assert_eq!(Role::parse("superuser"), None);
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn login_response_with_capitalized_role_deserializes() {
        let json = r#"{
            "message": "ok",
            "access": "a",
            "refresh": "r",
            "user": {"id": 7, "name": "Ada", "email": "ada@example.org", "role": "Mentor"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.role, Role::Mentor);
        assert!(response.user.is_active);

        let session = response.into_session();
        assert_eq!(session.tokens.access, "a");
        assert_eq!(session.tokens.refresh, "r");
    }

    #[test]
    fn login_response_with_unknown_role_fails() {
        let json = r#"{
            "access": "a",
            "refresh": "r",
            "user": {"id": 7, "name": "Ada", "email": "ada@example.org", "role": "guest"}
        }"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Lecturer).unwrap(), "\"lecturer\"");
    }

    #[test]
    fn empty_credentials_fail_validation() {
        assert!(LoginRequest::new("  ", "secret").validate().is_err());
        assert!(LoginRequest::new("ada@example.org", "").validate().is_err());
        assert!(LoginRequest::new("ada@example.org", "secret").validate().is_ok());
    }

    #[test]
    fn error_body_prefers_detail() {
        let body = ErrorBody {
            detail: Some("Invalid password".to_string()),
            message: Some("Bad request".to_string()),
        };
        assert_eq!(body.into_message().as_deref(), Some("Invalid password"));
        assert_eq!(ErrorBody::default().into_message(), None);
    }

    #[test]
    fn profile_update_keeps_role() {
        let mut user = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            role: Role::Mentee,
            phone: None,
            location: None,
            education_level: None,
            is_active: true,
            date_registered: None,
        };
        user.apply_profile_update(ProfileUpdate {
            name: Some("Ada L.".to_string()),
            location: Some("Lagos".to_string()),
            ..ProfileUpdate::default()
        });
        assert_eq!(user.name, "Ada L.");
        assert_eq!(user.location.as_deref(), Some("Lagos"));
        assert_eq!(user.role, Role::Mentee);
    }

    fn filled_form() -> RegisterForm {
        RegisterForm {
            name: " Grace Hopper ".to_string(),
            email: "grace@example.org ".to_string(),
            password: "cobol59".to_string(),
            confirm_password: "cobol59".to_string(),
            phone: String::new(),
            location: "Nairobi".to_string(),
            role: "Mentor".to_string(),
            education_level: "master".to_string(),
        }
    }

    #[test]
    fn complete_register_form_becomes_request() {
        let request = filled_form().into_request().unwrap();
        assert_eq!(request.name, "Grace Hopper");
        assert_eq!(request.email, "grace@example.org");
        assert_eq!(request.role, Role::Mentor);
        assert_eq!(request.phone, "");
    }

    #[rstest]
    #[case(RegisterForm { education_level: String::new(), ..filled_form() }, "Please fill in all required fields")]
    #[case(RegisterForm { role: " ".to_string(), ..filled_form() }, "Please fill in all required fields")]
    #[case(RegisterForm { confirm_password: "cobol60".to_string(), ..filled_form() }, "Passwords do not match")]
    #[case(
        RegisterForm { password: "abc".to_string(), confirm_password: "abc".to_string(), ..filled_form() },
        "Password must be at least 6 characters long"
    )]
    #[case(RegisterForm { role: "expert".to_string(), ..filled_form() }, "Unknown role: expert")]
    fn invalid_register_forms(#[case] form: RegisterForm, #[case] expected: &str) {
        assert_eq!(form.into_request().unwrap_err(), expected);
    }
}
