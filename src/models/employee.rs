use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const USER_ID_MIN: u32 = 100_000;
pub const USER_ID_MAX: u32 = 9_999_999;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub userid: u32,
}

#[derive(Deserialize, Validate, Debug)]
#[serde(deny_unknown_fields)]
pub struct NewEmployee {
    #[validate(length(min = 2, max = 30), custom = "validate_letters_dash")]
    pub first_name: String,
    #[validate(length(min = 2, max = 30), custom = "validate_letters_dash")]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 2, max = 45), custom = "validate_letters_dash")]
    pub position: String,
}

// partial-update body; position has a stricter minimum than on create
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct EmployeeUpdate {
    #[validate(length(min = 2, max = 30), custom = "validate_letters_dash")]
    pub first_name: Option<String>,
    #[validate(length(min = 2, max = 30), custom = "validate_letters_dash")]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 45), custom = "validate_letters_dash")]
    pub position: Option<String>,
}

fn validate_letters_dash(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        Ok(())
    } else {
        Err(ValidationError::new("must contain only letters and dashes"))
    }
}

impl NewEmployee {
    pub fn trimmed(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.position = self.position.trim().to_string();
        self
    }
}

impl EmployeeUpdate {
    pub fn trimmed(mut self) -> Self {
        self.first_name = self.first_name.map(|v| v.trim().to_string());
        self.last_name = self.last_name.map(|v| v.trim().to_string());
        self.email = self.email.map(|v| v.trim().to_string());
        self.position = self.position.map(|v| v.trim().to_string());
        self
    }
}
