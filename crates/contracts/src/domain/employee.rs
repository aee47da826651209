use serde::{Deserialize, Serialize};

use crate::domain::location::Location;

/// Roles offered in the employee form. `Manager` is displayed as
/// "Area Manager" but stored under its backend name.
pub const ROLE_CHOICES: [(&str, &str); 2] =
    [("Manager", "Area Manager"), ("Supervisor", "Supervisor")];

pub fn display_role(role: &str) -> &str {
    if role == "Manager" {
        "Area Manager"
    } else {
        role
    }
}

/// Office staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Employee_Id", default)]
    pub employee_id: i64,
    #[serde(rename = "EmpId", default)]
    pub emp_id: String,
    #[serde(rename = "Login_Id", default)]
    pub login_id: String,
    #[serde(rename = "Full_Name", default)]
    pub full_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone_Number", default)]
    pub phone_number: String,
    #[serde(rename = "Role", default)]
    pub role: String,
    /// Comma-joined location ids.
    #[serde(rename = "LocationId", default)]
    pub location_id: String,
}

impl Employee {
    pub fn location_ids(&self) -> Vec<String> {
        self.location_id
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .collect()
    }

    /// Abbreviations of the employee's locations, or "N/A" when none resolve.
    pub fn location_labels(&self, locations: &[Location]) -> String {
        let ids = self.location_ids();
        let labels: Vec<&str> = locations
            .iter()
            .filter(|loc| ids.iter().any(|id| id == &loc.id.to_string()))
            .map(|loc| loc.abbreviation.as_str())
            .collect();
        if labels.is_empty() {
            "N/A".to_string()
        } else {
            labels.join(", ")
        }
    }

    pub fn matches_name(&self, term: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

/// Create/edit form state. The employee id is immutable once set: the edit
/// dialog disables the input, and validation here treats it as required in
/// both modes.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub emp_id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: String,
    pub login_id: String,
    pub location_ids: Vec<String>,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            emp_id: employee.emp_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            password: String::new(),
            role: employee.role.clone(),
            login_id: employee.login_id.clone(),
            location_ids: employee.location_ids(),
        }
    }

    /// Login id and password are required only when creating; everything
    /// else is required in both modes.
    pub fn validate(&self, is_editing: bool) -> Result<(), String> {
        let required_missing = self.emp_id.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.role.trim().is_empty()
            || self.location_ids.is_empty();
        let create_missing =
            !is_editing && (self.login_id.trim().is_empty() || self.password.trim().is_empty());
        if required_missing || create_missing {
            return Err("Please fill in all required fields.".to_string());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "EmpId": self.emp_id,
            "full_name": self.full_name,
            "email": self.email,
            "phone_number": self.phone_number,
            "password": self.password,
            "role": self.role,
            "login_id": self.login_id,
            "location_id": self.location_ids.join(","),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            employee_id: 5,
            emp_id: "EMP042".to_string(),
            login_id: "ravi.k".to_string(),
            full_name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            role: "Manager".to_string(),
            location_id: "7, 12".to_string(),
        }
    }

    fn locations() -> Vec<Location> {
        vec![
            Location {
                id: 7,
                abbreviation: "PNQ".to_string(),
                address: String::new(),
                latlong: String::new(),
                roles: String::new(),
            },
            Location {
                id: 12,
                abbreviation: "BLR".to_string(),
                address: String::new(),
                latlong: String::new(),
                roles: String::new(),
            },
        ]
    }

    #[test]
    fn manager_displays_as_area_manager() {
        assert_eq!(display_role("Manager"), "Area Manager");
        assert_eq!(display_role("Supervisor"), "Supervisor");
    }

    #[test]
    fn location_ids_split_and_resolve() {
        let e = employee();
        assert_eq!(e.location_ids(), vec!["7", "12"]);
        assert_eq!(e.location_labels(&locations()), "PNQ, BLR");

        let mut unknown = employee();
        unknown.location_id = "99".to_string();
        assert_eq!(unknown.location_labels(&locations()), "N/A");
    }

    #[test]
    fn create_requires_credentials_edit_does_not() {
        let mut form = EmployeeForm::from_employee(&employee());
        // No password set after from_employee.
        assert!(form.validate(true).is_ok());
        assert!(form.validate(false).is_err());

        form.password = "secret".to_string();
        assert!(form.validate(false).is_ok());
    }

    #[test]
    fn required_fields_block_submission_in_both_modes() {
        let mut form = EmployeeForm::from_employee(&employee());
        form.location_ids.clear();
        assert!(form.validate(true).is_err());

        let mut form = EmployeeForm::from_employee(&employee());
        form.email.clear();
        assert!(form.validate(true).is_err());
    }

    #[test]
    fn payload_joins_location_ids() {
        let form = EmployeeForm::from_employee(&employee());
        let payload = form.to_payload();
        assert_eq!(payload["location_id"], "7,12");
        assert_eq!(payload["EmpId"], "EMP042");
    }

    #[test]
    fn name_search_is_case_insensitive() {
        assert!(employee().matches_name("ravi"));
        assert!(employee().matches_name("KUMAR"));
        assert!(!employee().matches_name("anita"));
    }
}
