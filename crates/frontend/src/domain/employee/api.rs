use contracts::domain::employee::{Employee, EmployeeForm};
use contracts::shared::api::parse_envelope;
use gloo_net::http::Request;
use serde_json::json;

use crate::shared::api_utils::{api_base, get_envelope, post_command};

pub async fn fetch_employees() -> Result<Vec<Employee>, String> {
    Ok(get_envelope::<Vec<Employee>>("/employee/get_employee.php")
        .await?
        .data)
}

pub async fn create_employee(form: &EmployeeForm) -> Result<(), String> {
    post_command("/employee/add_employee.php", &form.to_payload()).await
}

/// Edits go over PUT; the employee id in the payload identifies the record.
pub async fn edit_employee(form: &EmployeeForm) -> Result<(), String> {
    let response = Request::put(&format!("{}/employee/edit_employee.php", api_base()))
        .json(&form.to_payload())
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_envelope::<Option<serde_json::Value>>(&body)?;
    Ok(())
}

/// Clears the device binding so the employee can register a new phone.
pub async fn remove_device(employee_id: i64) -> Result<(), String> {
    post_command(
        "/employee/remove_device.php",
        &json!({ "employee_id": employee_id }),
    )
    .await
}
