use contracts::domain::location::LocationForm;

use crate::shared::api_utils::post_command;

pub use crate::shared::locations::fetch_locations;

pub async fn create_location(form: &LocationForm) -> Result<(), String> {
    post_command("/location/add_location.php", &form.to_payload()).await
}

pub async fn edit_location(form: &LocationForm) -> Result<(), String> {
    post_command("/location/edit_location.php", &form.to_payload()).await
}
