use crate::shared::api_utils::api_url;
use contracts::domain::a002_equipment_registration::{
    EquipmentRegistrationDto, RegistrationResponse,
};
use gloo_net::http::Request;

/// POST /registro_equipo
///
/// `Err` means transport or parse failure; an application rejection comes
/// back as `Ok` with `success: false`.
pub async fn submit_registration(
    dto: &EquipmentRegistrationDto,
) -> Result<RegistrationResponse, String> {
    let response = Request::post(&api_url("/registro_equipo"))
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<RegistrationResponse>()
        .await
        .map_err(|e| format!("Failed to parse response (HTTP {}): {}", response.status(), e))
}
