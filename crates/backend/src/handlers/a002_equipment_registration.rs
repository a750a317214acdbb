use axum::extract::rejection::JsonRejection;
use axum::Json;
use contracts::domain::a002_equipment_registration::{
    EquipmentRegistrationDto, RegistrationResponse,
};

use crate::domain::a002_equipment_registration::service::{self, RegistrationError};

/// POST /registro_equipo
///
/// Always answers 200 with `{ success, message }`; rejections are reported in the body,
/// including a body that is not a registration at all.
pub async fn register(
    payload: Result<Json<EquipmentRegistrationDto>, JsonRejection>,
) -> Json<RegistrationResponse> {
    let dto = match payload {
        Ok(Json(dto)) => dto,
        Err(rejection) => {
            tracing::warn!("Malformed registration payload: {}", rejection.body_text());
            return Json(RegistrationResponse::fail(format!(
                "Error: {}",
                rejection.body_text()
            )));
        }
    };

    match service::register(dto).await {
        Ok(receipt) => Json(RegistrationResponse::ok(format!(
            "Equipo registrado correctamente ({} productos)",
            receipt.lines
        ))),
        Err(RegistrationError::Validation(msg)) => {
            tracing::warn!("Registration rejected: {}", msg);
            Json(RegistrationResponse::fail(msg))
        }
        Err(e) => {
            tracing::error!("Failed to store registration: {:#}", e);
            Json(RegistrationResponse::fail(e.to_string()))
        }
    }
}
