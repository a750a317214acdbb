use chrono::{Local, NaiveDate};
use contracts::domain::a002_equipment_registration::EquipmentRegistrationDto;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::a003_order::repository::{self, NewOrderLine};

/// Why a registration was not stored
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Validation(String),

    #[error("Error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Outcome of a stored registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub registration_id: Uuid,
    pub lines: usize,
}

/// Validate and store an equipment request dated today
pub async fn register(
    dto: EquipmentRegistrationDto,
) -> Result<RegistrationReceipt, RegistrationError> {
    register_on(dto, Local::now().date_naive()).await
}

/// Validate and store an equipment request; each product line becomes one order.
/// All lines are written or none is.
pub async fn register_on(
    dto: EquipmentRegistrationDto,
    fecha: NaiveDate,
) -> Result<RegistrationReceipt, RegistrationError> {
    dto.validate().map_err(RegistrationError::Validation)?;

    let lines: Vec<NewOrderLine> = dto
        .productos
        .into_iter()
        .map(|p| NewOrderLine {
            tipo_producto: p.tipo_producto,
            talla: p.talla,
            color: p.color,
            cantidad: p.cantidad,
        })
        .collect();

    let registration_id = Uuid::new_v4();
    let nombre = dto.nombre_solicitante.trim();
    let stored = repository::insert_registration(registration_id, fecha, nombre, &lines).await?;

    tracing::info!(
        %registration_id,
        lines = stored,
        "Equipment registration stored for '{}'",
        nombre
    );

    Ok(RegistrationReceipt {
        registration_id,
        lines: stored,
    })
}
