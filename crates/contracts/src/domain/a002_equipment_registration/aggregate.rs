use crate::domain::a001_product_catalog::ProductType;
use serde::{Deserialize, Serialize};

/// Largest quantity a single line may request; orders store it as a 32-bit integer
pub const MAX_CANTIDAD: u32 = i32::MAX as u32;

/// One requested item of an equipment registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLine {
    pub tipo_producto: String,
    pub talla: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub cantidad: u32,
}

/// Body of `POST /registro_equipo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRegistrationDto {
    pub nombre_solicitante: String,
    #[serde(default)]
    pub productos: Vec<ProductLine>,
}

impl EquipmentRegistrationDto {
    /// Server-side check of a submitted registration against the catalog
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre_solicitante.trim().is_empty() {
            return Err("El nombre del solicitante es obligatorio".into());
        }
        if self.productos.is_empty() {
            return Err("Debe agregar al menos un producto".into());
        }

        for (idx, line) in self.productos.iter().enumerate() {
            let n = idx + 1;
            let product = ProductType::from_code(&line.tipo_producto).ok_or_else(|| {
                format!("Producto {}: tipo desconocido '{}'", n, line.tipo_producto)
            })?;
            if !product.accepts_size(&line.talla) {
                return Err(format!(
                    "Producto {}: talla '{}' no válida para {}",
                    n,
                    line.talla,
                    product.display_name()
                ));
            }
            match (&line.color, product.has_colors()) {
                (Some(color), true) if !product.accepts_color(color) => {
                    return Err(format!(
                        "Producto {}: color '{}' no válido para {}",
                        n,
                        color,
                        product.display_name()
                    ));
                }
                (Some(_), false) => {
                    return Err(format!(
                        "Producto {}: {} no admite color",
                        n,
                        product.display_name()
                    ));
                }
                _ => {}
            }
            if line.cantidad == 0 {
                return Err(format!("Producto {}: la cantidad debe ser mayor a cero", n));
            }
            if line.cantidad > MAX_CANTIDAD {
                return Err(format!(
                    "Producto {}: la cantidad no puede ser mayor a {}",
                    n, MAX_CANTIDAD
                ));
            }
        }

        Ok(())
    }
}

/// Server answer to a registration: `{ success, message }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
}

impl RegistrationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(tipo: &str, talla: &str, color: Option<&str>, cantidad: u32) -> ProductLine {
        ProductLine {
            tipo_producto: tipo.into(),
            talla: talla.into(),
            color: color.map(Into::into),
            cantidad,
        }
    }

    fn dto(productos: Vec<ProductLine>) -> EquipmentRegistrationDto {
        EquipmentRegistrationDto {
            nombre_solicitante: "Ana López".into(),
            productos,
        }
    }

    #[test]
    fn test_valid_registration() {
        let d = dto(vec![
            line("espinillera", "MD", Some("azul"), 2),
            line("mica", "Unitalla", None, 1),
            line("espinillera", "CH", None, 1),
        ]);
        assert_eq!(d.validate(), Ok(()));
    }

    #[test]
    fn test_requires_requester_and_products() {
        let mut d = dto(vec![line("mica", "Unitalla", None, 1)]);
        d.nombre_solicitante = "   ".into();
        assert!(d.validate().is_err());
        assert!(dto(vec![]).validate().is_err());
    }

    #[test]
    fn test_rejects_values_outside_catalog() {
        assert!(dto(vec![line("casco", "CH", None, 1)]).validate().is_err());
        assert!(dto(vec![line("uniforme", "LG", None, 1)]).validate().is_err());
        assert!(dto(vec![line("espinillera", "", None, 1)]).validate().is_err());
        assert!(dto(vec![line("espinillera", "CH", Some("rojo"), 1)])
            .validate()
            .is_err());
        assert!(dto(vec![line("codera", "CH", Some("azul"), 1)])
            .validate()
            .is_err());
        assert!(dto(vec![line("careta", "Talla Única", None, 0)])
            .validate()
            .is_err());
    }

    #[test]
    fn test_quantity_upper_bound() {
        assert_eq!(
            dto(vec![line("mica", "Unitalla", None, MAX_CANTIDAD)]).validate(),
            Ok(())
        );
        let err = dto(vec![line("mica", "Unitalla", None, 3_000_000_000)])
            .validate()
            .unwrap_err();
        assert!(err.contains("no puede ser mayor"), "{}", err);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::json!({
            "nombre_solicitante": "Ana",
            "productos": [
                { "tipo_producto": "mica", "talla": "Unitalla", "cantidad": 3 }
            ]
        });
        let d: EquipmentRegistrationDto = serde_json::from_value(json).unwrap();
        assert_eq!(d.productos[0].color, None);
        assert_eq!(d.productos[0].cantidad, 3);

        let resp: RegistrationResponse =
            serde_json::from_str(r#"{"success":true,"message":"OK"}"#).unwrap();
        assert_eq!(resp, RegistrationResponse::ok("OK"));
    }
}
