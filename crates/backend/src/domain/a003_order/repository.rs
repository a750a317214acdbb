use chrono::{NaiveDate, Utc};
use contracts::domain::a003_order::{Order, OrderSearchQuery};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{
    ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::shared::data::db::get_connection;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub registration_id: String,
    pub line_no: i32,
    pub fecha: NaiveDate,
    pub nombre_solicitante: String,
    pub tipo_producto: String,
    pub talla: String,
    pub color: Option<String>,
    pub cantidad: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        Order {
            id: m.id,
            fecha: m.fecha,
            nombre_solicitante: m.nombre_solicitante,
            tipo_producto: m.tipo_producto,
            talla: m.talla,
            color: m.color,
            cantidad: u32::try_from(m.cantidad).unwrap_or(0),
        }
    }
}

/// Row to be written for one product line of a registration
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub tipo_producto: String,
    pub talla: String,
    pub color: Option<String>,
    pub cantidad: u32,
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Orders matching `query`, newest date first, lines of one registration in order
pub async fn list(query: &OrderSearchQuery) -> anyhow::Result<Vec<Order>> {
    let mut select = Entity::find();

    if let Some(tipo) = &query.tipo_producto {
        select = select.filter(Column::TipoProducto.eq(tipo.as_str()));
    }
    if let Some(from) = query.fecha_desde {
        select = select.filter(Column::Fecha.gte(from));
    }
    if let Some(to) = query.fecha_hasta {
        select = select.filter(Column::Fecha.lte(to));
    }

    let items: Vec<Order> = select
        .order_by_desc(Column::Fecha)
        .order_by_desc(Column::CreatedAt)
        .order_by_asc(Column::LineNo)
        .all(conn())
        .await?
        .into_iter()
        .map(Order::from)
        // requester name: case-insensitive, non-ASCII aware
        .filter(|o| query.matches(o))
        .collect();
    Ok(items)
}

/// Insert all lines of one registration in a single transaction
pub async fn insert_registration(
    registration_id: Uuid,
    fecha: NaiveDate,
    nombre_solicitante: &str,
    lines: &[NewOrderLine],
) -> anyhow::Result<usize> {
    let txn = conn().begin().await?;
    let inserted = insert_lines(&txn, registration_id, fecha, nombre_solicitante, lines).await?;
    txn.commit().await?;
    Ok(inserted)
}

async fn insert_lines(
    db: &DatabaseTransaction,
    registration_id: Uuid,
    fecha: NaiveDate,
    nombre_solicitante: &str,
    lines: &[NewOrderLine],
) -> anyhow::Result<usize> {
    let now = Utc::now();
    for (idx, line) in lines.iter().enumerate() {
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            registration_id: Set(registration_id.to_string()),
            line_no: Set(idx as i32),
            fecha: Set(fecha),
            nombre_solicitante: Set(nombre_solicitante.to_string()),
            tipo_producto: Set(line.tipo_producto.clone()),
            talla: Set(line.talla.clone()),
            color: Set(line.color.clone()),
            cantidad: Set(i32::try_from(line.cantidad)?),
            created_at: Set(now),
        };
        active.insert(db).await?;
    }
    Ok(lines.len())
}
