//! Customer entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer model, keyed by CPF
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// CPF (Brazilian tax ID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub tax_id: String,

    pub name: String,

    pub email: String,

    /// Referenced address. Plain indexed column: no foreign key, no cascade.
    pub address_id: i64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
