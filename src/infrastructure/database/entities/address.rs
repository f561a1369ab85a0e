//! Address entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Address model - postal addresses referenced by customers
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    /// Auto-incremented address ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// CEP (e.g., "12345-678")
    pub postal_code: String,

    pub state: String,

    pub city: String,

    /// Neighbourhood (bairro)
    pub district: String,

    pub street: String,

    /// Building or unit number
    pub number: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
