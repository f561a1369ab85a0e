//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, SqlErr};
use tracing::debug;

use super::db_err;
use crate::domain::{Customer, CustomerRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

fn entity_to_domain(c: customer::Model) -> Customer {
    Customer {
        tax_id: c.tax_id,
        name: c.name,
        email: c.email,
        address_id: c.address_id,
    }
}

/// Maps a primary-key violation on insert to the domain conflict, so a
/// concurrent registration that slipped past the service's pre-check still
/// reports a duplicate CPF.
fn insert_err(tax_id: &str, e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::tax_id_taken(tax_id),
        _ => db_err(e),
    }
}

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(tax_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::TaxId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, c: Customer) -> DomainResult<Customer> {
        let now = Utc::now();
        let tax_id = c.tax_id.clone();
        let model = customer::ActiveModel {
            tax_id: Set(c.tax_id),
            name: Set(c.name),
            email: Set(c.email),
            address_id: Set(c.address_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(&tax_id, e))?;
        debug!(tax_id = %result.tax_id, "Customer row inserted");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, c: Customer) -> DomainResult<Customer> {
        let existing = customer::Entity::find_by_id(c.tax_id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Customer", "cpf", &c.tax_id));
        };

        let model = customer::ActiveModel {
            tax_id: Set(c.tax_id),
            name: Set(c.name),
            email: Set(c.email),
            address_id: Set(c.address_id),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        let result = model.update(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, tax_id: &str) -> DomainResult<()> {
        let result = customer::Entity::delete_by_id(tax_id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Customer", "cpf", tax_id));
        }
        Ok(())
    }
}
