//! SeaORM implementation of AddressRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::db_err;
use crate::domain::{Address, AddressData, AddressRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::address;

fn entity_to_domain(a: address::Model) -> Address {
    Address {
        id: a.id,
        postal_code: a.postal_code,
        state: a.state,
        city: a.city,
        district: a.district,
        street: a.street,
        number: a.number,
    }
}

pub struct SeaOrmAddressRepository {
    db: DatabaseConnection,
}

impl SeaOrmAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Address>> {
        let model = address::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Address>> {
        let models = address::Entity::find()
            .order_by_asc(address::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, data: AddressData) -> DomainResult<Address> {
        let now = Utc::now();
        let model = address::ActiveModel {
            id: NotSet,
            postal_code: Set(data.postal_code),
            state: Set(data.state),
            city: Set(data.city),
            district: Set(data.district),
            street: Set(data.street),
            number: Set(data.number),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        debug!(address_id = result.id, "Address row inserted");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, a: Address) -> DomainResult<Address> {
        let existing = address::Entity::find_by_id(a.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Address", "id", a.id));
        };

        let model = address::ActiveModel {
            id: Set(a.id),
            postal_code: Set(a.postal_code),
            state: Set(a.state),
            city: Set(a.city),
            district: Set(a.district),
            street: Set(a.street),
            number: Set(a.number),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        let result = model.update(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = address::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Address", "id", id));
        }
        Ok(())
    }
}
