use async_trait::async_trait;
use entity::employees;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, TryIntoModel};
use tracing::instrument;

use crate::{DbPool, DbResult};

/// Persistence primitives over the `employees` table.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>>;

    async fn exists_by_id(&self, id: i64) -> DbResult<bool>;

    /// Inserts when `id` is unset, updates the existing row otherwise.
    async fn save(&self, record: employees::ActiveModel) -> DbResult<employees::Model>;

    /// Removing an absent id is a no-op.
    async fn delete_by_id(&self, id: i64) -> DbResult<()>;

    /// All rows in primary-key order.
    async fn find_all(&self) -> DbResult<Vec<employees::Model>>;
}

#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeRepository {
    pool: DbPool,
}

impl SeaOrmEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    #[instrument(name = "db.employees.find_by_id", skip(self))]
    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>> {
        Ok(employees::Entity::find_by_id(id).one(&self.pool).await?)
    }

    #[instrument(name = "db.employees.exists_by_id", skip(self))]
    async fn exists_by_id(&self, id: i64) -> DbResult<bool> {
        let count = employees::Entity::find_by_id(id).count(&self.pool).await?;
        Ok(count > 0)
    }

    #[instrument(name = "db.employees.save", skip_all)]
    async fn save(&self, record: employees::ActiveModel) -> DbResult<employees::Model> {
        let saved = record.save(&self.pool).await?;
        Ok(saved.try_into_model()?)
    }

    #[instrument(name = "db.employees.delete_by_id", skip(self))]
    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        employees::Entity::delete_by_id(id).exec(&self.pool).await?;
        Ok(())
    }

    #[instrument(name = "db.employees.find_all", skip(self))]
    async fn find_all(&self) -> DbResult<Vec<employees::Model>> {
        Ok(employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.pool)
            .await?)
    }
}
