use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use entity::employee::{self, ActiveModel, Column, Entity};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, Statement, Value,
};
use tracing::instrument;

use crate::statement::{bind_named, placeholder};

pub type StoreResult<T> = Result<T, DbErr>;

const BY_NAME_NAMED_SQL: &str =
    "SELECT * FROM employees AS e WHERE e.first_name = :firstName AND e.last_name = :lastName";

/// Persistence port for employees.
///
/// The four `find_by_first_name_and_last_name*` lookups are interchangeable;
/// they differ only in how the query is expressed and how parameters are
/// bound. When several rows share a name an arbitrary one is returned.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<employee::Model>>;

    /// Every row, in id order.
    async fn find_all(&self) -> StoreResult<Vec<employee::Model>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<employee::Model>>;

    /// Inserts when `id` is not set, otherwise updates the row with that id.
    async fn save(&self, employee: ActiveModel) -> StoreResult<employee::Model>;

    /// Removing a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;

    /// Query builder, values bound positionally to columns.
    async fn find_by_first_name_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>>;

    /// Query builder, values bound to columns by parameter name.
    async fn find_by_first_name_and_last_name_named(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>>;

    /// Native SQL with positional placeholders.
    async fn find_by_first_name_and_last_name_native(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>>;

    /// Native SQL with `:name` placeholders.
    async fn find_by_first_name_and_last_name_native_named(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>>;
}

#[derive(Clone)]
pub struct SeaOrmEmployeeStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    fn name_params(first_name: &str, last_name: &str) -> [(&'static str, Value); 2] {
        [
            ("firstName", Value::from(first_name)),
            ("lastName", Value::from(last_name)),
        ]
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    #[instrument(name = "store.employees.find_by_id", skip(self))]
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<employee::Model>> {
        Entity::find_by_id(id).one(self.conn()).await
    }

    #[instrument(name = "store.employees.find_all", skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<employee::Model>> {
        Entity::find().order_by_asc(Column::Id).all(self.conn()).await
    }

    #[instrument(name = "store.employees.find_by_email", skip(self))]
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<employee::Model>> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(self.conn())
            .await
    }

    #[instrument(name = "store.employees.save", skip_all)]
    async fn save(&self, employee: ActiveModel) -> StoreResult<employee::Model> {
        if matches!(employee.id, ActiveValue::NotSet) {
            employee.insert(self.conn()).await
        } else {
            employee.update(self.conn()).await
        }
    }

    #[instrument(name = "store.employees.delete_by_id", skip(self))]
    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let result = Entity::delete_by_id(id).exec(self.conn()).await?;
        tracing::debug!(rows = result.rows_affected, "employee delete executed");
        Ok(())
    }

    #[instrument(name = "store.employees.by_name", skip(self))]
    async fn find_by_first_name_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>> {
        Entity::find()
            .filter(Column::FirstName.eq(first_name))
            .filter(Column::LastName.eq(last_name))
            .one(self.conn())
            .await
    }

    #[instrument(name = "store.employees.by_name_named", skip(self))]
    async fn find_by_first_name_and_last_name_named(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>> {
        let mut condition = Condition::all();
        for (name, value) in Self::name_params(first_name, last_name) {
            let column = Column::from_str(name)
                .map_err(|_| DbErr::Custom(format!("no employee column named {name}")))?;
            condition = condition.add(column.eq(value));
        }
        Entity::find().filter(condition).one(self.conn()).await
    }

    #[instrument(name = "store.employees.by_name_native", skip(self))]
    async fn find_by_first_name_and_last_name_native(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>> {
        let backend = self.conn().get_database_backend();
        let sql = format!(
            "SELECT * FROM employees AS e WHERE e.first_name = {} AND e.last_name = {}",
            placeholder(backend, 1),
            placeholder(backend, 2),
        );
        let stmt =
            Statement::from_sql_and_values(backend, &sql, [first_name.into(), last_name.into()]);
        Entity::find().from_raw_sql(stmt).one(self.conn()).await
    }

    #[instrument(name = "store.employees.by_name_native_named", skip(self))]
    async fn find_by_first_name_and_last_name_native_named(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<employee::Model>> {
        let stmt = bind_named(
            self.conn().get_database_backend(),
            BY_NAME_NAMED_SQL,
            &Self::name_params(first_name, last_name),
        )?;
        Entity::find().from_raw_sql(stmt).one(self.conn()).await
    }
}
