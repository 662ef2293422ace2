use chrono::NaiveDate;
use sqlx::{self, postgres::PgRow, FromRow, PgPool, Postgres, QueryBuilder, Row};

use crate::database::manager::DatabaseError;
use crate::database::models::{Product, Release, Stock, User};

/// A bindable column value
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Int(i32),
    Text(String),
    OptText(Option<String>),
    Date(Option<NaiveDate>),
}

/// Static description of a table a row type maps onto. Names are constants,
/// never user input, so they are pushed into SQL verbatim.
pub trait Table: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    const KEY: &'static str;
    const COLUMNS: &'static str;
    const ORDER_BY: &'static str;

    /// Writable column/value pairs (key excluded)
    fn fields(&self) -> Vec<(&'static str, Field)>;
}

impl Table for Product {
    const TABLE: &'static str = "products";
    const KEY: &'static str = "product_id";
    const COLUMNS: &'static str = "product_id, drug_name";
    const ORDER_BY: &'static str = "product_id";

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![("drug_name", Field::Text(self.drug_name.trim().to_string()))]
    }
}

impl Table for Stock {
    const TABLE: &'static str = "stocks";
    const KEY: &'static str = "stock_id";
    const COLUMNS: &'static str = "stock_id, product_id, drug_name, quantity";
    const ORDER_BY: &'static str = "stock_id";

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("product_id", Field::Int(self.product_id)),
            ("drug_name", Field::Text(self.drug_name.trim().to_string())),
            ("quantity", Field::Int(self.quantity)),
        ]
    }
}

impl Table for Release {
    const TABLE: &'static str = "releases";
    const KEY: &'static str = "release_id";
    const COLUMNS: &'static str = "release_id, product_id, drug_name, release_date, expiry_date";
    const ORDER_BY: &'static str = "release_date DESC NULLS LAST, release_id DESC";

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("product_id", Field::Int(self.product_id)),
            ("drug_name", Field::Text(self.drug_name.trim().to_string())),
            ("release_date", Field::Date(self.release_date)),
            ("expiry_date", Field::Date(self.expiry_date)),
        ]
    }
}

impl Table for User {
    const TABLE: &'static str = "users";
    const KEY: &'static str = "user_id";
    const COLUMNS: &'static str =
        "user_id, full_name, name_with_initials, nic, telephone, email, username";
    const ORDER_BY: &'static str = "user_id";

    fn fields(&self) -> Vec<(&'static str, Field)> {
        let email = self
            .email
            .as_ref()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        vec![
            ("full_name", Field::Text(self.full_name.trim().to_string())),
            ("name_with_initials", Field::Text(self.name_with_initials.trim().to_string())),
            ("nic", Field::Text(self.nic.trim().to_string())),
            ("telephone", Field::Text(self.telephone.trim().to_string())),
            ("email", Field::OptText(email)),
            ("username", Field::Text(self.username.trim().to_string())),
        ]
    }
}

pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Table> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT {} FROM {} ORDER BY {}", T::COLUMNS, T::TABLE, T::ORDER_BY);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn select_404(&self, key: i32) -> Result<T, DatabaseError> {
        let sql = format!("SELECT {} FROM {} WHERE {} = $1", T::COLUMNS, T::TABLE, T::KEY);
        sqlx::query_as::<_, T>(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found::<T>(key))
    }

    pub async fn exists(&self, key: i32) -> Result<bool, DatabaseError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1) AS found",
            T::TABLE,
            T::KEY
        );
        let row = sqlx::query(&sql).bind(key).fetch_one(&self.pool).await?;
        Ok(row.try_get("found")?)
    }

    pub async fn insert(&self, fields: Vec<(&'static str, Field)>) -> Result<T, DatabaseError> {
        let mut qb = insert_query(T::TABLE, fields)?;
        qb.push(" RETURNING ").push(T::COLUMNS);
        let row = qb.build_query_as::<T>().fetch_one(&self.pool).await?;
        Ok(row)
    }

    pub async fn update(
        &self,
        key: i32,
        fields: Vec<(&'static str, Field)>,
    ) -> Result<T, DatabaseError> {
        let mut qb = update_query(T::TABLE, T::KEY, key, fields)?;
        qb.push(" RETURNING ").push(T::COLUMNS);
        qb.build_query_as::<T>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found::<T>(key))
    }

    pub async fn delete(&self, key: i32) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", T::TABLE, T::KEY);
        let result = sqlx::query(&sql).bind(key).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(not_found::<T>(key));
        }
        Ok(())
    }
}

fn not_found<T: Table>(key: i32) -> DatabaseError {
    DatabaseError::NotFound(format!("{} {} not found", singular(T::TABLE), key))
}

fn singular(table: &str) -> &str {
    table.strip_suffix('s').unwrap_or(table)
}

fn push_field(qb: &mut QueryBuilder<'_, Postgres>, field: Field) {
    match field {
        Field::Int(v) => qb.push_bind(v),
        Field::Text(v) => qb.push_bind(v),
        Field::OptText(v) => qb.push_bind(v),
        Field::Date(v) => qb.push_bind(v),
    };
}

pub(crate) fn insert_query(
    table: &str,
    fields: Vec<(&'static str, Field)>,
) -> Result<QueryBuilder<'static, Postgres>, DatabaseError> {
    if fields.is_empty() {
        return Err(DatabaseError::QueryError(format!("nothing to insert into {}", table)));
    }
    let columns: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        table,
        columns.join(", ")
    ));
    for (i, (_, field)) in fields.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_field(&mut qb, field);
    }
    qb.push(")");
    Ok(qb)
}

pub(crate) fn update_query(
    table: &str,
    key_column: &str,
    key: i32,
    fields: Vec<(&'static str, Field)>,
) -> Result<QueryBuilder<'static, Postgres>, DatabaseError> {
    if fields.is_empty() {
        return Err(DatabaseError::QueryError(format!("nothing to update in {}", table)));
    }
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", table));
    for (i, (name, field)) in fields.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(name).push(" = ");
        push_field(&mut qb, field);
    }
    qb.push(format!(" WHERE {} = ", key_column)).push_bind(key);
    Ok(qb)
}
