use sqlx::PgPool;
use tracing::{debug, info};

use profilesmith_core::Profile;

use crate::error::StoreError;
use crate::store::Store;

mod ddl;
mod mapper;

const INSERT_CUSTOMER: &str = "
INSERT INTO customers (
    customer_id, first_name, last_name, gender, date_of_birth,
    email, mobile_phone, home_address, city, postal_code,
    country, iso_country_code, test_profile
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
";

const INSERT_RETAIL_PREFERENCES: &str = "
INSERT INTO retail_preferences (
    customer_id, favourite_color, favourite_category,
    favourite_sub_category, shirt_size, pants_size, shoe_size
) VALUES ($1, $2, $3, $4, $5, $6, $7)
";

const INSERT_MARKETING_PREFERENCES: &str = "
INSERT INTO marketing_preferences (
    customer_id, marketing_consent, preferred_communication_method
) VALUES ($1, $2, $3)
";

const INSERT_LOYALTY_MEMBER: &str = "
INSERT INTO loyalty_members (
    loyalty_number_id, customer_id, date_joined, points
) VALUES ($1, $2, $3, $4)
";

const SELECT_PROFILE: &str = "
SELECT
    c.customer_id, c.first_name, c.last_name, c.gender, c.date_of_birth,
    c.email, c.mobile_phone, c.home_address, c.city, c.postal_code,
    c.country, c.iso_country_code, c.test_profile,
    r.favourite_color, r.favourite_category, r.favourite_sub_category,
    r.shirt_size, r.pants_size, r.shoe_size,
    m.marketing_consent, m.preferred_communication_method,
    l.loyalty_number_id, l.date_joined, l.points
FROM customers c
JOIN retail_preferences r ON r.customer_id = c.customer_id
JOIN marketing_preferences m ON m.customer_id = c.customer_id
JOIN loyalty_members l ON l.customer_id = c.customer_id
WHERE c.customer_id = $1
";

/// Store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store over a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Store for PostgresStore {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        for (table, statement) in ddl::ALL_TABLES {
            sqlx::query(statement).execute(&self.pool).await?;
            debug!(table, "table ensured");
        }
        info!(tables = ddl::ALL_TABLES.len(), "database schema ready");
        Ok(())
    }

    async fn insert_profile(&self, profile: &Profile) -> Result<String, StoreError> {
        let personal = &profile.personal_details;
        let retail = &profile.retail_preferences;
        let marketing = &profile.marketing_preferences;
        let loyalty = &profile.loyalty_data;
        let customer_id = profile.customer_id();

        let mut tx = self.pool.begin().await?;

        sqlx::query(INSERT_CUSTOMER)
            .bind(customer_id)
            .bind(&personal.first_name)
            .bind(&personal.last_name)
            .bind(personal.gender.as_str())
            .bind(personal.date_of_birth)
            .bind(&personal.email)
            .bind(&personal.mobile_phone)
            .bind(&personal.home_address)
            .bind(&personal.home_city)
            .bind(&personal.postal_code)
            .bind(&personal.country)
            .bind(&personal.iso_country_code)
            .bind(profile.system_data.test_profile)
            .execute(&mut *tx)
            .await?;

        sqlx::query(INSERT_RETAIL_PREFERENCES)
            .bind(customer_id)
            .bind(&retail.favourite_color)
            .bind(&retail.favourite_category)
            .bind(&retail.favourite_sub_category)
            .bind(&retail.shirt_size)
            .bind(&retail.pants_size)
            .bind(retail.shoe_size)
            .execute(&mut *tx)
            .await?;

        sqlx::query(INSERT_MARKETING_PREFERENCES)
            .bind(customer_id)
            .bind(marketing.consent)
            .bind(marketing.preferred_communication_method.as_str())
            .execute(&mut *tx)
            .await?;

        sqlx::query(INSERT_LOYALTY_MEMBER)
            .bind(loyalty.loyalty_number_id)
            .bind(customer_id)
            .bind(loyalty.date_joined)
            .bind(loyalty.points)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(customer_id = %customer_id, "profile inserted");
        Ok(customer_id.to_string())
    }

    async fn fetch_profile(&self, customer_id: &str) -> Result<Profile, StoreError> {
        let row = sqlx::query(SELECT_PROFILE)
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(customer_id.to_string()))?;

        mapper::profile_from_row(&row)
    }
}
