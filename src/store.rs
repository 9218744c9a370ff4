use sqlx::PgPool;

use crate::errors::{InspectError, ResultExt};
use crate::models::{GroupCount, GroupDimension, RecentRestaurant, RestaurantSample};

/// Read-only queries the inspector needs from the restaurants table.
#[allow(async_fn_in_trait)]
pub trait RestaurantStore {
    /// Total number of rows.
    async fn count(&self) -> Result<i64, InspectError>;

    /// First `limit` rows in whatever order the database returns them.
    async fn sample(&self, limit: i64) -> Result<Vec<RestaurantSample>, InspectError>;

    /// Row counts per code, largest first, at most `limit` groups.
    async fn count_by(
        &self,
        dimension: GroupDimension,
        limit: i64,
    ) -> Result<Vec<GroupCount>, InspectError>;

    /// Newest `limit` rows by creation timestamp.
    async fn most_recent(&self, limit: i64) -> Result<Vec<RecentRestaurant>, InspectError>;
}

/// PostgreSQL implementation over the `restaurants` table.
pub struct PgRestaurantStore {
    pool: PgPool,
}

impl PgRestaurantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Every column is read as text: integer and varchar schemas both decode, and
// NaN coordinates or infinite timestamps print as stored instead of failing to decode.
const SAMPLE_QUERY: &str = r#"
    SELECT
        content_id::text AS content_id,
        region_code::text AS region_code,
        restaurant_name::text AS restaurant_name,
        category_code::text AS category_code,
        address::text AS address,
        tel::text AS tel,
        latitude::text AS latitude,
        longitude::text AS longitude,
        created_at::text AS created_at
    FROM restaurants
    LIMIT $1
"#;

const RECENT_QUERY: &str = r#"
    SELECT
        content_id::text AS content_id,
        restaurant_name::text AS restaurant_name,
        region_code::text AS region_code,
        created_at::text AS created_at
    FROM restaurants
    ORDER BY restaurants.created_at DESC
    LIMIT $1
"#;

fn group_query(dimension: GroupDimension) -> String {
    let column = dimension.column();
    format!(
        r#"
    SELECT
        {column}::text AS code,
        COUNT(*) AS count
    FROM restaurants
    GROUP BY {column}
    ORDER BY count DESC, code ASC NULLS LAST
    LIMIT $1
"#
    )
}

impl RestaurantStore for PgRestaurantStore {
    async fn count(&self) -> Result<i64, InspectError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM restaurants")
            .fetch_one(&self.pool)
            .await
            .context("count restaurants")?;
        Ok(total)
    }

    async fn sample(&self, limit: i64) -> Result<Vec<RestaurantSample>, InspectError> {
        sqlx::query_as::<_, RestaurantSample>(SAMPLE_QUERY)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context("sample restaurants")
    }

    async fn count_by(
        &self,
        dimension: GroupDimension,
        limit: i64,
    ) -> Result<Vec<GroupCount>, InspectError> {
        let query = group_query(dimension);
        sqlx::query_as::<_, GroupCount>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context(format!("group restaurants by {}", dimension.label()))
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<RecentRestaurant>, InspectError> {
        sqlx::query_as::<_, RecentRestaurant>(RECENT_QUERY)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context("fetch recent restaurants")
    }
}
