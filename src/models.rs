use sqlx::FromRow;

// ============ Database Models ============

/// A full restaurant row as returned by the sample query.
///
/// Coordinates and timestamps are read as the server's text rendering, so
/// values such as `NaN` or `infinity` print exactly as PostgreSQL shows them.
#[derive(Debug, Clone, FromRow)]
pub struct RestaurantSample {
    /// Unique identifier of the restaurant.
    pub content_id: String,
    /// Region classification code.
    pub region_code: Option<String>,
    /// Display name.
    pub restaurant_name: Option<String>,
    /// Category classification code.
    pub category_code: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Telephone number.
    pub tel: Option<String>,
    /// Latitude as stored.
    pub latitude: Option<String>,
    /// Longitude as stored.
    pub longitude: Option<String>,
    /// Timestamp of creation.
    pub created_at: Option<String>,
}

/// One bucket of a group-by aggregate.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GroupCount {
    /// Region or category code; `None` for rows where it is NULL.
    pub code: Option<String>,
    pub count: i64,
}

/// A restaurant row from the recency query.
#[derive(Debug, Clone, FromRow)]
pub struct RecentRestaurant {
    pub content_id: String,
    pub restaurant_name: Option<String>,
    pub region_code: Option<String>,
    pub created_at: Option<String>,
}

/// Column a group-by aggregate is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDimension {
    Region,
    Category,
}

impl GroupDimension {
    pub fn column(self) -> &'static str {
        match self {
            GroupDimension::Region => "region_code",
            GroupDimension::Category => "category_code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupDimension::Region => "region",
            GroupDimension::Category => "category",
        }
    }
}
