//! In-memory restaurants table used to drive the inspector without a database.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use restaurant_inspector::errors::{InspectError, ResultExt};
use restaurant_inspector::models::{
    GroupCount, GroupDimension, RecentRestaurant, RestaurantSample,
};
use restaurant_inspector::store::RestaurantStore;

pub struct MemoryStore {
    rows: Vec<RestaurantSample>,
    fail_on: Option<&'static str>,
    pub calls: RefCell<Vec<&'static str>>,
}

impl MemoryStore {
    pub fn new(rows: Vec<RestaurantSample>) -> Self {
        Self {
            rows,
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Makes the named query fail with a database error.
    pub fn failing_on(mut self, query: &'static str) -> Self {
        self.fail_on = Some(query);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, query: &'static str) -> Result<(), InspectError> {
        self.calls.borrow_mut().push(query);
        if self.fail_on == Some(query) {
            return Err::<(), sqlx::Error>(sqlx::Error::PoolClosed).context(query);
        }
        Ok(())
    }
}

impl RestaurantStore for MemoryStore {
    async fn count(&self) -> Result<i64, InspectError> {
        self.record("count")?;
        Ok(self.rows.len() as i64)
    }

    async fn sample(&self, limit: i64) -> Result<Vec<RestaurantSample>, InspectError> {
        self.record("sample")?;
        Ok(self.rows.iter().take(limit as usize).cloned().collect())
    }

    async fn count_by(
        &self,
        dimension: GroupDimension,
        limit: i64,
    ) -> Result<Vec<GroupCount>, InspectError> {
        self.record(match dimension {
            GroupDimension::Region => "count_by_region",
            GroupDimension::Category => "count_by_category",
        })?;

        let mut counts: HashMap<Option<String>, i64> = HashMap::new();
        for row in &self.rows {
            let code = match dimension {
                GroupDimension::Region => row.region_code.clone(),
                GroupDimension::Category => row.category_code.clone(),
            };
            *counts.entry(code).or_default() += 1;
        }

        let mut groups: Vec<GroupCount> = counts
            .into_iter()
            .map(|(code, count)| GroupCount { code, count })
            .collect();
        // count DESC, code ASC NULLS LAST
        groups.sort_by(|a, b| {
            b.count.cmp(&a.count).then_with(|| match (&a.code, &b.code) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
        });
        groups.truncate(limit as usize);
        Ok(groups)
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<RecentRestaurant>, InspectError> {
        self.record("most_recent")?;

        let mut rows: Vec<&RestaurantSample> = self.rows.iter().collect();
        // created_at DESC puts NULLs first in PostgreSQL
        rows.sort_by(|a, b| match (&a.created_at, &b.created_at) {
            (Some(x), Some(y)) => timestamp_rank(y).cmp(&timestamp_rank(x)),
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|r| RecentRestaurant {
                content_id: r.content_id.clone(),
                restaurant_name: r.restaurant_name.clone(),
                region_code: r.region_code.clone(),
                created_at: r.created_at.clone(),
            })
            .collect())
    }
}

/// Sort key matching PostgreSQL timestamp order for the text form used in fixtures.
fn timestamp_rank(value: &str) -> (i8, &str) {
    match value {
        "-infinity" => (-1, value),
        "infinity" => (1, value),
        _ => (0, value),
    }
}

/// Creation timestamp as PostgreSQL renders a `timestamptz` in UTC.
pub fn created(day: u32) -> String {
    format!("2024-03-{:02} 12:00:00+00", day)
}

pub fn restaurant(id: u32, region: &str, category: &str, day: u32) -> RestaurantSample {
    RestaurantSample {
        content_id: id.to_string(),
        region_code: Some(region.to_string()),
        restaurant_name: Some(format!("Restaurant {}", id)),
        category_code: Some(category.to_string()),
        address: Some(format!("{} Main Street", id)),
        tel: Some("02-123-4567".to_string()),
        latitude: None,
        longitude: None,
        created_at: Some(created(day)),
    }
}

/// Lines of the section whose heading contains `title`, up to the next blank line.
pub fn section_lines<'a>(output: &'a str, title: &str) -> Vec<&'a str> {
    output
        .lines()
        .skip_while(|line| !line.contains(title))
        .skip(2)
        .take_while(|line| !line.is_empty())
        .collect()
}
