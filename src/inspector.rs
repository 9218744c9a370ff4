//! The fixed inspection sequence over the restaurants table.

use std::io::Write;

use crate::config::{redact_database_url, Config};
use crate::db::Database;
use crate::errors::InspectError;
use crate::models::GroupDimension;
use crate::report;
use crate::store::{PgRestaurantStore, RestaurantStore};

pub const SAMPLE_LIMIT: i64 = 5;
pub const GROUP_LIMIT: i64 = 10;
pub const RECENT_LIMIT: i64 = 3;

/// How a successful inspection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The table had no rows; only the count query ran.
    Empty,
    /// Every section was printed.
    Completed { total: i64 },
}

/// Process exit status for a finished run: 0 for a completed report or an
/// empty table, 1 for any failure.
pub fn exit_status(result: &Result<Outcome, InspectError>) -> u8 {
    match result {
        Ok(Outcome::Empty) | Ok(Outcome::Completed { .. }) => 0,
        Err(_) => 1,
    }
}

/// Runs the count, sample, group-by and recency queries in order, printing each section.
///
/// Stops after the count when the table is empty. The first failing query
/// aborts the run; sections already written stay written.
pub async fn inspect<S, W>(store: &S, out: &mut W) -> Result<Outcome, InspectError>
where
    S: RestaurantStore,
    W: Write,
{
    let total = store.count().await?;
    report::total(out, total)?;

    if total == 0 {
        report::no_data(out)?;
        tracing::info!("restaurants table is empty, skipping remaining queries");
        return Ok(Outcome::Empty);
    }

    let samples = store.sample(SAMPLE_LIMIT).await?;
    report::samples(out, SAMPLE_LIMIT, &samples)?;

    for dimension in [GroupDimension::Region, GroupDimension::Category] {
        let groups = store.count_by(dimension, GROUP_LIMIT).await?;
        report::groups(out, dimension, &groups)?;
    }

    let recent = store.most_recent(RECENT_LIMIT).await?;
    report::recent(out, RECENT_LIMIT, &recent)?;

    Ok(Outcome::Completed { total })
}

async fn inspect_with_header<S, W>(
    store: &S,
    out: &mut W,
    config: &Config,
) -> Result<Outcome, InspectError>
where
    S: RestaurantStore,
    W: Write,
{
    report::header(out, &redact_database_url(&config.database_url))?;
    inspect(store, out).await
}

/// Connects, inspects, and tears the session down.
///
/// The session is closed whether or not the inspection succeeded. The closing
/// summary is only printed after a completed report.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<Outcome, InspectError> {
    let db = Database::new(&config.database_url).await?;
    tracing::info!("Connected to database");

    let store = PgRestaurantStore::new(db.pool.clone());
    let result = inspect_with_header(&store, out, config).await;

    db.close().await;

    let outcome = result?;
    if let Outcome::Completed { total } = outcome {
        tracing::info!(total, "Inspection complete");
        report::finished(out, &config.api_hint_url)?;
    }

    Ok(outcome)
}
