//! Console rendering of the inspection report.
//!
//! Every function writes to a caller-supplied [`Write`] so the binary can
//! print to stdout and tests can capture into a buffer. Output is meant for
//! humans only; nothing downstream should parse it.

use std::fmt::Display;
use std::io::{self, Write};

use crate::models::{GroupCount, GroupDimension, RecentRestaurant, RestaurantSample};

const SEPARATOR_WIDTH: usize = 50;

/// Placeholder printed for NULL columns.
pub const NULL_PLACEHOLDER: &str = "-";

/// Formats a count with `,` between every group of three digits.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn or_placeholder<T: Display>(value: Option<&T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NULL_PLACEHOLDER.to_string())
}

fn separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    separator(out)
}

pub fn header<W: Write>(out: &mut W, database: &str) -> io::Result<()> {
    writeln!(out, "🔍 Checking PostgreSQL restaurants table...")?;
    writeln!(out, "📊 Database: {}", database)?;
    separator(out)
}

pub fn total<W: Write>(out: &mut W, count: i64) -> io::Result<()> {
    writeln!(out, "📈 Total restaurants: {}", format_count(count))
}

pub fn no_data<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ The restaurants table has no data.")
}

pub fn samples<W: Write>(out: &mut W, limit: i64, rows: &[RestaurantSample]) -> io::Result<()> {
    section(out, &format!("🍽️  Sample restaurants (first {}):", limit))?;

    for (i, row) in rows.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. Restaurant:", i + 1)?;
        writeln!(out, "   ID: {}", row.content_id)?;
        writeln!(out, "   Name: {}", or_placeholder(row.restaurant_name.as_ref()))?;
        writeln!(out, "   Region: {}", or_placeholder(row.region_code.as_ref()))?;
        writeln!(out, "   Category: {}", or_placeholder(row.category_code.as_ref()))?;
        writeln!(out, "   Address: {}", or_placeholder(row.address.as_ref()))?;
        writeln!(out, "   Phone: {}", or_placeholder(row.tel.as_ref()))?;
        writeln!(
            out,
            "   Coordinates: {}, {}",
            or_placeholder(row.latitude.as_ref()),
            or_placeholder(row.longitude.as_ref())
        )?;
        writeln!(out, "   Created: {}", or_placeholder(row.created_at.as_ref()))?;
    }

    Ok(())
}

pub fn groups<W: Write>(
    out: &mut W,
    dimension: GroupDimension,
    rows: &[GroupCount],
) -> io::Result<()> {
    let title = match dimension {
        GroupDimension::Region => "📊 Restaurants by region:",
        GroupDimension::Category => "🍕 Restaurants by category:",
    };
    section(out, title)?;

    for row in rows {
        writeln!(
            out,
            "   {}: {}",
            or_placeholder(row.code.as_ref()),
            format_count(row.count)
        )?;
    }

    Ok(())
}

pub fn recent<W: Write>(out: &mut W, limit: i64, rows: &[RecentRestaurant]) -> io::Result<()> {
    section(out, &format!("🕒 Recently added restaurants (latest {}):", limit))?;

    for (i, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "   {}. {} ({}) - {}",
            i + 1,
            or_placeholder(row.restaurant_name.as_ref()),
            or_placeholder(row.region_code.as_ref()),
            or_placeholder(row.created_at.as_ref())
        )?;
    }

    Ok(())
}

pub fn finished<W: Write>(out: &mut W, api_hint_url: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✅ Inspection complete!")?;
    writeln!(out, "💡 API endpoint: {}", api_hint_url)
}

pub fn failure<W: Write>(out: &mut W, error: &dyn Display) -> io::Result<()> {
    writeln!(out, "❌ Error: {}", error)?;
    writeln!(out, "🔧 Check the database connection.")
}
