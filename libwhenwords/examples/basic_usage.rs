//! Basic usage example for the whenwords library.
//!
//! Run with: cargo run --example basic_usage

use libwhenwords::{DurationOptions, date_range, duration, human_date, parse_duration, timeago};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("whenwords - Basic Usage Example\n");

    let now = chrono::Utc::now();
    let three_hours_ago = now - chrono::Duration::hours(3);

    println!("timeago:    {}", timeago(three_hours_ago, Some(now))?);
    println!("human_date: {}", human_date(now - chrono::Duration::days(3), Some(now))?);
    println!("date_range: {}", date_range(now, now + chrono::Duration::days(10))?);

    let compact = DurationOptions::default().compact(true);
    for seconds in [45, 3661, 93661, 36_720_000] {
        println!(
            "duration:   {:>10}s -> {} / {}",
            seconds,
            duration(seconds, DurationOptions::default())?,
            duration(seconds, compact)?
        );
    }

    for text in ["2h30m", "1 day, 2 hours", "1:30:00", "1.5 weeks"] {
        println!("parse:      {:?} -> {}s", text, parse_duration(text)?);
    }

    Ok(())
}
