//! # Sample Booking Seeder
//!
//! Writes the two sample bookings into a database file so the desk has
//! something to show.
//!
//! ## Usage
//! ```bash
//! # Seed ./hotel_dev.db if it has no bookings yet
//! cargo run -p hotel-db --bin seed
//!
//! # Specify database path
//! cargo run -p hotel-db --bin seed -- --db ./data/hotel.db
//!
//! # Overwrite whatever is stored
//! cargo run -p hotel-db --bin seed -- --force
//! ```
//!
//! Sample dates are relative to the local date the seeder runs on.

use chrono::Local;
use hotel_core::display::format_date;
use hotel_core::samples::sample_bookings;
use hotel_db::{Database, DbConfig, LoadOutcome};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./hotel_dev.db");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Hotel Desk Sample Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./hotel_dev.db)");
                println!("  -f, --force        Replace bookings that are already stored");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Hotel Desk Sample Seeder");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    match db.bookings().load().await? {
        LoadOutcome::Loaded(list) if !list.is_empty() && !force => {
            println!("⚠ Database already has {} bookings", list.len());
            println!("  Skipping seed. Pass --force to replace them.");
            return Ok(());
        }
        LoadOutcome::Corrupt(reason) => {
            println!("⚠ Stored bookings were unreadable ({}), replacing", reason);
        }
        _ => {}
    }

    let today = Local::now().date_naive();
    let bookings = sample_bookings(today);
    db.bookings().save_all(&bookings).await?;

    println!();
    for b in &bookings {
        println!(
            "  #{} {:<14} room {:>2}  {} → {}  {}",
            b.id,
            b.guest_name,
            b.room_number,
            format_date(b.check_in),
            format_date(b.check_out),
            b.status.label()
        );
    }

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}
