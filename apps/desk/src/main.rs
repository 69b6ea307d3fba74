//! # Hotel Desk Console Launcher
//!
//! Starts the desk the same way a windowed front end would, then prints
//! the dashboard and the bookings table once.
//!
//! ```bash
//! HOTEL_DB_PATH=./hotel_dev.db cargo run -p hotel-desk
//! ```

use hotel_desk::commands::table::list_bookings;
use hotel_desk::state::ConfigState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    hotel_desk::init_tracing();

    let desk = hotel_desk::launch(ConfigState::from_env()).await?;
    let table = list_bookings(&desk.bookings);
    let s = table.summary;

    println!("{}", desk.config.hotel_name);
    println!(
        "{} bookings · {} upcoming · {} checked in · {} checked out · {}/{} rooms free",
        s.total_bookings, s.upcoming, s.checked_in, s.checked_out, s.available_rooms, s.total_rooms
    );
    println!();

    for row in &table.rows {
        let b = &row.booking;
        println!(
            "#{:<14} {:<20} room {:>3}  {} → {}  {}",
            b.id, b.guest_name, b.room_number, row.check_in_label, row.check_out_label, row.status_label
        );
    }

    desk.db.inner().close().await;
    Ok(())
}
