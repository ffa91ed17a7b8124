use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hotelsense_common::{Config, Hotel, TripBudget};
use hotelsense_search::{SearchService, AMENITY_FILTERS};
use hotelsense_store::FileStore;

mod commands;

use commands::{FilterArgs, Session, StayArgs};

#[derive(Parser)]
#[command(name = "hotelsense", about = "Natural-language hotel search and bookings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search hotels with a free-text query
    Search {
        query: String,
        /// Lowest nightly price to show
        #[arg(long)]
        min: Option<f64>,
        /// Highest nightly price to show
        #[arg(long)]
        max: Option<f64>,
        /// Only show hotels with this amenity (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Book a hotel from the last search
    Book {
        hotel_id: String,
        #[arg(long)]
        check_in: Option<String>,
        #[arg(long)]
        check_out: Option<String>,
        #[arg(long)]
        guests: Option<u32>,
    },
    /// List saved bookings
    Bookings,
    /// Cancel a booking by id
    Cancel { booking_id: String },
    /// Estimate a trip budget
    Budget {
        #[arg(long)]
        nights: Option<u32>,
        #[arg(long)]
        room_rate: Option<f64>,
        #[arg(long)]
        meals: Option<f64>,
        #[arg(long)]
        transport: Option<f64>,
        #[arg(long)]
        activities: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hotelsense=info".parse()?))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.log_redacted();

    let session = Session::new(Arc::new(FileStore::new(&config.data_dir)));

    match cli.command {
        Command::Search {
            query,
            min,
            max,
            tags,
        } => {
            let service = SearchService::from_config(&config);
            let outcome = session
                .search(&service, &query, &FilterArgs { min, max, tags })
                .await?;
            let visible = outcome.visible();

            info!(
                total = outcome.hotels.len(),
                shown = visible.len(),
                "Search complete"
            );
            println!(
                "\n{} of {} hotels  |  price {:.0}-{:.0}",
                visible.len(),
                outcome.hotels.len(),
                outcome.filter.price_min,
                outcome.filter.price_max
            );
            if !outcome.filter.tags.is_empty() {
                println!("Amenities: {}", outcome.filter.tags.join(", "));
            }
            for hotel in &visible {
                print_hotel(hotel);
            }
            if visible.is_empty() {
                println!("No hotels match. Try widening the price range or dropping a tag.");
                println!("Known amenities: {}", AMENITY_FILTERS.join(", "));
            }
        }
        Command::Book {
            hotel_id,
            check_in,
            check_out,
            guests,
        } => {
            let stay = StayArgs {
                check_in,
                check_out,
                guests,
            };
            let booking = session.book(&hotel_id, &stay, Utc::now())?;
            println!("\nBooking confirmed: {}", booking.id);
            println!(
                "{} ({})  {} -> {}  |  {} guests  |  total {:.0}",
                booking.hotel_name,
                booking.location,
                booking.check_in,
                booking.check_out,
                booking.guests,
                booking.price
            );
        }
        Command::Bookings => {
            let bookings = session.bookings.bookings();
            if bookings.is_empty() {
                println!("No bookings yet.");
            }
            for b in &bookings {
                println!(
                    "{}  {} ({})  {} -> {}  |  {} guests  |  total {:.0}  |  booked {}",
                    b.id,
                    b.hotel_name,
                    b.location,
                    b.check_in,
                    b.check_out,
                    b.guests,
                    b.price,
                    b.booking_date
                );
            }
        }
        Command::Cancel { booking_id } => {
            session.cancel(&booking_id)?;
            println!("Cancelled {booking_id}");
        }
        Command::Budget {
            nights,
            room_rate,
            meals,
            transport,
            activities,
        } => {
            let defaults = TripBudget::default();
            let budget = TripBudget {
                nights: nights.unwrap_or(defaults.nights),
                room_rate: room_rate.unwrap_or(defaults.room_rate),
                meals_per_day: meals.unwrap_or(defaults.meals_per_day),
                transport: transport.unwrap_or(defaults.transport),
                activities: activities.unwrap_or(defaults.activities),
            };
            println!("\n=== Trip budget ({} nights) ===", budget.nights);
            println!("Accommodation: {:.0}", budget.room_total());
            println!("Meals:         {:.0}", budget.meals_total());
            println!("Transport:     {:.0}", budget.transport);
            println!("Activities:    {:.0}", budget.activities);
            println!("Total:         {:.0}", budget.total());
        }
    }

    Ok(())
}

fn print_hotel(hotel: &Hotel) {
    println!(
        "\n{}  {}  ({:.1}★)\n  {}  |  {:.0}/night\n  {}\n  {}",
        hotel.id,
        hotel.name,
        hotel.rating,
        hotel.location,
        hotel.price,
        hotel.tags.join(", "),
        hotel.description
    );
}
