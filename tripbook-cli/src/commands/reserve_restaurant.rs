//! Restaurant reservation command.

use crate::error::CliError;
use crate::utils::{open_booking_desk, print_record, GlobalOptions};
use clap::Args;
use tripbook::RestaurantRequest;

/// Reserve a table at a restaurant.
///
/// The cost given here is always kept; restaurant bookings are never
/// repriced.
#[derive(Args)]
pub struct ReserveRestaurantCommand {
    /// Reservation date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Reservation time (HH:MM, 24-hour)
    #[arg(long, value_name = "HH:MM")]
    pub time: String,

    /// Restaurant name
    #[arg(long, value_name = "NAME")]
    pub restaurant: String,

    /// City of the restaurant
    #[arg(long, value_name = "CITY")]
    pub city: String,

    /// Dish ordered in advance
    #[arg(long, value_name = "DISH")]
    pub dish: String,

    /// Cost in bolivianos
    #[arg(long, value_name = "BOB", default_value_t = 0, allow_negative_numbers = true)]
    pub cost: i64,

    /// Free-text comments stored with the reservation
    #[arg(long, value_name = "TEXT")]
    pub comments: Option<String>,
}

impl ReserveRestaurantCommand {
    /// Execute the reserve-restaurant command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let request = RestaurantRequest {
            comments: self.comments,
            ..RestaurantRequest::new(
                self.date,
                self.time,
                self.restaurant,
                self.city,
                self.dish,
                self.cost,
            )
        };

        let desk = open_booking_desk(global)?;
        let reservation = desk.reserve_table(&request)?;
        log::info!("recorded {}", reservation.describe());
        print_record(&reservation)
    }
}
