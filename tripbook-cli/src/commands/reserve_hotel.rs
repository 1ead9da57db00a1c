//! Hotel reservation command.

use crate::error::CliError;
use crate::utils::{open_booking_desk, print_record, GlobalOptions};
use clap::Args;
use tripbook::HotelRequest;

/// Reserve a hotel stay.
#[derive(Args)]
pub struct ReserveHotelCommand {
    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub checkin: String,

    /// Checkout date (YYYY-MM-DD), after the check-in date
    #[arg(long, value_name = "DATE")]
    pub checkout: String,

    /// Hotel name
    #[arg(long = "hotel", value_name = "NAME")]
    pub hotel_name: String,

    /// City of the hotel
    #[arg(long, value_name = "CITY")]
    pub city: String,

    /// Cost in bolivianos (replaced when the randomized cost policy is active)
    #[arg(long, value_name = "BOB", default_value_t = 0, allow_negative_numbers = true)]
    pub cost: i64,

    /// Free-text comments stored with the reservation
    #[arg(long, value_name = "TEXT")]
    pub comments: Option<String>,
}

impl ReserveHotelCommand {
    /// Execute the reserve-hotel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let request = HotelRequest {
            comments: self.comments,
            ..HotelRequest::new(
                self.checkin,
                self.checkout,
                self.hotel_name,
                self.city,
                self.cost,
            )
        };

        let desk = open_booking_desk(global)?;
        let reservation = desk.reserve_hotel_stay(&request)?;
        log::info!("recorded {}", reservation.describe());
        print_record(&reservation)
    }
}
