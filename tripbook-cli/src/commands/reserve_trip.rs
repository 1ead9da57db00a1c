//! Flight and bus reservation commands.
//!
//! Both commands take the same arguments and differ only in the trip type
//! they record.

use crate::error::CliError;
use crate::utils::{open_booking_desk, print_record, GlobalOptions};
use clap::Args;
use tripbook::{TripRequest, TripType};

/// Arguments shared by `reserve-flight` and `reserve-bus`.
#[derive(Args)]
pub struct TripArgs {
    /// Travel date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Department of departure
    #[arg(long = "from", value_name = "DEPARTMENT")]
    pub departure: String,

    /// Department of arrival
    #[arg(long = "to", value_name = "DEPARTMENT")]
    pub destination: String,

    /// Cost in bolivianos (replaced when the randomized cost policy is active)
    #[arg(long, value_name = "BOB", default_value_t = 0, allow_negative_numbers = true)]
    pub cost: i64,

    /// Free-text comments stored with the reservation
    #[arg(long, value_name = "TEXT")]
    pub comments: Option<String>,
}

impl TripArgs {
    fn into_request(self, trip_type: TripType) -> TripRequest {
        TripRequest {
            comments: self.comments,
            ..TripRequest::new(
                trip_type,
                self.date,
                self.departure,
                self.destination,
                self.cost,
            )
        }
    }

    fn execute(self, trip_type: TripType, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = open_booking_desk(global)?;
        let reservation = desk.reserve_trip(&self.into_request(trip_type))?;
        log::info!("recorded {}", reservation.describe());
        print_record(&reservation)
    }
}

/// Reserve a flight.
#[derive(Args)]
pub struct ReserveFlightCommand {
    #[command(flatten)]
    pub trip: TripArgs,
}

impl ReserveFlightCommand {
    /// Execute the reserve-flight command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        self.trip.execute(TripType::Flight, global)
    }
}

/// Reserve a bus trip.
#[derive(Args)]
pub struct ReserveBusCommand {
    #[command(flatten)]
    pub trip: TripArgs,
}

impl ReserveBusCommand {
    /// Execute the reserve-bus command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        self.trip.execute(TripType::Bus, global)
    }
}
