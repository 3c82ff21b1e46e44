// Simulation flow: pick two locations and a transport, report how far apart
// the locations are and how long the trip takes, and repeat until the user
// stops.

use anyhow::Result;
use tracing::debug;

use crate::geo;
use crate::input::{self, Prompter};
use crate::record::{LocationRecord, Record, TransportRecord};
use crate::store::Store;
use crate::ui;

pub const NO_TRANSPORT_MSG: &str = "Please add a transport to be used";
pub const TOO_FEW_LOCATIONS_MSG: &str = "Please add at least 2 locations to travel to-and-fro";

/// One computed trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip<'a> {
    pub from: &'a LocationRecord,
    pub to: &'a LocationRecord,
    pub transport: &'a TransportRecord,
    pub distance_km: f64,
    pub hours: f64,
}

impl<'a> Trip<'a> {
    pub fn new(
        from: &'a LocationRecord,
        to: &'a LocationRecord,
        transport: &'a TransportRecord,
    ) -> Self {
        let distance_km = geo::distance_km(from, to);
        Self {
            from,
            to,
            transport,
            distance_km,
            hours: geo::duration_hours(distance_km, transport.speed()),
        }
    }

    /// Lines shown to the user.
    pub fn report(&self) -> Vec<String> {
        let (h, m) = geo::hours_minutes(self.hours);
        vec![
            format!(
                "{} -> {} by {}",
                self.from.name(),
                self.to.name(),
                self.transport.name()
            ),
            format!("distance: {:.2} km", self.distance_km),
            format!("estimated time: {:.2} hours ({h} h {m} min)", self.hours),
        ]
    }
}

/// Run simulations until the user answers N to continuing. Returns early,
/// with a message, when there is nothing to simulate with.
pub fn run_simulation(
    io: &mut dyn Prompter,
    locations: &Store<LocationRecord>,
    transports: &Store<TransportRecord>,
) -> Result<()> {
    if transports.is_empty() {
        io.warn(NO_TRANSPORT_MSG);
        return Ok(());
    }
    if locations.len() < 2 {
        io.warn(TOO_FEW_LOCATIONS_MSG);
        return Ok(());
    }

    loop {
        ui::render_store(io, locations);
        let start = input::select_index(io, "starting location", locations.len())?;
        let from = locations.get_by_index(start)?;
        let dest = input::select_index(io, "destination", locations.len())?;
        let to = locations.get_by_index(dest)?;

        ui::render_store(io, transports);
        let choice = input::select_index(io, "transport of your choice", transports.len())?;
        let transport = transports.get_by_index(choice)?;

        let trip = Trip::new(from, to, transport);
        debug!(
            from = from.name(),
            to = to.name(),
            distance_km = trip.distance_km,
            "simulated trip"
        );
        for line in trip.report() {
            io.say(&line);
        }

        if input::confirm_with(io, "Continue the simulation?", "N")? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Scripted;

    fn equator() -> Store<LocationRecord> {
        Store::from_records([
            LocationRecord::new("A", 0.0, 0.0).unwrap(),
            LocationRecord::new("B", 0.0, 90.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn blocked_without_transport() {
        let mut io = Scripted::new(Vec::<String>::new());
        run_simulation(&mut io, &equator(), &Store::new()).unwrap();
        assert_eq!(io.output(), NO_TRANSPORT_MSG);
    }

    #[test]
    fn blocked_with_one_location() {
        let locations =
            Store::from_records([LocationRecord::new("A", 0.0, 0.0).unwrap()]).unwrap();
        let transports =
            Store::from_records([TransportRecord::new("Plane", 500.0).unwrap()]).unwrap();
        let mut io = Scripted::new(Vec::<String>::new());
        run_simulation(&mut io, &locations, &transports).unwrap();
        assert_eq!(io.output(), TOO_FEW_LOCATIONS_MSG);
    }

    #[test]
    fn quarter_equator_by_plane() {
        let transports =
            Store::from_records([TransportRecord::new("Plane", 500.0).unwrap()]).unwrap();
        let mut io = Scripted::new(["1", "2", "1", "n"]);
        run_simulation(&mut io, &equator(), &transports).unwrap();

        let out = io.output();
        assert!(out.contains("A -> B by Plane"));
        assert!(out.contains("distance: 10007.54 km"));
        assert!(out.contains("estimated time: 20.02 hours (20 h 1 min)"));
    }

    #[test]
    fn keeps_going_until_stopped() {
        let transports =
            Store::from_records([TransportRecord::new("Plane", 500.0).unwrap()]).unwrap();
        let mut io = Scripted::new(["1", "2", "1", "Y", "2", "1", "1", "N"]);
        run_simulation(&mut io, &equator(), &transports).unwrap();
        assert!(io.output().contains("B -> A by Plane"));
        assert_eq!(io.remaining(), 0);
    }

    #[test]
    fn trip_report_for_same_place() {
        let a = LocationRecord::new("A", 10.0, 10.0).unwrap();
        let walk = TransportRecord::new("Walk", 5.0).unwrap();
        let trip = Trip::new(&a, &a, &walk);
        assert_eq!(trip.distance_km, 0.0);
        assert_eq!(trip.hours, 0.0);
    }
}
