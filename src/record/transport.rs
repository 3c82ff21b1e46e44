use std::cmp::Ordering;
use std::io;

use super::{parse_stored, prompt_name, Record};
use crate::error::StoreError;
use crate::input::{self, Prompter, Request};

/// A named means of transport with a cruising speed in km/h.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRecord {
    name: String,
    speed: f64,
}

fn valid_speed(speed: f64) -> bool {
    speed.is_finite() && speed > 0.0
}

impl TransportRecord {
    /// Build a transport; speed must be finite and strictly positive.
    pub fn new(name: impl Into<String>, speed: f64) -> Result<Self, StoreError> {
        let record = Self {
            name: name.into(),
            speed,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Record for TransportRecord {
    const KIND: &'static str = "Transport";
    const FIELD_COUNT: usize = 2;
    const HEADERS: &'static [&'static str] = &["Transport", "Speed (KM/h)"];

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), StoreError> {
        if valid_speed(self.speed) {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                field: "speed",
                value: self.speed,
            })
        }
    }

    // Slowest first; ties broken by name so the order is total.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.speed
            .total_cmp(&other.speed)
            .then_with(|| self.name.cmp(&other.name))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.speed.to_string()]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [name, speed] = fields else {
            return Err(format!("expected 2 fields, found {}", fields.len()));
        };
        let speed = parse_stored(speed, "speed")?;
        Self::new(*name, speed).map_err(|e| e.to_string())
    }

    fn table_row(&self) -> Vec<String> {
        vec![self.name.clone(), format!("{:>8.2}", self.speed)]
    }

    fn prompt(
        io: &mut dyn Prompter,
        name_free: &dyn Fn(&str) -> bool,
        current: Option<&Self>,
    ) -> io::Result<Self> {
        let name = prompt_name(io, Self::KIND, name_free, current.map(|c| c.name.as_str()))?;
        let req = Request::new(
            "Please input transport's speed (KM/h)",
            "speed",
            "Please input a speed that's a positive number",
        );
        let speed = input::field(
            io,
            req,
            current.map(|c| c.speed),
            input::number,
            |speed| valid_speed(*speed),
        )?;
        Ok(Self { name, speed })
    }
}
