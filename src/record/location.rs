use std::cmp::Ordering;
use std::io;

use super::{parse_stored, prompt_name, Record};
use crate::error::{StoreError, TransformError};
use crate::input::{self, Prompter, Request};

/// One coordinate axis, entered as a magnitude plus a hemisphere letter.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    pub field: &'static str,
    /// Hemisphere letter for positive values.
    pub positive: char,
    /// Hemisphere letter for negative values.
    pub negative: char,
    /// Largest allowed magnitude.
    pub limit: f64,
    pub example: &'static str,
    pub hemispheres: &'static str,
}

pub const LATITUDE: Axis = Axis {
    field: "latitude",
    positive: 'N',
    negative: 'S',
    limit: 90.0,
    example: "3.1319N",
    hemispheres: "N(North) or S(South)",
};

pub const LONGITUDE: Axis = Axis {
    field: "longitude",
    positive: 'E',
    negative: 'W',
    limit: 180.0,
    example: "101.6841E",
    hemispheres: "E(East) or W(West)",
};

impl Axis {
    /// Split "3.1319N" into magnitude and sign (true for the positive
    /// hemisphere). The letter is case-insensitive.
    pub fn parse(&self, raw: &str) -> Result<(f64, bool), TransformError> {
        let raw = raw.trim();
        let missing = TransformError::MissingHemisphere {
            expected: self.hemispheres,
        };
        let letter = raw.chars().last().ok_or_else(|| missing.clone())?;
        let positive = match letter.to_ascii_uppercase() {
            c if c == self.positive => true,
            c if c == self.negative => false,
            _ => return Err(missing),
        };
        let digits = &raw[..raw.len() - letter.len_utf8()];
        let magnitude = digits
            .parse::<f64>()
            .map_err(|_| TransformError::NotANumber(digits.to_string()))?;
        // The hemisphere letter carries the sign.
        if magnitude.is_sign_negative() {
            return Err(TransformError::SignedMagnitude(raw.to_string()));
        }
        Ok((magnitude, positive))
    }

    /// Signed degrees within range.
    pub fn contains(&self, degrees: f64) -> bool {
        degrees.is_finite() && (-self.limit..=self.limit).contains(&degrees)
    }

    /// "  3.1319  N" style cell.
    pub fn format(&self, degrees: f64) -> String {
        let letter = if degrees >= 0.0 {
            self.positive
        } else {
            self.negative
        };
        format!("{:>8.4}  {letter}", degrees.abs())
    }

    fn check(&self, degrees: f64) -> Result<(), StoreError> {
        if self.contains(degrees) {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                field: self.field,
                value: degrees,
            })
        }
    }

    fn prompt(&self, io: &mut dyn Prompter, current: Option<f64>) -> io::Result<f64> {
        let req = Request::new(
            format!(
                "Please input location's {} (example: {})",
                self.field, self.example
            ),
            format!("coordinate (example: {})", self.example),
            format!(
                "Please input the {} of the location, which should be between 0 and {}, followed by either {} without any spaces",
                self.field, self.limit, self.hemispheres
            ),
        );
        input::field(
            io,
            req,
            current,
            |raw| {
                let (magnitude, positive) = self.parse(raw)?;
                Ok(if positive { magnitude } else { -magnitude })
            },
            |degrees| self.contains(*degrees),
        )
    }
}

/// A named place with signed decimal-degree coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl LocationRecord {
    /// Build a location, checking both coordinate ranges.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self, StoreError> {
        let record = Self {
            name: name.into(),
            latitude,
            longitude,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Record for LocationRecord {
    const KIND: &'static str = "Location";
    const FIELD_COUNT: usize = 3;
    const HEADERS: &'static [&'static str] = &["Location", "Latitude", "Longitude"];

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), StoreError> {
        LATITUDE.check(self.latitude)?;
        LONGITUDE.check(self.longitude)
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.latitude.to_string(),
            self.longitude.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [name, latitude, longitude] = fields else {
            return Err(format!("expected 3 fields, found {}", fields.len()));
        };
        let latitude = parse_stored(latitude, "latitude")?;
        let longitude = parse_stored(longitude, "longitude")?;
        Self::new(*name, latitude, longitude).map_err(|e| e.to_string())
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            LATITUDE.format(self.latitude),
            LONGITUDE.format(self.longitude),
        ]
    }

    fn prompt(
        io: &mut dyn Prompter,
        name_free: &dyn Fn(&str) -> bool,
        current: Option<&Self>,
    ) -> io::Result<Self> {
        let name = prompt_name(io, Self::KIND, name_free, current.map(|c| c.name.as_str()))?;
        let latitude = LATITUDE.prompt(io, current.map(|c| c.latitude))?;
        let longitude = LONGITUDE.prompt(io, current.map(|c| c.longitude))?;
        Ok(Self {
            name,
            latitude,
            longitude,
        })
    }
}
