//! Vehicle entity - a stock item of the vehicle inventory

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Gearbox type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    /// Wire/storage representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Automatic",
        }
    }
}

impl FromStr for Transmission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manual" => Ok(Self::Manual),
            "Automatic" => Ok(Self::Automatic),
            _ => Err(format!("unknown transmission: {s}")),
        }
    }
}

/// Fuel or drive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    #[serde(rename = "Plugin Hybrid")]
    PluginHybrid,
}

impl FuelType {
    /// Wire/storage representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
            Self::PluginHybrid => "Plugin Hybrid",
        }
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Petrol" => Ok(Self::Petrol),
            "Diesel" => Ok(Self::Diesel),
            "Hybrid" => Ok(Self::Hybrid),
            "Electric" => Ok(Self::Electric),
            "Plugin Hybrid" => Ok(Self::PluginHybrid),
            _ => Err(format!("unknown fuel type: {s}")),
        }
    }
}

/// Body style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Cabriolet,
    Coupe,
    Estate,
    Hatchback,
    #[serde(rename = "MPV")]
    Mpv,
    Saloon,
    Van,
    #[serde(rename = "SUV")]
    Suv,
}

impl BodyType {
    /// Wire/storage representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cabriolet => "Cabriolet",
            Self::Coupe => "Coupe",
            Self::Estate => "Estate",
            Self::Hatchback => "Hatchback",
            Self::Mpv => "MPV",
            Self::Saloon => "Saloon",
            Self::Van => "Van",
            Self::Suv => "SUV",
        }
    }
}

impl FromStr for BodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cabriolet" => Ok(Self::Cabriolet),
            "Coupe" => Ok(Self::Coupe),
            "Estate" => Ok(Self::Estate),
            "Hatchback" => Ok(Self::Hatchback),
            "MPV" => Ok(Self::Mpv),
            "Saloon" => Ok(Self::Saloon),
            "Van" => Ok(Self::Van),
            "SUV" => Ok(Self::Suv),
            _ => Err(format!("unknown body type: {s}")),
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input for a new vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub body_type: BodyType,
    /// Litres, strictly positive
    pub engine_size: f64,
    pub transmission: Transmission,
    /// Whole years, never negative
    pub vehicle_age: i32,
    pub fuel_type: FuelType,
    pub colour: String,
    pub vehicle_price: f64,
}

/// Vehicle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: RecordId,
    pub make: String,
    pub model: String,
    pub body_type: BodyType,
    pub engine_size: f64,
    pub transmission: Transmission,
    pub vehicle_age: i32,
    pub fuel_type: FuelType,
    pub colour: String,
    pub vehicle_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_available: bool,
}

impl Vehicle {
    /// Create a new, available vehicle
    pub fn new(id: RecordId, draft: NewVehicle, now: DateTime<Utc>) -> Self {
        Self {
            id,
            make: draft.make,
            model: draft.model,
            body_type: draft.body_type,
            engine_size: draft.engine_size,
            transmission: draft.transmission,
            vehicle_age: draft.vehicle_age,
            fuel_type: draft.fuel_type,
            colour: draft.colour,
            vehicle_price: draft.vehicle_price,
            created_at: now,
            updated_at: now,
            is_available: true,
        }
    }
}
