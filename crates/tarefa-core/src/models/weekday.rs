//! Weekday names attached to dated tasks.

use std::str::FromStr;

use jiff::civil;
use serde::{Deserialize, Serialize};

/// Day of the week, stored under its Portuguese name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Domingo,
    Segunda,
    Terca,
    Quarta,
    Quinta,
    Sexta,
    Sabado,
}

impl From<civil::Weekday> for Weekday {
    fn from(day: civil::Weekday) -> Self {
        match day {
            civil::Weekday::Sunday => Weekday::Domingo,
            civil::Weekday::Monday => Weekday::Segunda,
            civil::Weekday::Tuesday => Weekday::Terca,
            civil::Weekday::Wednesday => Weekday::Quarta,
            civil::Weekday::Thursday => Weekday::Quinta,
            civil::Weekday::Friday => Weekday::Sexta,
            civil::Weekday::Saturday => Weekday::Sabado,
        }
    }
}

impl From<civil::Date> for Weekday {
    fn from(date: civil::Date) -> Self {
        date.weekday().into()
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domingo" => Ok(Weekday::Domingo),
            "segunda" => Ok(Weekday::Segunda),
            "terca" => Ok(Weekday::Terca),
            "quarta" => Ok(Weekday::Quarta),
            "quinta" => Ok(Weekday::Quinta),
            "sexta" => Ok(Weekday::Sexta),
            "sabado" => Ok(Weekday::Sabado),
            _ => Err(format!("Invalid weekday: {s}")),
        }
    }
}

impl Weekday {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Domingo => "domingo",
            Weekday::Segunda => "segunda",
            Weekday::Terca => "terca",
            Weekday::Quarta => "quarta",
            Weekday::Quinta => "quinta",
            Weekday::Sexta => "sexta",
            Weekday::Sabado => "sabado",
        }
    }

    /// Full name with accents, as shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Domingo => "Domingo",
            Weekday::Segunda => "Segunda-feira",
            Weekday::Terca => "Terça-feira",
            Weekday::Quarta => "Quarta-feira",
            Weekday::Quinta => "Quinta-feira",
            Weekday::Sexta => "Sexta-feira",
            Weekday::Sabado => "Sábado",
        }
    }
}
