use crate::domain::common::RecordId;
use crate::shared::validation::{FieldErrors, FieldFormat, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/abastecimentos";
pub const PERMISSION_PREFIX: &str = "abastecimentos";

/// Abastecimento de veículo da frota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refueling {
    pub id: RecordId,
    #[serde(rename = "placa")]
    pub plate: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "litros")]
    pub liters: f64,
    #[serde(rename = "valor_litro")]
    pub price_per_liter: f64,
    #[serde(rename = "quilometragem", default)]
    pub odometer: Option<i64>,
    #[serde(rename = "posto", default)]
    pub station: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
}

impl Refueling {
    pub fn total_cost(&self) -> f64 {
        self.liters * self.price_per_liter
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefuelingDto {
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "litros")]
    pub liters: Option<f64>,
    #[serde(rename = "valor_litro")]
    pub price_per_liter: Option<f64>,
    #[serde(rename = "quilometragem")]
    pub odometer: Option<i64>,
    #[serde(rename = "posto")]
    pub station: Option<String>,
}

impl RefuelingDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .text("placa", "Placa", &self.plate, ValidationRules::required().format(FieldFormat::LicensePlate))
            .text("data", "Data", &self.date, ValidationRules::required().format(FieldFormat::IsoDate))
            .number("litros", "Litros", self.liters, ValidationRules::required().positive())
            .number("valor_litro", "Valor do litro", self.price_per_liter, ValidationRules::required().positive())
            .number(
                "quilometragem",
                "Quilometragem",
                self.odometer.map(|km| km as f64),
                ValidationRules::none().integer().at_least(0.0),
            )
            .finish()
    }
}
