use crate::shared::crud::entity::{CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind};
use crate::shared::crud::form_fields::{checked, FieldValue, FormFields};
use crate::shared::date_utils::{format_date, today_iso};
use contracts::domain::a008_fleet_refueling::aggregate::{self, Refueling, RefuelingDto};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

pub struct RefuelingEntity;

impl CrudEntity for RefuelingEntity {
    type Record = Refueling;
    type Payload = RefuelingDto;

    const KEY: &'static str = "a008_fleet_refueling";
    const TITLE: &'static str = "Abastecimentos";
    const NEW_TITLE: &'static str = "Novo abastecimento";
    const EDIT_TITLE: &'static str = "Editar abastecimento";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &Refueling) -> RecordId {
        record.id
    }

    fn display_name(record: &Refueling) -> String {
        format!("abastecimento {} de {}", record.plate, format_date(&record.date))
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("placa", "Placa"),
            ColumnDef::new("data", "Data").center(),
            ColumnDef::new("litros", "Litros").right(),
            ColumnDef::new("valor_litro", "Valor do litro").right(),
            ColumnDef::new("valor_total", "Valor total").right(),
            ColumnDef::new("quilometragem", "Km").right(),
            ColumnDef::new("posto", "Posto"),
        ]
    }

    fn cells(record: &Refueling) -> Vec<CellValue> {
        vec![
            CellValue::text(&record.plate),
            CellValue::Date(record.date.clone()),
            CellValue::Number {
                value: record.liters,
                decimals: 2,
            },
            CellValue::Number {
                value: record.price_per_liter,
                decimals: 3,
            },
            CellValue::Money(record.total_cost()),
            record
                .odometer
                .map(|km| CellValue::Number {
                    value: km as f64,
                    decimals: 0,
                })
                .unwrap_or(CellValue::Empty),
            CellValue::opt_text(record.station.as_deref()),
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::new("placa", "Placa", FilterKind::Text),
            FilterDef::new("data_inicio", "De", FilterKind::Date),
            FilterDef::new("data_fim", "Até", FilterKind::Date),
        ]
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("placa", "Placa", FieldKind::Text)
                .required()
                .placeholder("ABC1D23"),
            FieldDef::new("data", "Data", FieldKind::Date)
                .required()
                .default_value(FieldValue::from(today_iso())),
            FieldDef::new("litros", "Litros", FieldKind::Number { step: "0.01" }).required(),
            FieldDef::new("valor_litro", "Valor do litro", FieldKind::Number { step: "0.001" }).required(),
            FieldDef::new("quilometragem", "Quilometragem", FieldKind::Integer),
            FieldDef::new("posto", "Posto", FieldKind::Text),
        ]
    }

    fn to_form(record: &Refueling) -> FormFields {
        FormFields::new()
            .with("placa", record.plate.as_str())
            .with("data", record.date.as_str())
            .with("litros", record.liters)
            .with("valor_litro", record.price_per_liter)
            .with("quilometragem", record.odometer.map(|km| km as f64))
            .with("posto", record.station.clone())
    }

    fn to_payload(form: &FormFields) -> Result<RefuelingDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = RefuelingDto {
            plate: form.text("placa").replace('-', "").to_uppercase(),
            date: form.text("data"),
            liters: form.number("litros", "Litros", &mut errors),
            price_per_liter: form.number("valor_litro", "Valor do litro", &mut errors),
            odometer: form.integer("quilometragem", "Quilometragem", &mut errors),
            station: form.opt_text("posto"),
        };
        checked(errors, dto, RefuelingDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        RefuelingEntity::default_form()
            .with("placa", "abc-1d23")
            .with("data", "2024-05-02")
            .with("litros", "40,5")
            .with("valor_litro", "5,79")
    }

    #[test]
    fn test_mercosul_plate_normalized() {
        let dto = RefuelingEntity::to_payload(&filled()).unwrap();
        assert_eq!(dto.plate, "ABC1D23");
        assert_eq!(dto.liters, Some(40.5));
        assert_eq!(dto.odometer, None);
        assert_eq!(dto.station, None);
    }

    #[test]
    fn test_liters_must_be_positive() {
        let errors = RefuelingEntity::to_payload(&filled().with("litros", "0")).unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["litros"]);
    }

    #[test]
    fn test_invalid_plate() {
        let errors = RefuelingEntity::to_payload(&filled().with("placa", "12ABCDE")).unwrap_err();
        assert!(errors.contains_key("placa"));
    }

    #[test]
    fn test_total_cost_column() {
        let record = Refueling {
            id: RecordId(1),
            plate: "ABC1234".into(),
            date: "2024-05-02".into(),
            liters: 40.0,
            price_per_liter: 5.5,
            odometer: Some(120_000),
            station: None,
            external_id: None,
        };
        let cells = RefuelingEntity::cells(&record);
        assert_eq!(cells.len(), RefuelingEntity::columns().len());
        assert_eq!(cells[4], CellValue::Money(220.0));
        assert_eq!(RefuelingEntity::to_form(&record).text("quilometragem"), "120000");
    }
}
