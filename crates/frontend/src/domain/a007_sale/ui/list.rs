use crate::domain::a005_payment_method::PaymentMethodEntity;
use crate::shared::crud::entity::{
    CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind, LookupDef,
    SelectOption, Tone,
};
use crate::shared::crud::form_fields::{checked, FieldValue, FormFields};
use crate::shared::date_utils::{format_date, today_iso};
use contracts::domain::a007_sale::aggregate::{self, Sale, SaleDto, SaleStatus};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

const PAYMENT_METHOD_LOOKUP: LookupDef = LookupDef {
    endpoint: PaymentMethodEntity::ENDPOINT,
    label_field: "nome",
};

fn status_options() -> Vec<SelectOption> {
    SaleStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
}

/// Unknown situations from the backend are shown as they came
fn status_badge(record: &Sale) -> CellValue {
    match record.status() {
        Some(status) => CellValue::Badge {
            label: status.label().to_string(),
            tone: match status {
                SaleStatus::Aberta => Tone::Warning,
                SaleStatus::Faturada => Tone::Success,
                SaleStatus::Cancelada => Tone::Danger,
            },
        },
        None if record.status.trim().is_empty() => CellValue::Empty,
        None => CellValue::Badge {
            label: record.status.clone(),
            tone: Tone::Neutral,
        },
    }
}

pub struct SaleEntity;

impl CrudEntity for SaleEntity {
    type Record = Sale;
    type Payload = SaleDto;

    const KEY: &'static str = "a007_sale";
    const TITLE: &'static str = "Vendas";
    const NEW_TITLE: &'static str = "Nova venda";
    const EDIT_TITLE: &'static str = "Editar venda";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &Sale) -> RecordId {
        record.id
    }

    fn display_name(record: &Sale) -> String {
        match &record.number {
            Some(number) => format!("venda {} de {}", number, record.customer),
            None => format!("venda de {} em {}", record.customer, format_date(&record.sale_date)),
        }
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("numero", "Número"),
            ColumnDef::new("cliente", "Cliente"),
            ColumnDef::new("data_venda", "Data").center(),
            ColumnDef::new("forma_pagamento_id", "Forma de pagamento"),
            ColumnDef::new("valor_total", "Valor total").right(),
            ColumnDef::new("situacao", "Situação").center(),
        ]
    }

    fn cells(record: &Sale) -> Vec<CellValue> {
        vec![
            CellValue::opt_text(record.number.as_deref()),
            CellValue::text(&record.customer),
            CellValue::Date(record.sale_date.clone()),
            CellValue::opt_text(record.payment_method_name.as_deref()),
            CellValue::Money(record.total),
            status_badge(record),
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::new("cliente", "Cliente", FilterKind::Text),
            FilterDef::new("situacao", "Situação", FilterKind::Select(status_options())),
            FilterDef::new("data_inicio", "De", FilterKind::Date),
            FilterDef::new("data_fim", "Até", FilterKind::Date),
        ]
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("cliente", "Cliente", FieldKind::Text).required(),
            FieldDef::new("data_venda", "Data da venda", FieldKind::Date)
                .required()
                .default_value(FieldValue::from(today_iso())),
            FieldDef::new("valor_total", "Valor total", FieldKind::Number { step: "0.01" })
                .required()
                .placeholder("0,00"),
            FieldDef::new("situacao", "Situação", FieldKind::Select(status_options()))
                .required()
                .default_value(FieldValue::from(SaleStatus::Aberta.as_str())),
            FieldDef::new(
                "forma_pagamento_id",
                "Forma de pagamento",
                FieldKind::Lookup(PAYMENT_METHOD_LOOKUP),
            ),
            FieldDef::new("observacao", "Observação", FieldKind::TextArea),
        ]
    }

    fn to_form(record: &Sale) -> FormFields {
        FormFields::new()
            .with("cliente", record.customer.as_str())
            .with("data_venda", record.sale_date.as_str())
            .with("valor_total", record.total)
            .with("situacao", record.status.as_str())
            .with("forma_pagamento_id", record.payment_method_id)
            .with("observacao", record.notes.clone())
    }

    fn to_payload(form: &FormFields) -> Result<SaleDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = SaleDto {
            customer: form.text("cliente"),
            sale_date: form.text("data_venda"),
            total: form.number("valor_total", "Valor total", &mut errors),
            status: SaleStatus::from_code(&form.text("situacao")),
            payment_method_id: form.record_id("forma_pagamento_id", "Forma de pagamento", &mut errors),
            notes: form.opt_text("observacao"),
        };
        checked(errors, dto, SaleDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sale(status: &str) -> Sale {
        serde_json::from_value(json!({
            "id": 10,
            "cliente": "Mercado Central",
            "data_venda": "2024-03-15",
            "valor_total": 1234.5,
            "situacao": status
        }))
        .unwrap()
    }

    #[test]
    fn test_new_sale_defaults() {
        let form = SaleEntity::default_form();
        assert_eq!(form.text("situacao"), "aberta");
        assert_eq!(form.text("data_venda"), today_iso());
    }

    #[test]
    fn test_payload_serializes_status() {
        let form = SaleEntity::default_form()
            .with("cliente", "Mercado Central")
            .with("data_venda", "2024-03-15")
            .with("valor_total", "1.234,50")
            .with("situacao", "faturada");
        let dto = SaleEntity::to_payload(&form).unwrap();
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body["situacao"], "faturada");
        assert_eq!(body["valor_total"], 1234.5);
        assert_eq!(body["forma_pagamento_id"], serde_json::Value::Null);
    }

    #[test]
    fn test_negative_total_rejected() {
        let form = SaleEntity::default_form()
            .with("cliente", "X")
            .with("valor_total", "-1");
        let errors = SaleEntity::to_payload(&form).unwrap_err();
        assert!(errors.contains_key("valor_total"));
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(
            status_badge(&sale("cancelada")),
            CellValue::Badge {
                label: "Cancelada".into(),
                tone: Tone::Danger
            }
        );
        assert_eq!(
            status_badge(&sale("devolvida")),
            CellValue::Badge {
                label: "devolvida".into(),
                tone: Tone::Neutral
            }
        );
    }

    #[test]
    fn test_display_name_without_number() {
        assert_eq!(
            SaleEntity::display_name(&sale("aberta")),
            "venda de Mercado Central em 15/03/2024"
        );
    }
}
