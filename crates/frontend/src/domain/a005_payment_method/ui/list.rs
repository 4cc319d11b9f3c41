use crate::shared::crud::entity::{CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind};
use crate::shared::crud::form_fields::{checked, FormFields};
use contracts::domain::a005_payment_method::aggregate::{self, PaymentMethod, PaymentMethodDto};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

pub struct PaymentMethodEntity;

impl CrudEntity for PaymentMethodEntity {
    type Record = PaymentMethod;
    type Payload = PaymentMethodDto;

    const KEY: &'static str = "a005_payment_method";
    const TITLE: &'static str = "Formas de pagamento";
    const NEW_TITLE: &'static str = "Nova forma de pagamento";
    const EDIT_TITLE: &'static str = "Editar forma de pagamento";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &PaymentMethod) -> RecordId {
        record.id
    }

    fn display_name(record: &PaymentMethod) -> String {
        record.name.clone()
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("taxa_percentual", "Taxa (%)").right(),
            ColumnDef::new("prazo_dias", "Prazo (dias)").right(),
            ColumnDef::new("ativo", "Ativo").center(),
        ]
    }

    fn cells(record: &PaymentMethod) -> Vec<CellValue> {
        vec![
            CellValue::text(&record.name),
            CellValue::Number {
                value: record.fee_percent,
                decimals: 2,
            },
            CellValue::Number {
                value: record.term_days as f64,
                decimals: 0,
            },
            CellValue::active(record.active),
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::new("nome", "Nome", FilterKind::Text),
            FilterDef::active(),
        ]
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("nome", "Nome", FieldKind::Text)
                .required()
                .placeholder("Ex.: Cartão de crédito"),
            FieldDef::new("taxa_percentual", "Taxa (%)", FieldKind::Number { step: "0.01" })
                .placeholder("0 a 100"),
            FieldDef::new("prazo_dias", "Prazo (dias)", FieldKind::Integer).placeholder("0 a 365"),
            FieldDef::new("ativo", "Ativo", FieldKind::Checkbox),
        ]
    }

    fn to_form(record: &PaymentMethod) -> FormFields {
        FormFields::new()
            .with("nome", record.name.as_str())
            .with("taxa_percentual", record.fee_percent)
            .with("prazo_dias", record.term_days as f64)
            .with("ativo", record.active)
    }

    fn to_payload(form: &FormFields) -> Result<PaymentMethodDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = PaymentMethodDto {
            name: form.text("nome"),
            fee_percent: form.number("taxa_percentual", "Taxa (%)", &mut errors),
            term_days: form.integer("prazo_dias", "Prazo (dias)", &mut errors),
            active: form.flag("ativo"),
        };
        checked(errors, dto, PaymentMethodDto::validate)
    }
}
