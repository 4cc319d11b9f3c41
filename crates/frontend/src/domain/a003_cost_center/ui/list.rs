use crate::shared::crud::entity::{CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind};
use crate::shared::crud::form_fields::{checked, FieldValue, FormFields};
use contracts::domain::a003_cost_center::aggregate::{self, CostCenter, CostCenterDto, DEFAULT_COLOR};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

pub struct CostCenterEntity;

impl CrudEntity for CostCenterEntity {
    type Record = CostCenter;
    type Payload = CostCenterDto;

    const KEY: &'static str = "a003_cost_center";
    const TITLE: &'static str = "Centros de custo";
    const NEW_TITLE: &'static str = "Novo centro de custo";
    const EDIT_TITLE: &'static str = "Editar centro de custo";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &CostCenter) -> RecordId {
        record.id
    }

    fn display_name(record: &CostCenter) -> String {
        format!("{} - {}", record.code, record.name)
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("codigo", "Código"),
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("cor", "Cor").center(),
            ColumnDef::new("ativo", "Ativo").center(),
        ]
    }

    fn cells(record: &CostCenter) -> Vec<CellValue> {
        vec![
            CellValue::text(&record.code),
            CellValue::text(&record.name),
            match record.color.as_deref() {
                Some(color) if !color.trim().is_empty() => CellValue::Color(color.to_string()),
                _ => CellValue::Empty,
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
            FieldDef::new("codigo", "Código", FieldKind::Text)
                .required()
                .placeholder("Ex.: ADM"),
            FieldDef::new("nome", "Nome", FieldKind::Text).required(),
            FieldDef::new("cor", "Cor", FieldKind::Color)
                .default_value(FieldValue::from(DEFAULT_COLOR)),
            FieldDef::new("ativo", "Ativo", FieldKind::Checkbox),
        ]
    }

    fn to_form(record: &CostCenter) -> FormFields {
        FormFields::new()
            .with("codigo", record.code.as_str())
            .with("nome", record.name.as_str())
            .with(
                "cor",
                record.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            )
            .with("ativo", record.active)
    }

    fn to_payload(form: &FormFields) -> Result<CostCenterDto, FieldErrors> {
        let dto = CostCenterDto {
            code: form.text("codigo"),
            name: form.text("nome"),
            color: form
                .opt_text("cor")
                .unwrap_or_else(|| DEFAULT_COLOR.to_string())
                .to_uppercase(),
            active: form.flag("ativo"),
        };
        checked(FieldErrors::new(), dto, CostCenterDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_has_default_color() {
        let form = CostCenterEntity::default_form();
        assert_eq!(form.text("cor"), DEFAULT_COLOR);
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let form = CostCenterEntity::default_form()
            .with("codigo", "ADM")
            .with("nome", "Administrativo")
            .with("cor", "azul");
        let errors = CostCenterEntity::to_payload(&form).unwrap_err();
        assert!(errors.contains_key("cor"));
    }

    #[test]
    fn test_missing_color_renders_empty_cell() {
        let record = CostCenter {
            id: RecordId(2),
            code: "COM".into(),
            name: "Comercial".into(),
            color: None,
            active: false,
            external_id: None,
        };
        let cells = CostCenterEntity::cells(&record);
        assert_eq!(cells[2], CellValue::Empty);
        assert_eq!(cells[3], CellValue::active(false));
        assert_eq!(CostCenterEntity::to_form(&record).text("cor"), DEFAULT_COLOR);
    }
}
