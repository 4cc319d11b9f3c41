use crate::shared::crud::entity::{CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind};
use crate::shared::crud::form_fields::{checked, FormFields};
use contracts::domain::a001_state::aggregate::{self, State, StateDto};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

pub struct StateEntity;

impl CrudEntity for StateEntity {
    type Record = State;
    type Payload = StateDto;

    const KEY: &'static str = "a001_state";
    const TITLE: &'static str = "Estados";
    const NEW_TITLE: &'static str = "Novo estado";
    const EDIT_TITLE: &'static str = "Editar estado";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &State) -> RecordId {
        record.id
    }

    fn display_name(record: &State) -> String {
        record.name.clone()
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("sigla", "Sigla").center(),
            ColumnDef::new("ativo", "Ativo").center(),
        ]
    }

    fn cells(record: &State) -> Vec<CellValue> {
        vec![
            CellValue::text(&record.name),
            CellValue::text(&record.code),
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
                .placeholder("Ex.: Bahia"),
            FieldDef::new("sigla", "Sigla", FieldKind::Text)
                .required()
                .placeholder("BA"),
            FieldDef::new("ativo", "Ativo", FieldKind::Checkbox),
        ]
    }

    fn to_form(record: &State) -> FormFields {
        FormFields::new()
            .with("nome", record.name.as_str())
            .with("sigla", record.code.as_str())
            .with("ativo", record.active)
    }

    fn to_payload(form: &FormFields) -> Result<StateDto, FieldErrors> {
        let dto = StateDto {
            name: form.text("nome"),
            code: form.text("sigla").to_uppercase(),
            active: form.flag("ativo"),
        };
        checked(FieldErrors::new(), dto, StateDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigla_is_upper_cased() {
        let form = FormFields::new()
            .with("nome", " Bahia ")
            .with("sigla", "ba")
            .with("ativo", false);
        let dto = StateEntity::to_payload(&form).unwrap();
        assert_eq!(dto.name, "Bahia");
        assert_eq!(dto.code, "BA");
        assert!(!dto.active);
    }

    #[test]
    fn test_defaults_are_active() {
        let form = StateEntity::default_form();
        assert!(form.flag("ativo"));
        assert_eq!(form.text("nome"), "");
    }

    #[test]
    fn test_form_round_trips_record() {
        let record = State {
            id: RecordId(5),
            name: "Ceará".into(),
            code: "CE".into(),
            active: true,
            external_id: None,
        };
        let dto = StateEntity::to_payload(&StateEntity::to_form(&record)).unwrap();
        assert_eq!(dto.name, "Ceará");
        assert_eq!(dto.code, "CE");
    }
}
