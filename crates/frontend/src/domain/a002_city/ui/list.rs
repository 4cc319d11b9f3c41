use crate::domain::a001_state::StateEntity;
use crate::shared::crud::entity::{
    CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind, LookupDef,
};
use crate::shared::crud::form_fields::{checked, FormFields};
use contracts::domain::a002_city::aggregate::{self, City, CityDto};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

const STATE_LOOKUP: LookupDef = LookupDef {
    endpoint: StateEntity::ENDPOINT,
    label_field: "nome",
};

pub struct CityEntity;

impl CityEntity {
    /// "Salvador" + "BA" → "BA - Bahia"; falls back to the raw id
    fn state_label(record: &City) -> String {
        match (&record.state_code, &record.state_name) {
            (Some(code), Some(name)) => format!("{} - {}", code, name),
            (None, Some(name)) => name.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => format!("#{}", record.state_id),
        }
    }
}

impl CrudEntity for CityEntity {
    type Record = City;
    type Payload = CityDto;

    const KEY: &'static str = "a002_city";
    const TITLE: &'static str = "Cidades";
    const NEW_TITLE: &'static str = "Nova cidade";
    const EDIT_TITLE: &'static str = "Editar cidade";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &City) -> RecordId {
        record.id
    }

    fn display_name(record: &City) -> String {
        match &record.state_code {
            Some(code) => format!("{}/{}", record.name, code),
            None => record.name.clone(),
        }
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("estado_id", "Estado"),
            ColumnDef::new("codigo_ibge", "Código IBGE").center(),
            ColumnDef::new("ativo", "Ativo").center(),
        ]
    }

    fn cells(record: &City) -> Vec<CellValue> {
        vec![
            CellValue::text(&record.name),
            CellValue::text(Self::state_label(record)),
            CellValue::opt_text(record.ibge_code.as_deref()),
            CellValue::active(record.active),
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::new("nome", "Nome", FilterKind::Text),
            FilterDef::new("estado_id", "Estado", FilterKind::Lookup(STATE_LOOKUP)),
        ]
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("nome", "Nome", FieldKind::Text).required(),
            FieldDef::new("estado_id", "Estado", FieldKind::Lookup(STATE_LOOKUP)).required(),
            FieldDef::new("codigo_ibge", "Código IBGE", FieldKind::Text).placeholder("7 dígitos"),
            FieldDef::new("ativo", "Ativo", FieldKind::Checkbox),
        ]
    }

    fn to_form(record: &City) -> FormFields {
        FormFields::new()
            .with("nome", record.name.as_str())
            .with("estado_id", Some(record.state_id))
            .with("codigo_ibge", record.ibge_code.clone())
            .with("ativo", record.active)
    }

    fn to_payload(form: &FormFields) -> Result<CityDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = CityDto {
            name: form.text("nome"),
            state_id: form.record_id("estado_id", "Estado", &mut errors),
            ibge_code: form.opt_text("codigo_ibge"),
            active: form.flag("ativo"),
        };
        checked(errors, dto, CityDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_required() {
        let form = CityEntity::default_form().with("nome", "Salvador");
        let errors = CityEntity::to_payload(&form).unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["estado_id"]);
    }

    #[test]
    fn test_payload_parses_lookup_id() {
        let form = CityEntity::default_form()
            .with("nome", "Salvador")
            .with("estado_id", "29")
            .with("codigo_ibge", "2927408");
        let dto = CityEntity::to_payload(&form).unwrap();
        assert_eq!(dto.state_id, Some(RecordId(29)));
        assert_eq!(dto.ibge_code.as_deref(), Some("2927408"));
        assert!(dto.active);
    }

    #[test]
    fn test_state_label_fallbacks() {
        let mut city = City {
            id: RecordId(1),
            name: "Salvador".into(),
            state_id: RecordId(29),
            state_name: Some("Bahia".into()),
            state_code: Some("BA".into()),
            ibge_code: None,
            active: true,
            external_id: None,
        };
        assert_eq!(CityEntity::state_label(&city), "BA - Bahia");
        city.state_name = None;
        city.state_code = None;
        assert_eq!(CityEntity::state_label(&city), "#29");
        assert_eq!(CityEntity::cells(&city)[2], CellValue::Empty);
    }
}
