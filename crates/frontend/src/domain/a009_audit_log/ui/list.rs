//! Audit log: list and filters only, nothing is ever submitted

use crate::shared::crud::entity::{CellValue, ColumnDef, CrudEntity, FilterDef, FilterKind, SelectOption};
use crate::shared::crud::form_fields::FormFields;
use contracts::domain::a009_audit_log::aggregate::{self, AuditEntry};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

const ACTION_OPTIONS: [SelectOption; 5] = [
    ("criar", "Criar"),
    ("editar", "Editar"),
    ("excluir", "Excluir"),
    ("login", "Login"),
    ("logout", "Logout"),
];

pub struct AuditEntity;

impl CrudEntity for AuditEntity {
    type Record = AuditEntry;
    type Payload = ();

    const KEY: &'static str = "a009_audit_log";
    const TITLE: &'static str = "Auditoria";
    const NEW_TITLE: &'static str = "";
    const EDIT_TITLE: &'static str = "";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;
    const READ_ONLY: bool = true;

    fn record_id(record: &AuditEntry) -> RecordId {
        record.id
    }

    fn display_name(record: &AuditEntry) -> String {
        format!("{} {} em {}", record.user, record.action, record.table)
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("data_hora", "Data/hora"),
            ColumnDef::new("usuario", "Usuário"),
            ColumnDef::new("acao", "Ação").center(),
            ColumnDef::new("tabela", "Tabela"),
            ColumnDef::new("registro_id", "Registro").right(),
            ColumnDef::new("ip", "IP"),
        ]
    }

    fn cells(record: &AuditEntry) -> Vec<CellValue> {
        let record_ref = record.record_ref_display();
        vec![
            CellValue::DateTime(record.occurred_at.clone()),
            CellValue::opt_text(Some(record.user.as_str())),
            CellValue::opt_text(Some(record.action.as_str())),
            CellValue::opt_text(Some(record.table.as_str())),
            CellValue::opt_text(Some(record_ref.as_str())),
            CellValue::opt_text(record.ip.as_deref()),
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::new("usuario", "Usuário", FilterKind::Text),
            FilterDef::new("acao", "Ação", FilterKind::Select(ACTION_OPTIONS.to_vec())),
            FilterDef::new("tabela", "Tabela", FilterKind::Text),
            FilterDef::new("data_inicio", "De", FilterKind::Date),
            FilterDef::new("data_fim", "Até", FilterKind::Date),
        ]
    }

    fn to_form(_record: &AuditEntry) -> FormFields {
        FormFields::new()
    }

    fn to_payload(_form: &FormFields) -> Result<(), FieldErrors> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockApiClient;
    use crate::shared::api::CrudError;
    use crate::shared::crud::form_modal::EntityFormModal;
    use crate::shared::crud::list_state::ListState;
    use crate::shared::crud::view_model::ListViewModel;
    use contracts::system::permissions::PermissionSet;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_read_only_even_with_full_grant() {
        let vm = ListViewModel::build::<AuditEntity>(&ListState::new(20), &PermissionSet::all());
        assert!(!vm.can_create);
        assert!(!vm.show_actions);

        let ctl = EntityFormModal::<AuditEntity>::new(Rc::new(MockApiClient::new()));
        let mut modal = EntityFormModal::<AuditEntity>::initial_state();
        assert!(matches!(
            ctl.open_create(&PermissionSet::all(), &mut modal),
            Err(CrudError::PermissionDenied(_))
        ));
    }

    #[test]
    fn test_numeric_and_text_record_refs() {
        let entry: AuditEntry = serde_json::from_value(json!({
            "id": 1,
            "usuario": "admin",
            "acao": "excluir",
            "tabela": "estados",
            "registro_id": 42,
            "data_hora": "2024-03-15T14:02:26Z"
        }))
        .unwrap();
        let cells = AuditEntity::cells(&entry);
        assert_eq!(cells[4], CellValue::text("42"));
        assert_eq!(cells[5], CellValue::Empty);
    }
}
