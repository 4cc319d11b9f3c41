use crate::shared::crud::entity::{
    CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind, LookupDef,
    SelectOption, Tone,
};
use crate::shared::crud::form_fields::{checked, FormFields};
use contracts::domain::a006_chart_of_accounts::aggregate::{self, Account, AccountDto, AccountKind};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

const PARENT_LOOKUP: LookupDef = LookupDef {
    endpoint: aggregate::ENDPOINT,
    label_field: "nome",
};

fn kind_options() -> Vec<SelectOption> {
    AccountKind::ALL.iter().map(|k| (k.as_str(), k.label())).collect()
}

fn kind_badge(kind: AccountKind) -> CellValue {
    CellValue::Badge {
        label: kind.label().to_string(),
        tone: match kind {
            AccountKind::Receita => Tone::Success,
            AccountKind::Despesa => Tone::Danger,
        },
    }
}

pub struct AccountEntity;

impl CrudEntity for AccountEntity {
    type Record = Account;
    type Payload = AccountDto;

    const KEY: &'static str = "a006_chart_of_accounts";
    const TITLE: &'static str = "Plano de contas";
    const NEW_TITLE: &'static str = "Nova conta";
    const EDIT_TITLE: &'static str = "Editar conta";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &Account) -> RecordId {
        record.id
    }

    fn display_name(record: &Account) -> String {
        format!("{} {}", record.code, record.name)
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("codigo", "Código"),
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("tipo", "Tipo").center(),
            ColumnDef::new("conta_pai_id", "Conta pai"),
            ColumnDef::new("ativo", "Ativo").center(),
        ]
    }

    fn cells(record: &Account) -> Vec<CellValue> {
        vec![
            CellValue::text(&record.code),
            CellValue::text(&record.name),
            kind_badge(record.kind),
            CellValue::opt_text(record.parent_name.as_deref()),
            CellValue::active(record.active),
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::new("nome", "Nome", FilterKind::Text),
            FilterDef::new("tipo", "Tipo", FilterKind::Select(kind_options())),
        ]
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("codigo", "Código", FieldKind::Text)
                .required()
                .placeholder("1.01.003"),
            FieldDef::new("nome", "Nome", FieldKind::Text).required(),
            FieldDef::new("tipo", "Tipo", FieldKind::Select(kind_options())).required(),
            FieldDef::new("conta_pai_id", "Conta pai", FieldKind::Lookup(PARENT_LOOKUP)),
            FieldDef::new("ativo", "Ativo", FieldKind::Checkbox),
        ]
    }

    fn to_form(record: &Account) -> FormFields {
        FormFields::new()
            .with("codigo", record.code.as_str())
            .with("nome", record.name.as_str())
            .with("tipo", record.kind.as_str())
            .with("conta_pai_id", record.parent_id)
            .with("ativo", record.active)
    }

    fn to_payload(form: &FormFields) -> Result<AccountDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = AccountDto {
            code: form.text("codigo"),
            name: form.text("nome"),
            kind: AccountKind::from_code(&form.text("tipo")),
            parent_id: form.record_id("conta_pai_id", "Conta pai", &mut errors),
            active: form.flag("ativo"),
        };
        checked(errors, dto, AccountDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_required() {
        let form = AccountEntity::default_form()
            .with("codigo", "3.01")
            .with("nome", "Vendas de mercadorias");
        let errors = AccountEntity::to_payload(&form).unwrap_err();
        assert_eq!(errors["tipo"], "Tipo é obrigatório");
    }

    #[test]
    fn test_code_must_be_dotted_digits() {
        let form = AccountEntity::default_form()
            .with("codigo", "3..01")
            .with("nome", "Receitas")
            .with("tipo", "receita");
        let errors = AccountEntity::to_payload(&form).unwrap_err();
        assert!(errors.contains_key("codigo"));
    }

    #[test]
    fn test_parent_is_optional() {
        let form = AccountEntity::default_form()
            .with("codigo", "4.02.001")
            .with("nome", "Combustível")
            .with("tipo", "despesa")
            .with("conta_pai_id", "12");
        let dto = AccountEntity::to_payload(&form).unwrap();
        assert_eq!(dto.kind, Some(AccountKind::Despesa));
        assert_eq!(dto.parent_id, Some(RecordId(12)));

        let dto = AccountEntity::to_payload(&form.with("conta_pai_id", "")).unwrap();
        assert_eq!(dto.parent_id, None);
    }

    #[test]
    fn test_kind_badge_tone() {
        assert_eq!(
            kind_badge(AccountKind::Despesa),
            CellValue::Badge {
                label: "Despesa".into(),
                tone: Tone::Danger
            }
        );
    }
}
