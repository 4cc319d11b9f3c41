use crate::shared::crud::entity::{CellValue, ColumnDef, CrudEntity, FieldDef, FieldKind, FilterDef, FilterKind};
use crate::shared::crud::form_fields::{checked, FormFields};
use contracts::domain::a004_bank_account::aggregate::{self, BankAccount, BankAccountDto};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

pub struct BankAccountEntity;

impl CrudEntity for BankAccountEntity {
    type Record = BankAccount;
    type Payload = BankAccountDto;

    const KEY: &'static str = "a004_bank_account";
    const TITLE: &'static str = "Contas bancárias";
    const NEW_TITLE: &'static str = "Nova conta bancária";
    const EDIT_TITLE: &'static str = "Editar conta bancária";
    const ENDPOINT: &'static str = aggregate::ENDPOINT;
    const PERMISSION_PREFIX: &'static str = aggregate::PERMISSION_PREFIX;

    fn record_id(record: &BankAccount) -> RecordId {
        record.id
    }

    fn display_name(record: &BankAccount) -> String {
        format!("{} ag. {} c/c {}", record.bank, record.branch, record.account)
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("banco", "Banco"),
            ColumnDef::new("agencia", "Agência"),
            ColumnDef::new("conta", "Conta"),
            ColumnDef::new("saldo_inicial", "Saldo inicial").right(),
            ColumnDef::new("saldo_atual", "Saldo atual").right(),
            ColumnDef::new("ativo", "Ativo").center(),
        ]
    }

    fn cells(record: &BankAccount) -> Vec<CellValue> {
        vec![
            CellValue::text(&record.bank),
            CellValue::text(&record.branch),
            CellValue::text(&record.account),
            CellValue::Money(record.opening_balance),
            record
                .current_balance
                .map(CellValue::Money)
                .unwrap_or(CellValue::Empty),
            CellValue::active(record.active),
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::new("banco", "Banco", FilterKind::Text),
            FilterDef::active(),
        ]
    }

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("banco", "Banco", FieldKind::Text).required(),
            FieldDef::new("agencia", "Agência", FieldKind::Text)
                .required()
                .placeholder("1234-5"),
            FieldDef::new("conta", "Conta", FieldKind::Text).required(),
            FieldDef::new("saldo_inicial", "Saldo inicial", FieldKind::Number { step: "0.01" })
                .placeholder("0,00"),
            FieldDef::new("ativo", "Ativo", FieldKind::Checkbox),
        ]
    }

    fn to_form(record: &BankAccount) -> FormFields {
        FormFields::new()
            .with("banco", record.bank.as_str())
            .with("agencia", record.branch.as_str())
            .with("conta", record.account.as_str())
            .with("saldo_inicial", record.opening_balance)
            .with("ativo", record.active)
    }

    fn to_payload(form: &FormFields) -> Result<BankAccountDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dto = BankAccountDto {
            bank: form.text("banco"),
            branch: form.text("agencia"),
            account: form.text("conta"),
            opening_balance: form.number("saldo_inicial", "Saldo inicial", &mut errors),
            active: form.flag("ativo"),
        };
        checked(errors, dto, BankAccountDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_accepts_brazilian_decimal() {
        let form = BankAccountEntity::default_form()
            .with("banco", "Banco do Brasil")
            .with("agencia", "1234-5")
            .with("conta", "99887-0")
            .with("saldo_inicial", "1.500,25");
        let dto = BankAccountEntity::to_payload(&form).unwrap();
        assert_eq!(dto.opening_balance, Some(1500.25));
    }

    #[test]
    fn test_branch_format() {
        let form = BankAccountEntity::default_form()
            .with("banco", "Itaú")
            .with("agencia", "12a4")
            .with("conta", "1");
        let errors = BankAccountEntity::to_payload(&form).unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["agencia"]);
    }

    #[test]
    fn test_current_balance_optional() {
        let record = BankAccount {
            id: RecordId(1),
            bank: "Caixa".into(),
            branch: "0001".into(),
            account: "123".into(),
            opening_balance: 100.0,
            current_balance: None,
            active: true,
            external_id: None,
        };
        let cells = BankAccountEntity::cells(&record);
        assert_eq!(cells[3], CellValue::Money(100.0));
        assert_eq!(cells[4], CellValue::Empty);
    }
}
