pub mod ui {
    pub mod list;
}

pub use ui::list::BankAccountEntity;
