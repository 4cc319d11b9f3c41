//! `ListState` → what the table shows. No DOM here; the Leptos adapter and
//! the exporters both read this.

use super::entity::{CellValue, ColumnDef, CrudEntity};
use super::list_state::ListState;
use contracts::domain::common::RecordId;
use contracts::system::permissions::PermissionSet;

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: RecordId,
    pub cells: Vec<CellValue>,
    pub can_edit: bool,
    pub can_delete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<RowView>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub range_start: usize,
    pub range_end: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub can_create: bool,
    /// Actions column is rendered at all
    pub show_actions: bool,
}

impl ListViewModel {
    pub fn build<E: CrudEntity>(state: &ListState<E::Record>, perms: &PermissionSet) -> Self {
        let can_edit = perms.edit && !E::READ_ONLY;
        let can_delete = perms.delete && !E::READ_ONLY;
        let (range_start, range_end) = state.range();

        Self {
            columns: E::columns(),
            rows: state
                .items
                .iter()
                .map(|record| RowView {
                    id: E::record_id(record),
                    cells: E::cells(record),
                    can_edit,
                    can_delete,
                })
                .collect(),
            page: state.page,
            total_pages: state.total_pages,
            total_items: state.total_items,
            range_start,
            range_end,
            has_prev: state.has_prev(),
            has_next: state.has_next(),
            can_create: perms.create && !E::READ_ONLY,
            show_actions: can_edit || can_delete,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "41-45 de 45"
    pub fn range_label(&self) -> String {
        format!("{}-{} de {}", self.range_start, self.range_end, self.total_items)
    }

    pub fn page_label(&self) -> String {
        format!("Página {} de {}", self.page, self.total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_state::StateEntity;
    use contracts::domain::a001_state::aggregate::State;
    use contracts::shared::PagedList;

    fn state_with(total: usize, page: usize, on_page: i64) -> ListState<State> {
        let mut state = ListState::new(20);
        state.page = page;
        let items = (0..on_page)
            .map(|i| State {
                id: RecordId(i + 1),
                name: format!("Estado {}", i),
                code: "XX".into(),
                active: true,
                external_id: None,
            })
            .collect();
        state.apply_page(PagedList {
            items,
            total,
            server_total_pages: None,
        });
        state
    }

    #[test]
    fn test_last_page_of_45() {
        let vm = ListViewModel::build::<StateEntity>(&state_with(45, 3, 5), &PermissionSet::all());
        assert_eq!(vm.total_pages, 3);
        assert_eq!(vm.range_label(), "41-45 de 45");
        assert!(!vm.has_next);
        assert!(vm.has_prev);
        assert_eq!(vm.rows.len(), 5);
    }

    #[test]
    fn test_actions_follow_permissions() {
        let perms = PermissionSet {
            view: true,
            edit: true,
            ..PermissionSet::none()
        };
        let vm = ListViewModel::build::<StateEntity>(&state_with(2, 1, 2), &perms);
        assert!(vm.show_actions);
        assert!(!vm.can_create);
        assert!(vm.rows.iter().all(|r| r.can_edit && !r.can_delete));

        let vm = ListViewModel::build::<StateEntity>(&state_with(2, 1, 2), &PermissionSet::none().read_only());
        assert!(!vm.show_actions);
    }

    #[test]
    fn test_empty_list() {
        let vm = ListViewModel::build::<StateEntity>(&state_with(0, 1, 0), &PermissionSet::all());
        assert!(vm.is_empty());
        assert_eq!(vm.range_label(), "0-0 de 0");
        assert_eq!(vm.page_label(), "Página 1 de 1");
        assert!(!vm.has_next && !vm.has_prev);
    }

    #[test]
    fn test_cells_match_columns() {
        let vm = ListViewModel::build::<StateEntity>(&state_with(1, 1, 1), &PermissionSet::all());
        assert_eq!(vm.rows[0].cells.len(), vm.columns.len());
    }
}
