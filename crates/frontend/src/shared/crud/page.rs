//! Leptos adapter: the list page of any [`CrudEntity`].
//!
//! All decisions live in the controllers and view model; this file only
//! wires them to signals and markup. Async work re-enters signals through
//! `try_update` so a tab closed mid-request is simply ignored.

use super::confirm::BrowserConfirm;
use super::entity::{CellValue, CrudEntity};
use super::field_view::{field_control, filter_control, filter_tag_label};
use super::form_modal::EntityFormModal;
use super::list_controller::{DeleteOutcome, EntityListController, LoadOutcome};
use super::list_state::ListState;
use super::lookup::{load_all, lookups_of, LookupOptions};
use super::view_model::{ListViewModel, RowView};
use crate::layout::notice_service::use_notices;
use crate::shared::api::Method;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge, Button as ActionButton};
use crate::shared::config::use_config;
use crate::shared::date_utils::today_iso;
use crate::shared::export::{export_to_csv, export_to_excel};
use crate::shared::format::cell_text;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::shared::permissions::{PageAccess, PermissionGate, PermissionSource};
use crate::shared::services::use_services;
use contracts::domain::common::RecordId;
use contracts::shared::FieldFormat;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance, Spinner};

/// "a001_state_2024-03-15.csv"
fn export_filename(key: &str, extension: &str) -> String {
    format!("{}_{}.{}", key, today_iso(), extension)
}

fn cell_view(cell: &CellValue) -> AnyView {
    match cell {
        CellValue::Badge { label, tone } => {
            let label = label.clone();
            let tone = *tone;
            view! { <Badge tone=tone>{label}</Badge> }.into_any()
        }
        CellValue::Color(hex) if FieldFormat::HexColor.matches(hex) => {
            let style = format!("background-color: {}", hex);
            view! {
                <span class="color-swatch" style=style title=hex.clone()></span>
                <span class="color-code">{hex.clone()}</span>
            }
            .into_any()
        }
        other => cell_text(other).into_any(),
    }
}

pub fn entity_page<E: CrudEntity>() -> AnyView {
    let config = use_config();
    let services = use_services();
    let notices = use_notices();

    let client = services.client();
    let list_ctl = StoredValue::new_local(EntityListController::<E>::new(client.clone()));
    let form_ctl = StoredValue::new_local(EntityFormModal::<E>::new(client.clone()));

    let access = RwSignal::new(PageAccess::ResolvingPermissions);
    let list = RwSignal::new(ListState::<E::Record>::new(config.default_page_size));
    let modal = RwSignal::new(EntityFormModal::<E>::initial_state());
    let modal_open = Memo::new(move |_| modal.with(|m| m.open));
    let lookups = RwSignal::new(LookupOptions::new());
    let filters_expanded = RwSignal::new(false);

    let vm = Memo::new(move |_| {
        let perms = access.with(|a| a.permissions());
        list.with(|state| ListViewModel::build::<E>(state, &perms))
    });
    let granted = move || access.with(|a| matches!(a, PageAccess::Granted(_)));

    let reload = move || {
        let Some(ctl) = list_ctl.try_get_value() else {
            return;
        };
        spawn_local(async move {
            loop {
                let Some(request) = list.try_update(|state| ctl.begin_load(state)) else {
                    return;
                };
                let result = ctl.fetch(&request).await;
                match list.try_update(|state| ctl.finish_load(state, &request, result)) {
                    Some(LoadOutcome::NeedsReload) => continue,
                    _ => return,
                }
            }
        });
    };

    let gate = PermissionGate::new(PermissionSource::Bootstrap(services.permissions()));
    let wait_ms = config.permission_wait_ms;
    let lookup_client = client;
    spawn_local(async move {
        let perms = gate
            .resolve(E::PERMISSION_PREFIX, E::READ_ONLY, TimeoutFuture::new(wait_ms))
            .await;
        let page_access = PageAccess::from_permissions(perms);
        let allowed = matches!(page_access, PageAccess::Granted(_));
        if access.try_set(page_access).is_some() {
            return;
        }
        if !allowed {
            log::warn!("{}: access denied", E::KEY);
            return;
        }
        reload();
        let defs = lookups_of(&E::fields(), &E::filters());
        if !defs.is_empty() {
            let options = load_all(lookup_client.as_ref(), &defs).await;
            let _ = lookups.try_set(options);
        }
    });

    let on_create = move || {
        let perms = access.with_untracked(|a| a.permissions());
        let ctl = form_ctl.get_value();
        if let Some(Err(err)) = modal.try_update(|m| ctl.open_create(&perms, m)) {
            notices.error(err.user_message());
        }
    };

    let on_edit = Callback::new(move |id: RecordId| {
        let perms = access.with_untracked(|a| a.permissions());
        let ctl = form_ctl.get_value();
        spawn_local(async move {
            match ctl.fetch_for_edit(&perms, id).await {
                Ok(fields) => {
                    modal.try_update(|m| ctl.apply_edit(m, id, fields));
                }
                Err(err) => notices.error(err.user_message()),
            }
        });
    });

    let on_delete = Callback::new(move |id: RecordId| {
        let perms = access.with_untracked(|a| a.permissions());
        let record = list.with_untracked(|state| {
            state
                .items
                .iter()
                .find(|r| E::record_id(r) == id)
                .cloned()
        });
        let Some(record) = record else {
            return;
        };
        let ctl = list_ctl.get_value();
        spawn_local(async move {
            match ctl.delete(&perms, &record, &BrowserConfirm).await {
                Ok(DeleteOutcome::Deleted) => {
                    notices.success("Registro excluído com sucesso.");
                    reload();
                }
                Ok(DeleteOutcome::Cancelled) => {}
                Err(err) => notices.error(err.user_message()),
            }
        });
    });

    let on_submit = move || {
        let ctl = form_ctl.get_value();
        let request = match modal.try_update(|m| ctl.prepare_submit(m)) {
            Some(Ok(Some(request))) => request,
            Some(Err(err)) if err.field_errors().is_none() => {
                notices.error(err.user_message());
                return;
            }
            _ => return,
        };
        let created = request.method == Method::Post;
        spawn_local(async move {
            let result = ctl.send(&request).await;
            if let Some(Ok(())) = modal.try_update(|m| ctl.finish_submit(m, result)) {
                notices.success(if created {
                    "Registro criado com sucesso."
                } else {
                    "Registro atualizado com sucesso."
                });
                reload();
            }
        });
    };

    let on_close = Callback::new(move |_: ()| {
        if let Some(ctl) = form_ctl.try_get_value() {
            modal.update(|m| ctl.close(m));
        }
    });

    let on_filter = Callback::new(move |(key, value): (String, String)| {
        list.update(|state| state.set_filter(&key, &value));
        reload();
    });

    let on_clear_filters = Callback::new(move |_: ()| {
        list.update(|state| state.clear_filters());
        reload();
    });

    let on_page_change = Callback::new(move |page: usize| {
        if list.try_update(|state| state.go_to_page(page)).unwrap_or(false) {
            reload();
        }
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        if list.try_update(|state| state.set_page_size(size)).unwrap_or(false) {
            reload();
        }
    });

    let on_export_csv = move |_| {
        if vm.with_untracked(|vm| vm.is_empty()) {
            notices.info("Nenhum registro para exportar.");
            return;
        }
        let filename = export_filename(E::KEY, "csv");
        if let Err(e) = vm.with_untracked(|vm| export_to_csv(vm, &filename)) {
            notices.error(e);
        }
    };

    let on_export_excel = move |_| {
        if vm.with_untracked(|vm| vm.is_empty()) {
            notices.info("Nenhum registro para exportar.");
            return;
        }
        let filename = export_filename(E::KEY, "xls");
        if let Err(e) = vm.with_untracked(|vm| export_to_excel(vm, E::TITLE, &filename)) {
            notices.error(e);
        }
    };

    let page_size_options = config.page_size_options.clone();
    let pagination: ChildrenFn = Arc::new(move || {
        view! {
            <PaginationControls
                current_page=Signal::derive(move || vm.with(|v| v.page))
                total_pages=Signal::derive(move || vm.with(|v| v.total_pages))
                page_label=Signal::derive(move || vm.with(|v| v.page_label()))
                range_label=Signal::derive(move || vm.with(|v| v.range_label()))
                page_size=Signal::derive(move || list.with(|s| s.page_size))
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                page_size_options=page_size_options.clone()
            />
        }
        .into_any()
    });

    let filter_content: ChildrenFn = Arc::new(move || {
        let controls = E::filters()
            .into_iter()
            .map(|def| {
                let key = def.key;
                let value = Signal::derive(move || {
                    list.with(|s| s.filters.get(key).cloned().unwrap_or_default())
                });
                filter_control(def, value, lookups, on_filter)
            })
            .collect::<Vec<_>>();
        view! { <div class="filter-panel__fields">{controls}</div> }.into_any()
    });

    let filter_tags: ChildrenFn = Arc::new(move || {
        (move || {
            let active = list.with(|s| s.filters.clone());
            let all = lookups.get();
            let tags = E::filters()
                .into_iter()
                .filter_map(|def| {
                    let value = active.get(def.key)?;
                    let key = def.key;
                    let label = filter_tag_label(&def, value, &all);
                    let on_remove = Callback::new(move |_: ()| {
                        on_filter.run((key.to_string(), String::new()))
                    });
                    Some(view! { <FilterTag label=label on_remove=on_remove /> })
                })
                .collect::<Vec<_>>();
            let clear = (!active.is_empty()).then(|| view! {
                <button class="filter-tags__clear" on:click=move |_| on_clear_filters.run(())>
                    "Limpar filtros"
                </button>
            });
            view! { {tags} {clear} }
        })
        .into_any()
    });

    let row_view = move |row: RowView| {
        let id = row.id;
        let cells = row
            .cells
            .iter()
            .zip(vm.with_untracked(|v| v.columns.clone()))
            .map(|(cell, column)| {
                view! { <td class=column.align.class()>{cell_view(cell)}</td> }
            })
            .collect::<Vec<_>>();
        let actions = vm.with_untracked(|v| v.show_actions).then(|| {
            view! {
                <td class="table__cell table__cell--actions">
                    {row.can_edit.then(|| view! {
                        <ActionButton
                            variant="ghost"
                            size="sm"
                            title="Editar"
                            on_click=Callback::new(move |_| on_edit.run(id))
                        >
                            {icon("edit")}
                        </ActionButton>
                    })}
                    {row.can_delete.then(|| view! {
                        <ActionButton
                            variant="danger"
                            size="sm"
                            title="Excluir"
                            on_click=Callback::new(move |_| on_delete.run(id))
                        >
                            {icon("delete")}
                        </ActionButton>
                    })}
                </td>
            }
        });
        view! {
            <tr class="table__row">
                {cells}
                {actions}
            </tr>
        }
    };

    let table = move || {
        let (columns, rows, show_actions, empty) =
            vm.with(|v| (v.columns.clone(), v.rows.clone(), v.show_actions, v.is_empty()));
        let loading = list.with(|s| s.loading);
        if empty {
            let text = if loading {
                "Carregando..."
            } else {
                "Nenhum registro encontrado."
            };
            return view! { <div class="table__empty">{text}</div> }.into_any();
        }
        view! {
            <div class="table-container">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            {columns
                                .iter()
                                .map(|c| view! {
                                    <th class="table__header-cell">{c.label}</th>
                                })
                                .collect::<Vec<_>>()}
                            {show_actions.then(|| view! {
                                <th class="table__header-cell table__header-cell--actions">"Ações"</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(row_view).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    let modal_view = move || {
        modal_open.get().then(|| {
            let title = Signal::derive(move || {
                let text = if modal.with(|m| m.is_edit()) {
                    E::EDIT_TITLE
                } else {
                    E::NEW_TITLE
                };
                text.to_string()
            });
            let saving = Signal::derive(move || modal.with(|m| m.saving));
            let buttons: ChildrenFn = Arc::new(move || {
                view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_submit()
                        disabled=saving
                    >
                        {icon("save")}
                        {move || if saving.get() { " Salvando..." } else { " Salvar" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancelar"
                    </Button>
                }
                .into_any()
            });
            let fields = E::fields()
                .into_iter()
                .map(|def| field_control(def, modal, lookups))
                .collect::<Vec<_>>();
            view! {
                <Modal title=title on_close=on_close action_buttons=buttons>
                    {move || modal.with(|m| m.errors.general.clone()).map(|message| view! {
                        <div class="alert alert--error">{message}</div>
                    })}
                    <form
                        class="form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            on_submit();
                        }
                    >
                        {fields}
                    </form>
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id=page_id(E::KEY, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{E::TITLE}</h1>
                </div>
                <div class="page__header-right">
                    {move || granted().then(|| view! {
                        {move || vm.with(|v| v.can_create).then(|| view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_create()>
                                {icon("plus")}
                                " Novo"
                            </Button>
                        })}
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                            {icon("refresh")}
                            " Atualizar"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_export_csv>
                            {icon("download")}
                            " CSV"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_export_excel>
                            {icon("download")}
                            " Excel"
                        </Button>
                    })}
                </div>
            </div>

            <div class="page__content">
                {move || match access.get() {
                    PageAccess::ResolvingPermissions => view! {
                        <div class="page__loading">
                            <Spinner />
                            <span>"Verificando permissões..."</span>
                        </div>
                    }
                    .into_any(),
                    PageAccess::Denied => view! {
                        <div class="alert alert--error">
                            {icon("lock")}
                            " Você não tem permissão para acessar esta página."
                        </div>
                    }
                    .into_any(),
                    PageAccess::Granted(_) => view! {
                        <FilterPanel
                            is_expanded=filters_expanded
                            active_filters_count=Signal::derive(move || list.with(|s| s.active_filter_count()))
                            pagination_controls=pagination.clone()
                            filter_content=filter_content.clone()
                            filter_tags=filter_tags.clone()
                        />
                        {move || list.with(|s| s.error.clone()).map(|message| view! {
                            <div class="alert alert--error">{message}</div>
                        })}
                        {table}
                    }
                    .into_any(),
                }}
            </div>

            {modal_view}
        </PageFrame>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_carries_key_and_date() {
        let name = export_filename("a002_city", "csv");
        assert!(name.starts_with("a002_city_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "a002_city_".len() + 10 + ".csv".len());
    }

    #[test]
    fn test_cell_views_outlive_their_cells() {
        let views: Vec<AnyView> = [
            CellValue::active(true),
            CellValue::Color("#1a2b3c".to_string()),
            CellValue::text("Bahia"),
        ]
        .iter()
        .map(cell_view)
        .collect();
        assert_eq!(views.len(), 3);
    }
}
