//! Renders `FieldDef`s and `FilterDef`s with the form widgets

use super::entity::{FieldDef, FieldKind, FilterDef, FilterKind, SelectOption};
use super::form_state::ModalState;
use super::lookup::{LookupOption, LookupOptions};
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use leptos::prelude::*;

const ACTIVE_OPTIONS: [SelectOption; 2] = [("true", "Sim"), ("false", "Não")];

fn static_options(options: &[SelectOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

fn lookup_pairs(options: &[LookupOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|o| (o.value.clone(), o.label.clone()))
        .collect()
}

fn lookup_signal(lookups: RwSignal<LookupOptions>, endpoint: &'static str) -> Signal<Vec<(String, String)>> {
    Signal::derive(move || {
        lookups.with(|all| all.get(endpoint).map(|o| lookup_pairs(o)).unwrap_or_default())
    })
}

fn input_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Number { .. } | FieldKind::Integer => "number",
        FieldKind::Date => "date",
        FieldKind::Color => "color",
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        _ => "text",
    }
}

/// Form control bound to one field of the modal
pub fn field_control(
    def: FieldDef,
    modal: RwSignal<ModalState>,
    lookups: RwSignal<LookupOptions>,
) -> AnyView {
    let key = def.key;
    let id = format!("field-{}", key);
    let label = def.label.to_string();
    let required = def.required;
    let value = Signal::derive(move || modal.with(|m| m.field_text(key)));
    let error = Signal::derive(move || modal.with(|m| m.field_error(key)));
    let on_text = Callback::new(move |text: String| modal.update(|m| m.set_field(key, text)));

    match def.kind {
        FieldKind::Checkbox => {
            let checked = Signal::derive(move || modal.with(|m| m.field_flag(key)));
            let on_change = Callback::new(move |flag: bool| modal.update(|m| m.set_field(key, flag)));
            view! { <Checkbox label=label checked=checked on_change=on_change id=id /> }.into_any()
        }
        FieldKind::TextArea => view! {
            <Textarea
                label=label
                value=value
                on_input=on_text
                placeholder=def.placeholder.to_string()
                id=id
                error=error
            />
        }
        .into_any(),
        FieldKind::Select(options) => {
            let options = static_options(&options);
            view! {
                <Select
                    label=label
                    value=value
                    on_change=on_text
                    options=Signal::derive(move || options.clone())
                    required=required
                    id=id
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::Lookup(lookup) => view! {
            <Select
                label=label
                value=value
                on_change=on_text
                options=lookup_signal(lookups, lookup.endpoint)
                required=required
                id=id
                error=error
            />
        }
        .into_any(),
        kind => {
            let step = match kind {
                FieldKind::Number { step } => step.to_string(),
                FieldKind::Integer => "1".to_string(),
                _ => String::new(),
            };
            view! {
                <Input
                    label=label
                    value=value
                    on_input=on_text
                    placeholder=def.placeholder.to_string()
                    input_type=input_type(&kind).to_string()
                    step=step
                    required=required
                    id=id
                    error=error
                />
            }
            .into_any()
        }
    }
}

/// Filter control; `on_change` receives (query key, raw value)
pub fn filter_control(
    def: FilterDef,
    value: Signal<String>,
    lookups: RwSignal<LookupOptions>,
    on_change: Callback<(String, String)>,
) -> AnyView {
    let key = def.key;
    let id = format!("filter-{}", key);
    let label = def.label.to_string();
    let changed = Callback::new(move |raw: String| on_change.run((key.to_string(), raw)));

    match def.kind {
        FilterKind::Text => view! {
            <Input label=label value=value on_input=changed id=id />
        }
        .into_any(),
        FilterKind::Date => view! {
            <Input label=label value=value on_input=changed input_type="date" id=id />
        }
        .into_any(),
        FilterKind::Active => {
            let options = static_options(&ACTIVE_OPTIONS);
            view! {
                <Select
                    label=label
                    value=value
                    on_change=changed
                    options=Signal::derive(move || options.clone())
                    empty_label="Todos"
                    id=id
                />
            }
            .into_any()
        }
        FilterKind::Select(options) => {
            let options = static_options(&options);
            view! {
                <Select
                    label=label
                    value=value
                    on_change=changed
                    options=Signal::derive(move || options.clone())
                    empty_label="Todos"
                    id=id
                />
            }
            .into_any()
        }
        FilterKind::Lookup(lookup) => view! {
            <Select
                label=label
                value=value
                on_change=changed
                options=lookup_signal(lookups, lookup.endpoint)
                empty_label="Todos"
                id=id
            />
        }
        .into_any(),
    }
}

/// Text of an active filter chip: "Estado: Bahia"
pub fn filter_tag_label(def: &FilterDef, value: &str, lookups: &LookupOptions) -> String {
    let shown = match &def.kind {
        FilterKind::Active => ACTIVE_OPTIONS
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, l)| l.to_string()),
        FilterKind::Select(options) => options
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, l)| l.to_string()),
        FilterKind::Lookup(lookup) => lookups
            .get(lookup.endpoint)
            .and_then(|opts| opts.iter().find(|o| o.value == value))
            .map(|o| o.label.clone()),
        FilterKind::Date => Some(crate::shared::date_utils::format_date(value)),
        FilterKind::Text => None,
    };
    format!("{}: {}", def.label, shown.unwrap_or_else(|| value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::entity::LookupDef;

    const STATES: LookupDef = LookupDef {
        endpoint: "/estados",
        label_field: "nome",
    };

    #[test]
    fn test_tag_label_resolves_lookup_option() {
        let def = FilterDef::new("estado_id", "Estado", FilterKind::Lookup(STATES));
        let mut lookups = LookupOptions::new();
        lookups.insert(
            "/estados",
            vec![LookupOption {
                value: "5".to_string(),
                label: "Bahia".to_string(),
            }],
        );
        assert_eq!(filter_tag_label(&def, "5", &lookups), "Estado: Bahia");
        assert_eq!(filter_tag_label(&def, "9", &lookups), "Estado: 9");
    }

    #[test]
    fn test_tag_label_for_active_and_select() {
        let lookups = LookupOptions::new();
        assert_eq!(
            filter_tag_label(&FilterDef::active(), "false", &lookups),
            "Ativo: Não"
        );
        let def = FilterDef::new(
            "tipo",
            "Tipo",
            FilterKind::Select(vec![("receita", "Receita"), ("despesa", "Despesa")]),
        );
        assert_eq!(filter_tag_label(&def, "despesa", &lookups), "Tipo: Despesa");
        let text = FilterDef::new("nome", "Nome", FilterKind::Text);
        assert_eq!(filter_tag_label(&text, "Sal", &lookups), "Nome: Sal");
    }

    #[test]
    fn test_input_type_per_kind() {
        assert_eq!(input_type(&FieldKind::Integer), "number");
        assert_eq!(input_type(&FieldKind::Color), "color");
        assert_eq!(input_type(&FieldKind::Text), "text");
    }
}
