use super::controller::{form_errors, ProfileController, ProfileForm};
use crate::layout::notice_service::use_notices;
use crate::shared::components::ui::Input;
use crate::shared::crud::form_state::FormErrors;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_SYSTEM};
use crate::shared::services::use_services;
use contracts::system::profile::ChangePasswordDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

pub const PROFILE_TAB_KEY: &str = "sys_profile";

fn field_error(errors: RwSignal<FormErrors>, key: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.fields.get(key).cloned()))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = use_services();
    let notices = use_notices();
    let controller = StoredValue::new_local(ProfileController::new(services.client()));

    let loading = RwSignal::new(true);
    let login = RwSignal::new(String::new());
    let form = RwSignal::new(ProfileForm::default());
    let form_errs = RwSignal::new(FormErrors::default());
    let saving = RwSignal::new(false);

    let password = RwSignal::new(ChangePasswordDto::default());
    let password_errs = RwSignal::new(FormErrors::default());
    let changing = RwSignal::new(false);

    let ctl = controller.get_value();
    spawn_local(async move {
        match ctl.load().await {
            Ok(profile) => {
                let _ = login.try_set(profile.login.clone().unwrap_or_default());
                let _ = form.try_set(ProfileForm::from_profile(&profile));
            }
            Err(err) => {
                log::error!("Failed to load profile: {}", err);
                let _ = form_errs.try_set(form_errors(&err));
            }
        }
        let _ = loading.try_set(false);
    });

    let on_save = move || {
        if saving.get_untracked() {
            return;
        }
        let ctl = controller.get_value();
        let current = form.get_untracked();
        saving.set(true);
        form_errs.set(FormErrors::default());
        spawn_local(async move {
            let result = ctl.save(&current).await;
            let _ = saving.try_set(false);
            match result {
                Ok(()) => notices.success("Perfil atualizado com sucesso."),
                Err(err) => {
                    let _ = form_errs.try_set(form_errors(&err));
                }
            }
        });
    };

    let on_change_password = move || {
        if changing.get_untracked() {
            return;
        }
        let ctl = controller.get_value();
        let dto = password.get_untracked();
        changing.set(true);
        password_errs.set(FormErrors::default());
        spawn_local(async move {
            let result = ctl.change_password(&dto).await;
            let _ = changing.try_set(false);
            match result {
                Ok(()) => {
                    let _ = password.try_set(ChangePasswordDto::default());
                    notices.success("Senha alterada com sucesso.");
                }
                Err(err) => {
                    let _ = password_errs.try_set(form_errors(&err));
                }
            }
        });
    };

    let set_form = move |apply: fn(&mut ProfileForm, String), key: &'static str| {
        Callback::new(move |value: String| {
            form.update(|f| apply(f, value));
            form_errs.update(|e| {
                e.fields.remove(key);
            });
        })
    };

    let set_password = move |apply: fn(&mut ChangePasswordDto, String), key: &'static str| {
        Callback::new(move |value: String| {
            password.update(|p| apply(p, value));
            password_errs.update(|e| {
                e.fields.remove(key);
            });
        })
    };

    let general = |errors: RwSignal<FormErrors>| {
        move || {
            errors
                .with(|e| e.general.clone())
                .map(|message| view! { <div class="alert alert--error">{message}</div> })
        }
    };

    view! {
        <PageFrame page_id=page_id(PROFILE_TAB_KEY, PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("user")}
                    <h1 class="page__title">"Meu perfil"</h1>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <section class="profile__section">
                        <h2 class="profile__section-title">"Dados pessoais"</h2>
                        {general(form_errs)}
                        <form
                            class="form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                on_save();
                            }
                        >
                            <Input
                                label="Login"
                                value=Signal::derive(move || login.get())
                                disabled=true
                                id="profile-login"
                            />
                            <Input
                                label="Nome"
                                value=Signal::derive(move || form.with(|f| f.nome.clone()))
                                on_input=set_form(|f, v| f.nome = v, "nome")
                                required=true
                                id="profile-nome"
                                error=field_error(form_errs, "nome")
                            />
                            <Input
                                label="E-mail"
                                input_type="email"
                                value=Signal::derive(move || form.with(|f| f.email.clone()))
                                on_input=set_form(|f, v| f.email = v, "email")
                                required=true
                                id="profile-email"
                                error=field_error(form_errs, "email")
                            />
                            <Input
                                label="Telefone"
                                value=Signal::derive(move || form.with(|f| f.telefone.clone()))
                                on_input=set_form(|f, v| f.telefone = v, "telefone")
                                id="profile-telefone"
                                error=field_error(form_errs, "telefone")
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| on_save()
                                disabled=Signal::derive(move || saving.get())
                            >
                                {icon("save")}
                                {move || if saving.get() { " Salvando..." } else { " Salvar" }}
                            </Button>
                        </form>
                    </section>

                    <section class="profile__section">
                        <h2 class="profile__section-title">{icon("lock")}" Alterar senha"</h2>
                        {general(password_errs)}
                        <form
                            class="form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                on_change_password();
                            }
                        >
                            <Input
                                label="Senha atual"
                                input_type="password"
                                autocomplete="current-password"
                                value=Signal::derive(move || password.with(|p| p.senha_atual.clone()))
                                on_input=set_password(|p, v| p.senha_atual = v, "senha_atual")
                                required=true
                                id="profile-senha-atual"
                                error=field_error(password_errs, "senha_atual")
                            />
                            <Input
                                label="Nova senha"
                                input_type="password"
                                autocomplete="new-password"
                                value=Signal::derive(move || password.with(|p| p.nova_senha.clone()))
                                on_input=set_password(|p, v| p.nova_senha = v, "nova_senha")
                                required=true
                                id="profile-nova-senha"
                                error=field_error(password_errs, "nova_senha")
                            />
                            <Input
                                label="Confirmação"
                                input_type="password"
                                autocomplete="new-password"
                                value=Signal::derive(move || password.with(|p| p.confirmacao.clone()))
                                on_input=set_password(|p, v| p.confirmacao = v, "confirmacao")
                                required=true
                                id="profile-confirmacao"
                                error=field_error(password_errs, "confirmacao")
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| on_change_password()
                                disabled=Signal::derive(move || changing.get())
                            >
                                {move || if changing.get() { "Alterando..." } else { "Alterar senha" }}
                            </Button>
                        </form>
                    </section>
                </Show>
            </div>
        </PageFrame>
    }
}
