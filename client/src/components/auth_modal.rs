//! Login / registration dialog posting to `/login` and `/register`.
//!
//! ERROR HANDLING
//! ==============
//! Results fold into `AuthForm::apply_response`; a successful submission
//! schedules a page reload so the server can render the signed-in view.

use leptos::prelude::*;

use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::auth::{AuthForm, AuthMode, COUNTRY_OPTIONS, GENDER_OPTIONS};
use crate::util::{dom, timer::schedule};

fn finish_submit(form: RwSignal<AuthForm>, result: Result<crate::net::types::AuthResponse, String>) {
    if let Err(e) = &result {
        leptos::logging::warn!("auth request failed: {e}");
    }
    if let Some(Some(delay_ms)) = form.try_update(|f| f.apply_response(result)) {
        schedule(delay_ms, dom::reload_page);
    }
}

#[component]
pub fn AuthModal(open: RwSignal<bool>) -> impl IntoView {
    let form = RwSignal::new(AuthForm::default());
    let close = move || open.set(false);

    let on_escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || on_escape.remove());

    view! {
        <Show when=move || open.get()>
            <div class="modal fade show modal-open-host" style="display: block;" on:click=move |_| close()>
                <div class="modal-dialog modal-dialog-centered" on:click=move |ev| ev.stop_propagation() role="dialog" aria-modal="true">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">
                                <i class=move || form.get().mode.title_icon()></i>
                                {move || form.get().mode.title()}
                            </h5>
                            <button type="button" class="btn-close btn-close-white" aria-label="Close" on:click=move |_| close()></button>
                        </div>
                        <div class="modal-body">
                            {move || {
                                form.get()
                                    .alert
                                    .map(|alert| view! { <div class=alert.class() role="alert">{alert.message.clone()}</div> })
                            }}
                            <Show
                                when=move || form.get().mode == AuthMode::Login
                                fallback=move || view! { <RegisterForm form=form/> }
                            >
                                <LoginForm form=form/>
                            </Show>
                            <button type="button" class="btn btn-link toggle-form" on:click=move |_| form.update(AuthForm::toggle_mode)>
                                {move || form.get().mode.toggle_label()}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn LoginForm(form: RwSignal<AuthForm>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(AuthForm::begin_submit).unwrap_or(false) {
            return;
        }
        let req = LoginRequest { email: email.get(), password: password.get() };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::post_login(&req).await;
            finish_submit(form, result);
        });
    };

    view! {
        <form on:submit=on_submit>
            <div class="mb-3">
                <label class="form-label" for="loginEmail">"Email"</label>
                <input
                    id="loginEmail"
                    class="form-control"
                    type="email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="loginPassword">"Password"</label>
                <input
                    id="loginPassword"
                    class="form-control"
                    type="password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-accent w-100" disabled=move || form.get().busy>
                <i class="fas fa-sign-in-alt me-2"></i>
                "Login"
            </button>
        </form>
    }
}

#[component]
fn RegisterForm(form: RwSignal<AuthForm>) -> impl IntoView {
    let draft = RwSignal::new(RegisterRequest {
        gender: GENDER_OPTIONS[0].0.to_owned(),
        country: COUNTRY_OPTIONS[0].to_owned(),
        ..RegisterRequest::default()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(AuthForm::begin_submit).unwrap_or(false) {
            return;
        }
        let req = draft.get();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::post_register(&req).await;
            finish_submit(form, result);
        });
    };

    view! {
        <form on:submit=on_submit>
            <div class="mb-3">
                <label class="form-label" for="registerName">"Full Name"</label>
                <input
                    id="registerName"
                    class="form-control"
                    type="text"
                    required=true
                    prop:value=move || draft.get().name
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="registerEmail">"Email"</label>
                <input
                    id="registerEmail"
                    class="form-control"
                    type="email"
                    required=true
                    prop:value=move || draft.get().email
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </div>
            <div class="row">
                <div class="col-6 mb-3">
                    <label class="form-label" for="registerGender">"Gender"</label>
                    <select
                        id="registerGender"
                        class="form-select"
                        prop:value=move || draft.get().gender
                        on:change=move |ev| draft.update(|d| d.gender = event_target_value(&ev))
                    >
                        {GENDER_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="col-6 mb-3">
                    <label class="form-label" for="registerCountry">"Country"</label>
                    <select
                        id="registerCountry"
                        class="form-select"
                        prop:value=move || draft.get().country
                        on:change=move |ev| draft.update(|d| d.country = event_target_value(&ev))
                    >
                        {COUNTRY_OPTIONS.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="mb-3">
                <label class="form-label" for="registerPassword">"Password"</label>
                <input
                    id="registerPassword"
                    class="form-control"
                    type="password"
                    required=true
                    prop:value=move || draft.get().password
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="registerConfirmPassword">"Confirm Password"</label>
                <input
                    id="registerConfirmPassword"
                    class="form-control"
                    type="password"
                    required=true
                    prop:value=move || draft.get().confirm_password
                    on:input=move |ev| draft.update(|d| d.confirm_password = event_target_value(&ev))
                />
            </div>
            <div class="form-check mb-3">
                <input
                    id="agreeTerms"
                    class="form-check-input"
                    type="checkbox"
                    prop:checked=move || draft.get().agree_terms
                    on:change=move |ev| draft.update(|d| d.agree_terms = event_target_checked(&ev))
                />
                <label class="form-check-label" for="agreeTerms">"I agree to the Terms & Conditions"</label>
            </div>
            <button type="submit" class="btn btn-accent w-100" disabled=move || form.get().busy>
                <i class="fas fa-user-plus me-2"></i>
                "Register"
            </button>
        </form>
    }
}
