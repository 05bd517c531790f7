//! Sign-in / sign-up page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::public::{BackLink, Brand};
use crate::auth;
use crate::context::{use_app, AppContext};
use crate::forms::FormValues;
use crate::routes::Route;
use crate::toast::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

impl Mode {
    fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Mode::SignIn, false) => "Sign In",
            (Mode::SignIn, true) => "Signing in...",
            (Mode::SignUp, false) => "Create Account",
            (Mode::SignUp, true) => "Creating account...",
        }
    }
}

const CONFIRM_EMAIL: &str = "Check your email to confirm your account";

async fn run(ctx: AppContext, mode: Mode, email: String, password: String) {
    let result = match mode {
        Mode::SignIn => auth::sign_in(ctx, &email, &password).await.map(|_| true),
        Mode::SignUp => auth::sign_up(ctx, &email, &password).await,
    };
    match result {
        Ok(true) => ctx.navigate(Route::Dashboard),
        Ok(false) => ctx.notify(Toast::success(CONFIRM_EMAIL)),
        Err(e) => {
            tracing::warn!(error = %e, ?mode, "authentication failed");
            ctx.notify(Toast::from_error(&e));
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app();
    let (mode, set_mode) = signal(Mode::SignIn);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        if !ctx.restoring() && ctx.signed_in() {
            ctx.nav.replace(Route::Dashboard);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(values) = FormValues::from_submit(&ev, &["email", "password"]) else {
            return;
        };
        let (email, password) = (values.text("email"), values.text("password"));
        let mode = mode.get_untracked();

        set_busy.set(true);
        spawn_local(async move {
            run(ctx, mode, email, password).await;
            let _ = set_busy.try_set(false);
        });
    };

    let tab_class = move |m: Mode| if mode.get() == m { "tab active" } else { "tab" };

    view! {
        <div class="public-page">
            <header class="public-header">
                <Brand />
                <BackLink />
            </header>

            <main class="public-main narrow">
                <div class="card auth-card">
                    <div class="tabs">
                        <button type="button" class=move || tab_class(Mode::SignIn) on:click=move |_| set_mode.set(Mode::SignIn)>
                            "Sign In"
                        </button>
                        <button type="button" class=move || tab_class(Mode::SignUp) on:click=move |_| set_mode.set(Mode::SignUp)>
                            "Sign Up"
                        </button>
                    </div>

                    <form class="form" on:submit=on_submit>
                        <label class="field">
                            <span class="field-label">"Email"</span>
                            <input class="input" type="email" name="email" autocomplete="email" required />
                        </label>
                        <label class="field">
                            <span class="field-label">"Password"</span>
                            <input
                                class="input"
                                type="password"
                                name="password"
                                minlength="6"
                                autocomplete=move || match mode.get() {
                                    Mode::SignIn => "current-password",
                                    Mode::SignUp => "new-password",
                                }
                                required
                            />
                        </label>
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || busy.get()>
                            {move || mode.get().submit_label(busy.get())}
                        </button>
                    </form>
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_labels() {
        assert_eq!(Mode::SignIn.submit_label(false), "Sign In");
        assert_eq!(Mode::SignUp.submit_label(true), "Creating account...");
    }
}
