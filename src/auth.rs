//! Session lifecycle.
//!
//! The session is kept in `localStorage` so a reload stays signed in. It is
//! refreshed on restore when close to expiry and again shortly before each
//! expiry while the tab is open.

use backend_client::{BackendResult, Session, SignUp};
use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::AppStateStoreFields;

const SESSION_KEY: &str = "bytwave.auth.session";
/// Refresh this many seconds before the access token expires.
const REFRESH_MARGIN_SECS: i64 = 60;

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

fn load_stored() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable stored session");
            forget_stored();
            None
        }
    }
}

fn save_stored(session: &Session) {
    let Some(storage) = storage() else { return };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(SESSION_KEY, &raw).is_err() {
                tracing::warn!("could not persist session");
            }
        }
        Err(e) => tracing::warn!(error = %e, "could not serialise session"),
    }
}

fn forget_stored() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Adopt `session`: publish it, persist it and schedule its refresh.
fn adopt(ctx: AppContext, session: Session) {
    save_stored(&session);
    schedule_refresh(ctx, &session);
    ctx.store.session().set(Some(session));
}

fn drop_session(ctx: AppContext) {
    forget_stored();
    ctx.store.session().set(None);
}

/// Restore a stored session on startup.
pub fn restore(ctx: AppContext) {
    let Some(session) = load_stored() else {
        ctx.store.restoring().set(false);
        return;
    };

    if !session.expires_within(Utc::now(), REFRESH_MARGIN_SECS) {
        tracing::debug!("restored stored session");
        adopt(ctx, session);
        ctx.store.restoring().set(false);
        return;
    }

    spawn_local(async move {
        match ctx.auth().refresh(&session.refresh_token).await {
            Ok(fresh) => {
                tracing::info!("refreshed stored session");
                adopt(ctx, fresh);
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored session could not be refreshed");
                drop_session(ctx);
            }
        }
        ctx.store.restoring().set(false);
    });
}

/// Longest delay `setTimeout` honours; larger values fire immediately.
const MAX_TIMER_MS: u32 = i32::MAX as u32;

/// Milliseconds until the refresh for a token expiring at `expires_at`.
fn refresh_delay_ms(expires_at: i64, now: i64) -> u32 {
    let wait_ms = (expires_at - now - REFRESH_MARGIN_SECS).max(0).saturating_mul(1000);
    u32::try_from(wait_ms).unwrap_or(MAX_TIMER_MS).min(MAX_TIMER_MS)
}

fn schedule_refresh(ctx: AppContext, session: &Session) {
    let Some(expires_at) = session.expires_at else { return };
    let wait_ms = refresh_delay_ms(expires_at, Utc::now().timestamp());
    let refresh_token = session.refresh_token.clone();

    spawn_local(async move {
        TimeoutFuture::new(wait_ms).await;
        // Superseded by a sign-out or a newer session in the meantime.
        let current = ctx.store.session().get_untracked();
        if current.as_ref().map(|s| &s.refresh_token) != Some(&refresh_token) {
            return;
        }
        match ctx.auth().refresh(&refresh_token).await {
            Ok(fresh) => adopt(ctx, fresh),
            Err(e) => {
                tracing::warn!(error = %e, "session refresh failed, signing out");
                drop_session(ctx);
                ctx.nav.replace(Route::Auth);
            }
        }
    });
}

pub async fn sign_in(ctx: AppContext, email: &str, password: &str) -> BackendResult<()> {
    let session = ctx.auth().sign_in_with_password(email, password).await?;
    tracing::info!(user = %session.user.id, "signed in");
    adopt(ctx, session);
    Ok(())
}

/// Returns `true` when the new account is already signed in.
pub async fn sign_up(ctx: AppContext, email: &str, password: &str) -> BackendResult<bool> {
    match ctx.auth().sign_up(email, password).await? {
        SignUp::SignedIn(session) => {
            adopt(ctx, session);
            Ok(true)
        }
        SignUp::ConfirmationRequired(_) => Ok(false),
    }
}

/// Sign out locally right away; revoke server-side on a best-effort basis.
pub fn sign_out(ctx: AppContext) {
    let token = ctx.store.session().get_untracked().map(|s| s.access_token);
    drop_session(ctx);
    ctx.navigate(Route::Landing);

    if let Some(token) = token {
        spawn_local(async move {
            if let Err(e) = ctx.auth().sign_out(&token).await {
                tracing::warn!(error = %e, "server-side sign-out failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_fires_a_minute_early() {
        assert_eq!(refresh_delay_ms(10_000 + 3_600, 10_000), 3_540_000);
        assert_eq!(refresh_delay_ms(10_000 + 30, 10_000), 0);
        assert_eq!(refresh_delay_ms(5_000, 10_000), 0);
    }

    #[test]
    fn test_refresh_delay_stays_within_timer_range() {
        let thirty_days = 30 * 24 * 3_600;
        assert_eq!(refresh_delay_ms(thirty_days, 0), i32::MAX as u32);
        assert_eq!(refresh_delay_ms(i64::MAX, 0), i32::MAX as u32);
    }
}
