//! Glue between the store's sync routines and Dioxus state.
//!
//! Each panel keeps its [`Panel`] in a `Signal`. The helpers here spawn the
//! store's [`store::refresh`] / [`store::submit`] as local tasks against the
//! shared [`HttpClient`], and report failures to the activity log instead of
//! letting them vanish.

use api::HttpClient;
use dioxus::prelude::*;
use store::{Creatable, Panel, PanelState, Resource, Submitted};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

/// Lets store code update a signal-held panel between awaits.
struct SignalPanel<R: Resource>(Signal<Panel<R>>);

impl<R: Resource> PanelState<R> for SignalPanel<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut Panel<R>) -> T) -> T {
        let mut panel = self.0.write();
        f(&mut panel)
    }
}

/// The backend client provided at the app root.
pub fn use_backend() -> HttpClient {
    use_context::<HttpClient>()
}

/// Panel state for `R`, loaded once when the component mounts.
pub fn use_panel<R: Resource>() -> Signal<Panel<R>> {
    let client = use_backend();
    let log = use_activity_log();
    let panel = use_signal(Panel::<R>::new);

    use_hook(move || spawn_refresh(client, panel, log));

    panel
}

/// Reload `panel` from the backend in the background.
pub fn spawn_refresh<R: Resource>(
    client: HttpClient,
    panel: Signal<Panel<R>>,
    mut log: Signal<ActivityLog>,
) {
    spawn(async move {
        let mut state = SignalPanel(panel);
        if let Err(err) = store::refresh(&client, &mut state).await {
            tracing::warn!(path = R::PATH, url = err.url(), %err, "refresh failed");
            log_activity(&mut log, LogLevel::Error, &format!("/{} yüklenemedi: {err}", R::PATH));
        }
    });
}

/// Submit `panel`'s draft in the background, then reload it.
pub fn spawn_submit<R: Creatable>(
    client: HttpClient,
    panel: Signal<Panel<R>>,
    mut log: Signal<ActivityLog>,
    flag: R::Flag,
) {
    spawn(async move {
        let mut state = SignalPanel(panel);
        match store::submit(&client, &mut state, flag).await {
            Ok(Submitted::Created(_)) => {
                log_activity(&mut log, LogLevel::Success, &format!("/{} kaydı eklendi", R::PATH));
            }
            Ok(Submitted::Skipped) => {
                log_activity(
                    &mut log,
                    LogLevel::Info,
                    &format!("/{}: eksik alan ya da süren kayıt, gönderilmedi", R::PATH),
                );
            }
            Err(err) => {
                tracing::warn!(path = R::PATH, url = err.url(), %err, "submit failed");
                log_activity(&mut log, LogLevel::Error, &format!("/{} kaydedilemedi: {err}", R::PATH));
            }
        }
    });
}
