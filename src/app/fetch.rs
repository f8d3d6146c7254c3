//! Deferred, cancellable testimonial fetch.

use leptos::{prelude::*, task::spawn_local};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, DomException, RequestInit, Response};

use super::timers::Timers;
use crate::content::{
    check_status, is_abort, parse_testimonials, settle, ContentError, FetchOutcome, Testimonial,
    TESTIMONIALS_PATH,
};

/// Wait between the idle callback and the request.
const FETCH_DELAY: std::time::Duration = std::time::Duration::from_millis(1000);

enum Failure {
    Js(JsValue),
    Content(ContentError),
}

impl From<JsValue> for Failure {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl From<ContentError> for Failure {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

impl From<Failure> for FetchOutcome {
    fn from(value: Failure) -> Self {
        match value {
            Failure::Content(e) => FetchOutcome::Failed(e),
            Failure::Js(e) => {
                let aborted = e
                    .dyn_ref::<DomException>()
                    .is_some_and(|ex| is_abort(&ex.name()));
                if aborted {
                    FetchOutcome::Cancelled
                } else {
                    FetchOutcome::Failed(ContentError::Network(format!("{e:?}")))
                }
            }
        }
    }
}

async fn request(signal: &AbortSignal) -> Result<Vec<Testimonial>, Failure> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_signal(Some(signal));

    let response = JsFuture::from(window().fetch_with_str_and_init(TESTIMONIALS_PATH, &init)).await?;
    let response: Response = response.dyn_into()?;
    check_status(response.status())?;
    let body = JsFuture::from(response.text()?).await?;
    let body = body
        .as_string()
        .ok_or_else(|| ContentError::Parse("response body is not text".to_string()))?;
    Ok(parse_testimonials(&body)?)
}

/// A testimonial request waiting for the browser to go idle, then for
/// [`FETCH_DELAY`], then for the network.
#[derive(Clone, Copy)]
pub struct TestimonialFetch {
    idle: StoredValue<Option<IdleCallbackHandle>>,
    timers: Timers,
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl TestimonialFetch {
    /// Starts the deferred fetch; the result lands in `testimonials`.
    pub fn spawn(testimonials: RwSignal<Vec<Testimonial>>) -> Self {
        let fetch = Self {
            idle: StoredValue::new(None),
            timers: Timers::new(),
            controller: StoredValue::new_local(None),
        };
        let deferred = move || {
            fetch
                .timers
                .after(FETCH_DELAY, move || fetch.issue(testimonials));
        };
        match request_idle_callback_with_handle(deferred) {
            Ok(handle) => fetch.idle.set_value(Some(handle)),
            // no requestIdleCallback in this browser
            Err(_) => deferred(),
        }
        fetch
    }

    fn issue(self, testimonials: RwSignal<Vec<Testimonial>>) {
        let controller = match AbortController::new() {
            Ok(controller) => controller,
            Err(e) => {
                let outcome = FetchOutcome::from(Failure::Js(e));
                testimonials.try_set(settle(outcome, log_failure));
                return;
            }
        };
        let signal = controller.signal();
        self.controller.set_value(Some(controller));

        spawn_local(async move {
            let outcome = match request(&signal).await {
                Ok(list) => FetchOutcome::Loaded(list),
                Err(failure) => failure.into(),
            };
            testimonials.try_set(settle(outcome, log_failure));
        });
    }

    /// Cancels whichever stage is pending and aborts an in-flight request.
    pub fn cancel(self) {
        if let Some(handle) = self.idle.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
        self.timers.clear();
        if let Some(controller) = self.controller.try_update_value(Option::take).flatten() {
            controller.abort();
        }
    }
}

fn log_failure(err: &ContentError) {
    log::error!("Error loading testimonials: {err}");
}
