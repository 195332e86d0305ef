use crate::dom;
use bloch_core::{show_countdown, Countdown, CountdownDisplay};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const TIMER_ID: &str = "countdown-timer";
// days, hours, minutes, seconds
const FIELD_IDS: [&str; 4] = ["days", "hours", "minutes", "seconds"];

/// The `#days`/`#hours`/`#minutes`/`#seconds` slots under `#countdown-timer`.
struct DomCountdown<'a> {
    document: &'a web::Document,
}

impl CountdownDisplay for DomCountdown<'_> {
    fn is_mounted(&self) -> bool {
        self.document.get_element_by_id(TIMER_ID).is_some()
    }

    fn set_field(&mut self, index: usize, text: &str) {
        if let Some(id) = FIELD_IDS.get(index) {
            dom::set_text(self.document, id, text);
        }
    }
}

/// Does nothing when the countdown container is not on the page.
pub fn update(document: &web::Document, countdown: &Countdown, now_unix_ms: i64) {
    show_countdown(&mut DomCountdown { document }, countdown, now_unix_ms);
}

#[inline]
fn now_unix_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Update once now and then every `interval_ms`.
pub fn start(
    document: &web::Document,
    countdown: Countdown,
    interval_ms: i32,
) -> anyhow::Result<()> {
    if document.get_element_by_id(TIMER_ID).is_none() {
        log::debug!("[countdown] #{TIMER_ID} missing, not started");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    update(document, &countdown, now_unix_ms());

    let doc = document.clone();
    let tick = Closure::wrap(Box::new(move || {
        update(&doc, &countdown, now_unix_ms());
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval_ms,
        )
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    tick.forget();
    log::info!(
        "[countdown] target={} interval={}ms",
        countdown.target_unix_ms,
        interval_ms
    );
    Ok(())
}
