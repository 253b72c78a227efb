/// Tell the user a request failed, the blocking way.
pub fn notify_failure(message: &str) {
    tracing::warn!("{message}");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                web_sys::console::warn_1(&message.into());
            }
        }
    }
}
