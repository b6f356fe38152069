/// Show a blocking browser alert.
pub fn alert(message: &str) {
    log::debug!("alert: {message}");
    let shown = web_sys::window().map(|window| window.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::warn!("could not show alert: {message}");
    }
}
