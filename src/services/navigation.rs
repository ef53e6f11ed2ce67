// ============================================================================
// NAVEGACIÓN - history.pushState + evento "locationchange"
// ============================================================================
// Fire-and-forget: navegar a la ruta actual no hace nada.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{window, Event};

use crate::utils::constants::LOCATION_CHANGE_EVENT;

/// Ruta actual (`location.pathname`), "/" si no hay ventana
pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn navigate(path: &str) {
    if current_path() == path {
        return;
    }
    if let Err(e) = push_path(path) {
        log::error!("❌ [NAV] No se pudo navegar a {}: {:?}", path, e);
    }
}

fn push_path(path: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("sin window"))?;
    win.history()?.push_state_with_url(&JsValue::NULL, "", Some(path))?;
    log::info!("🧭 [NAV] -> {}", path);

    let event = Event::new(LOCATION_CHANGE_EVENT)?;
    win.dispatch_event(&event)?;
    Ok(())
}
