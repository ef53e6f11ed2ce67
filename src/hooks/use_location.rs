use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::services::current_path;
use crate::utils::constants::LOCATION_CHANGE_EVENT;

/// Ruta actual; se actualiza con "popstate" (atrás/adelante) y con `navigate()`
#[hook]
pub fn use_current_path() -> String {
    let path = use_state(current_path);

    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                path.set(current_path());
            }) as Box<dyn FnMut(_)>);

            let window = web_sys::window();
            if let Some(window) = &window {
                for event in ["popstate", LOCATION_CHANGE_EVENT] {
                    if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                        log::error!("❌ [NAV] No se pudo escuchar {}: {:?}", event, e);
                    }
                }
            }

            move || {
                if let Some(window) = window {
                    for event in ["popstate", LOCATION_CHANGE_EVENT] {
                        if let Err(e) = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                            log::warn!("⚠️ [NAV] No se pudo quitar el listener de {}: {:?}", event, e);
                        }
                    }
                }
                drop(callback);
            }
        });
    }

    (*path).clone()
}
