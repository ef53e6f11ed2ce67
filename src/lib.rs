// ============================================================================
// SHENATION WEB - Núcleo de sesión, permisos y notificaciones (Yew + WASM)
// ============================================================================
// - Models: estructuras compartidas con el backend
// - Stores: reducers (sesión, feed de notificaciones)
// - ViewModels: decisiones puras (guard, redirección por rol)
// - Services: HTTP, localStorage, navegación, alertas nativas
// - Hooks / Components: capa Yew
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
