pub mod app;
pub mod data;
pub mod history;
pub mod leaderboard;
pub mod model;
pub mod notice;
pub mod progress;
pub mod rewards;
pub mod session;
pub mod store;
pub mod theme;
pub mod ui;
pub mod view_models;

pub use app::EduvaApp;
pub use progress::{ProgressEvent, ProgressTracker};

/// Punto de entrada de la versión web: monta la app en el `<canvas>` dado y
/// guarda el progreso en `localStorage`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start_web(canvas: web_sys::HtmlCanvasElement) {
    use crate::store::LocalStorage;

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    Ok(Box::new(EduvaApp::from_creation_context(
                        cc,
                        Box::new(LocalStorage),
                    )))
                }),
            )
            .await;
        if let Err(e) = result {
            log::error!("No se pudo arrancar la app web: {e:?}");
        }
    });
}
