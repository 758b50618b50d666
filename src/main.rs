#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use eduva::EduvaApp;
    use eduva::store::{FileStore, KeyValueStore, MemoryStore};

    // Sin carpeta de datos se trabaja en memoria: el progreso no sobrevive al cierre
    let store: Box<dyn KeyValueStore> = match FileStore::default_location() {
        Ok(store) => {
            log::info!("Guardando progreso en {}", store.dir().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("{e}; el progreso no se guardará");
            Box::new(MemoryStore::new())
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "EDUVA",
        options,
        Box::new(|cc| Ok(Box::new(EduvaApp::from_creation_context(cc, store)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
