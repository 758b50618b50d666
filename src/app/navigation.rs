use super::*;

impl EduvaApp {
    pub fn open_page(&mut self, page: Page) {
        self.ui_state.page = page;
        self.message.clear();
    }

    /// Abre o cierra una entrada del historial (sólo una abierta a la vez).
    pub fn toggle_record(&mut self, id: &str) {
        if self.ui_state.expanded_record.as_deref() == Some(id) {
            self.ui_state.expanded_record = None;
        } else {
            self.ui_state.expanded_record = Some(id.to_string());
        }
    }

    pub fn is_record_expanded(&self, id: &str) -> bool {
        self.ui_state.expanded_record.as_deref() == Some(id)
    }
}
