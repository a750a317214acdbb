use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// Pages reachable from the top navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Pedidos,
    RegistroEquipo,
}

impl Page {
    /// Key kept in the URL fragment (`#pedidos`, `#registro`)
    pub fn key(&self) -> &'static str {
        match self {
            Page::Pedidos => "pedidos",
            Page::RegistroEquipo => "registro",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Pedidos => "Pedidos",
            Page::RegistroEquipo => "Registro de equipo",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Pedidos => "orders",
            Page::RegistroEquipo => "products",
        }
    }

    pub fn all() -> [Page; 2] {
        [Page::Pedidos, Page::RegistroEquipo]
    }

    /// Page for a URL fragment, with or without the leading `#`
    pub fn from_hash(hash: &str) -> Option<Page> {
        let key = hash.trim_start_matches('#');
        Page::all().into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Pedidos),
        }
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page '{}'", page.key());
        self.active.set(page);
    }

    /// Restore the active page from the URL fragment and keep the fragment
    /// in sync afterwards. The query string belongs to the order search.
    pub fn init_location_sync(&self) {
        let hash = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        if let Some(page) = Page::from_hash(&hash) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let new_hash = format!("#{}", page.key());

            let Some(w) = window() else { return };
            let location = w.location();
            let current_hash = location.hash().unwrap_or_default();
            if current_hash == new_hash {
                return;
            }

            let search = location.search().unwrap_or_default();
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&format!("{}{}", search, new_hash)),
                );
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_hash() {
        assert_eq!(Page::from_hash("#registro"), Some(Page::RegistroEquipo));
        assert_eq!(Page::from_hash("pedidos"), Some(Page::Pedidos));
        assert_eq!(Page::from_hash(""), None);
        assert_eq!(Page::from_hash("#otra"), None);
    }
}
