use contracts::system::access::HOME;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const PAGE_PARAM: &str = "page";

/// Client-side navigation state: the selected page key and the sidebar toggle
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub selected: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(HOME.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn select(&self, key: &str) {
        log::debug!("select page: {}", key);
        self.selected.set(key.to_string());
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.with(|s| s == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Restores the page from `?page=` once and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = page_from_query(&search) {
            self.selected.set(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.selected.get();
            let new_url = format!("?{}", page_query(&key));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn page_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(PAGE_PARAM).filter(|k| !k.is_empty()).cloned()
}

fn page_query(key: &str) -> String {
    serde_qs::to_string(&HashMap::from([(PAGE_PARAM.to_string(), key.to_string())]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_roundtrip() {
        assert_eq!(page_query("RentManager"), "page=RentManager");
        assert_eq!(
            page_from_query("?page=RentManager").as_deref(),
            Some("RentManager")
        );
    }

    #[test]
    fn test_missing_or_empty_page() {
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?page="), None);
        assert_eq!(page_from_query("?other=1"), None);
    }
}
