use super::Theme;
use crate::error::PortalError;

/// Browser surface the theme controller talks to besides storage.
pub trait ThemeEnvironment: Clone + 'static {
    /// `Some(true)` when the platform asks for a dark presentation, `None`
    /// when the signal cannot be queried.
    fn prefers_dark(&self) -> Option<bool>;

    /// Sets the single root class token consumers style against.
    fn apply_marker(&self, theme: Theme);

    fn supports_transitions(&self) -> bool;

    /// Hands `update` to the platform's view transition so the change is
    /// rendered as a cross-fade. The platform decides when `update` runs.
    ///
    /// On `Err` the caller cannot assume `update` ran.
    fn start_transition(&self, update: Box<dyn FnOnce()>) -> Result<(), PortalError>;
}

/// `document`, `matchMedia` and `startViewTransition` of the current window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserEnvironment;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(target_arch = "wasm32")]
mod dom {
    use js_sys::{ Function, Reflect };
    use wasm_bindgen::{ JsCast, JsValue };

    pub fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    pub fn view_transition(document: &web_sys::Document) -> Option<Function> {
        let document = JsValue::from(document.clone());
        Reflect::get(&document, &JsValue::from_str("startViewTransition"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeEnvironment for BrowserEnvironment {
    fn prefers_dark(&self) -> Option<bool> {
        let window = web_sys::window()?;
        match window.match_media(DARK_QUERY) {
            Ok(list) => list.map(|list| list.matches()),
            Err(err) => {
                log::debug!("matchMedia unavailable: {:?}", err);
                None
            }
        }
    }

    fn apply_marker(&self, theme: Theme) {
        let Some(root) = dom::document().and_then(|document| document.document_element()) else {
            log::debug!("No document element to mark with '{}'", theme);
            return;
        };
        let classes = root.class_list();
        if let Err(err) = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str()) {
            log::debug!("Failed to clear theme classes: {:?}", err);
        }
        if let Err(err) = classes.add_1(theme.as_str()) {
            log::debug!("Failed to add '{}' class: {:?}", theme, err);
        }
    }

    fn supports_transitions(&self) -> bool {
        dom::document().and_then(|document| dom::view_transition(&document)).is_some()
    }

    fn start_transition(&self, update: Box<dyn FnOnce()>) -> Result<(), PortalError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsValue;

        let document = dom::document()
            .ok_or_else(|| PortalError::Transition("no document".to_string()))?;
        let start = dom::view_transition(&document)
            .ok_or_else(|| PortalError::Transition("startViewTransition missing".to_string()))?;
        let callback = Closure::once_into_js(move || update());
        start
            .call1(&JsValue::from(document), &callback)
            .map(|_| ())
            .map_err(|err| PortalError::Transition(format!("{:?}", err)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeEnvironment for BrowserEnvironment {
    fn prefers_dark(&self) -> Option<bool> {
        log::debug!("No {} query outside the browser", DARK_QUERY);
        None
    }

    fn apply_marker(&self, _theme: Theme) {}

    fn supports_transitions(&self) -> bool {
        false
    }

    fn start_transition(&self, _update: Box<dyn FnOnce()>) -> Result<(), PortalError> {
        Err(PortalError::Transition("no view transitions outside the browser".to_string()))
    }
}
