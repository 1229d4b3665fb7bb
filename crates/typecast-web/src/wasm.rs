//! `wasm-bindgen` exports and the per-page typewriter session.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use tracing::{debug, warn};
use typecast_core::motion::parse_override;
use typecast_core::time::duration_from_millis;
use typecast_core::{MotionPreference, TypewriterConfig, TypewriterLoop};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::dom::{Callbacks, DomHost};
use crate::{DomError, REDUCED_MOTION_QUERY};

type SharedLoop = Rc<RefCell<Option<TypewriterLoop<DomHost>>>>;

/// A live typewriter plus the closures the browser calls into.
///
/// The closures must outlive every registration made with them, so the
/// session keeps them until it is replaced or unmounted.
struct Session {
    state: SharedLoop,
    _on_frame: Closure<dyn FnMut(f64)>,
    _on_visibility: Closure<dyn FnMut()>,
    _on_unload: Closure<dyn FnMut()>,
}

impl Session {
    fn teardown(&self) {
        if let Some(lp) = self.state.borrow_mut().as_mut() {
            lp.teardown();
        }
    }

    fn is_running(&self) -> bool {
        self.state
            .borrow()
            .as_ref()
            .is_some_and(TypewriterLoop::is_scheduled)
    }
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let global = js_sys::global();
            if let Ok(console) = Reflect::get(&global, &"console".into()) {
                if let Ok(error) = Reflect::get(&console, &"error".into()) {
                    if let Ok(f) = error.dyn_into::<Function>() {
                        let _ = f.call1(&console, &JsValue::from_str(&format!("{info}")));
                    }
                }
            }
        }));
    });
}

fn as_function<T: ?Sized>(closure: &Closure<T>) -> Function {
    closure.as_ref().unchecked_ref::<Function>().clone()
}

fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(list) => list.is_some_and(|list| list.matches()),
        Err(err) => {
            warn!(err = %DomError::from(err), "matchMedia failed; assuming no motion preference");
            false
        }
    }
}

/// Mount a typewriter on the first element matching `config.selector`.
///
/// Returns whether an animation is now running.
fn mount_session(config: &TypewriterConfig) -> Result<bool, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    unmount_typewriter();

    let target = document.query_selector(&config.selector)?;
    let motion = match &target {
        Some(element) => MotionPreference {
            prefers_reduced_motion: prefers_reduced_motion(&window),
            force_animation: parse_override(
                element.get_attribute(&config.override_attribute).as_deref(),
            ),
        },
        None => MotionPreference::full(),
    };

    let state: SharedLoop = Rc::new(RefCell::new(None));
    let on_frame = {
        let state = Rc::clone(&state);
        Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(lp) = state.borrow_mut().as_mut() {
                lp.on_frame(duration_from_millis(timestamp));
            }
        })
    };
    let on_visibility = {
        let state = Rc::clone(&state);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(lp) = state.borrow_mut().as_mut() {
                lp.on_visibility_change();
            }
        })
    };
    let on_unload = {
        let state = Rc::clone(&state);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(lp) = state.borrow_mut().as_mut() {
                debug!("page unloading; stopping typewriter");
                lp.teardown();
            }
        })
    };

    let host = target.map(|element| {
        let callbacks = Callbacks {
            on_frame: as_function(&on_frame),
            on_visibility: as_function(&on_visibility),
            on_unload: as_function(&on_unload),
        };
        DomHost::new(window, document, element, callbacks)
    });
    let Some(lp) = TypewriterLoop::mount(host, config, motion).into_running() else {
        return Ok(false);
    };
    let running = lp.is_scheduled();
    *state.borrow_mut() = Some(lp);
    SESSION.with(|slot| {
        *slot.borrow_mut() = Some(Session {
            state,
            _on_frame: on_frame,
            _on_visibility: on_visibility,
            _on_unload: on_unload,
        });
    });
    Ok(running)
}

/// Mount the typewriter.
///
/// `optionsJson` overrides any subset of the defaults (see
/// `TypewriterConfig::from_json`). Returns `true` when an animation started;
/// `false` when the element is missing, there are no phrases, or reduced
/// motion rendered the first phrase statically. Throws on malformed options.
#[wasm_bindgen(js_name = mountTypewriter)]
pub fn mount_typewriter(options_json: Option<String>) -> Result<bool, JsValue> {
    install_panic_hook();
    let config = match options_json.as_deref() {
        Some(json) => TypewriterConfig::from_json(json)
            .map_err(|err| JsValue::from_str(&err.to_string()))?,
        None => TypewriterConfig::default(),
    };
    mount_session(&config).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Stop the active typewriter, if any. Safe to call repeatedly.
#[wasm_bindgen(js_name = unmountTypewriter)]
pub fn unmount_typewriter() {
    let previous = SESSION.with(|slot| slot.borrow_mut().take());
    if let Some(session) = previous {
        session.teardown();
    }
}

/// Whether a typewriter frame is currently scheduled.
#[wasm_bindgen(js_name = isTypewriterRunning)]
pub fn is_typewriter_running() -> bool {
    SESSION.with(|slot| slot.borrow().as_ref().is_some_and(Session::is_running))
}

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        autostart();
        return;
    }
    let ready = Closure::once_into_js(autostart);
    if let Err(err) =
        document.add_event_listener_with_callback(crate::READY_EVENT, ready.unchecked_ref())
    {
        warn!(err = %DomError::from(err), "failed to wait for DOMContentLoaded");
    }
}

/// Mount with default options unless a session is already live.
///
/// An explicit `mountTypewriter` made before the DOM finished loading wins
/// over the deferred autostart.
pub fn autostart() {
    if SESSION.with(|slot| slot.borrow().is_some()) {
        debug!("typewriter already mounted; skipping autostart");
        return;
    }
    if let Err(err) = mount_session(&TypewriterConfig::default()) {
        warn!(%err, "typewriter autostart failed");
    }
}
