use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One-way visibility latch for a content block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    has_revealed: bool,
}

impl RevealState {
    /// Returns true only on the call that flips the latch.
    pub fn on_visibility(&mut self, visible: bool) -> bool {
        if visible && !self.has_revealed {
            self.has_revealed = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// CSS margin applied to the viewport before testing intersection.
    /// Negative values shrink it so blocks reveal a little after entering.
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: "-100px".to_string(),
            threshold: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("visibility observation is not supported here")]
    Unsupported,
    #[error("could not observe element: {0}")]
    Observe(String),
}

pub trait VisibilityWatch {
    fn disconnect(&self);
}

/// Platform capability: report whether a region is visible as that changes.
pub trait VisibilitySource {
    type Target;

    fn watch(
        &self,
        target: &Self::Target,
        options: &RevealOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Box<dyn VisibilityWatch>, RevealError>;
}

type WatchSlot = Rc<RefCell<Option<Box<dyn VisibilityWatch>>>>;

/// Keeps a [`reveal_once`] observation alive; dropping it stops watching.
pub struct RevealWatch {
    slot: WatchSlot,
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            if let Some(watch) = slot.take() {
                watch.disconnect();
            }
        }
    }
}

/// Watches `target` until it is first seen, calls `on_reveal` once and then
/// stops watching.
pub fn reveal_once<S: VisibilitySource>(
    source: &S,
    target: &S::Target,
    options: &RevealOptions,
    on_reveal: impl FnOnce() + 'static,
) -> Result<RevealWatch, RevealError> {
    let slot: WatchSlot = Rc::new(RefCell::new(None));
    let revealed = Rc::new(Cell::new(false));
    let mut state = RevealState::default();
    let mut on_reveal = Some(on_reveal);

    let watch = {
        // the watch owns this closure, so it must not keep the slot alive
        let slot: Weak<RefCell<Option<Box<dyn VisibilityWatch>>>> = Rc::downgrade(&slot);
        let revealed = revealed.clone();
        source.watch(
            target,
            options,
            Box::new(move |visible| {
                if !state.on_visibility(visible) {
                    return;
                }
                revealed.set(true);
                if let Some(callback) = on_reveal.take() {
                    callback();
                }
                if let Some(slot) = slot.upgrade() {
                    if let Ok(slot) = slot.try_borrow() {
                        if let Some(watch) = slot.as_ref() {
                            watch.disconnect();
                        }
                    }
                }
            }),
        )?
    };

    // the source may report visibility before handing the watch back
    if revealed.get() {
        watch.disconnect();
    }
    *slot.borrow_mut() = Some(watch);
    Ok(RevealWatch { slot })
}

/// Browser implementation backed by `IntersectionObserver`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectionSource;

struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatch for IntersectionWatch {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl IntersectionSource {
    pub fn is_supported() -> bool {
        web_sys::window()
            .map(|window| {
                js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
}

impl VisibilitySource for IntersectionSource {
    type Target = Element;

    fn watch(
        &self,
        target: &Element,
        options: &RevealOptions,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Box<dyn VisibilityWatch>, RevealError> {
        if !Self::is_supported() {
            return Err(RevealError::Unsupported);
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(entry.is_intersecting());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| RevealError::Observe(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Box::new(IntersectionWatch {
            observer,
            _callback: callback,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_visibility() {
        let mut state = RevealState::default();
        assert!(!state.has_revealed);
        assert!(!state.on_visibility(false));
        assert!(state.on_visibility(true));
        assert!(state.has_revealed);
    }

    #[test]
    fn never_reverts_after_leaving_viewport() {
        let mut state = RevealState::default();
        state.on_visibility(true);
        for visible in [false, true, false, false, true] {
            assert!(!state.on_visibility(visible));
            assert!(state.has_revealed);
        }
    }

    #[test]
    fn default_margin_insets_viewport() {
        let options = RevealOptions::default();
        assert_eq!(options.root_margin, "-100px");
        assert_eq!(options.threshold, 0.0);
    }

    /// Hands visibility changes to the latest callback by hand.
    #[derive(Default)]
    struct ManualSource {
        on_change: RefCell<Option<Box<dyn FnMut(bool)>>>,
        disconnects: Rc<Cell<usize>>,
        report_immediately: Option<bool>,
    }

    struct ManualWatch {
        disconnects: Rc<Cell<usize>>,
    }

    impl VisibilityWatch for ManualWatch {
        fn disconnect(&self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    impl ManualSource {
        fn emit(&self, visible: bool) {
            if let Some(on_change) = self.on_change.borrow_mut().as_mut() {
                on_change(visible);
            }
        }
    }

    impl VisibilitySource for ManualSource {
        type Target = ();

        fn watch(
            &self,
            _target: &(),
            _options: &RevealOptions,
            mut on_change: Box<dyn FnMut(bool)>,
        ) -> Result<Box<dyn VisibilityWatch>, RevealError> {
            if let Some(visible) = self.report_immediately {
                on_change(visible);
            }
            *self.on_change.borrow_mut() = Some(on_change);
            Ok(Box::new(ManualWatch {
                disconnects: self.disconnects.clone(),
            }))
        }
    }

    struct Unsupported;

    impl VisibilitySource for Unsupported {
        type Target = ();

        fn watch(
            &self,
            _target: &(),
            _options: &RevealOptions,
            _on_change: Box<dyn FnMut(bool)>,
        ) -> Result<Box<dyn VisibilityWatch>, RevealError> {
            Err(RevealError::Unsupported)
        }
    }

    #[test]
    fn reveal_once_fires_a_single_time() {
        let source = ManualSource::default();
        let reveals = Rc::new(Cell::new(0));
        let counter = reveals.clone();
        let _watch = reveal_once(&source, &(), &RevealOptions::default(), move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();

        source.emit(false);
        assert_eq!(reveals.get(), 0);
        source.emit(true);
        source.emit(false);
        source.emit(true);
        assert_eq!(reveals.get(), 1);
        assert_eq!(source.disconnects.get(), 1);
    }

    #[test]
    fn immediate_visibility_still_disconnects() {
        let source = ManualSource {
            report_immediately: Some(true),
            ..Default::default()
        };
        let reveals = Rc::new(Cell::new(0));
        let counter = reveals.clone();
        let watch = reveal_once(&source, &(), &RevealOptions::default(), move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();

        assert_eq!(reveals.get(), 1);
        assert_eq!(source.disconnects.get(), 1);
        drop(watch);
        assert_eq!(source.disconnects.get(), 2);
    }

    #[test]
    fn unsupported_source_is_reported() {
        let result = reveal_once(&Unsupported, &(), &RevealOptions::default(), || {});
        assert_eq!(result.err(), Some(RevealError::Unsupported));
    }

    /// Watch that owns its callback, like the browser observer does.
    struct OwningSource;

    struct OwningWatch {
        _on_change: RefCell<Box<dyn FnMut(bool)>>,
    }

    impl VisibilityWatch for OwningWatch {
        fn disconnect(&self) {}
    }

    impl VisibilitySource for OwningSource {
        type Target = ();

        fn watch(
            &self,
            _target: &(),
            _options: &RevealOptions,
            on_change: Box<dyn FnMut(bool)>,
        ) -> Result<Box<dyn VisibilityWatch>, RevealError> {
            Ok(Box::new(OwningWatch {
                _on_change: RefCell::new(on_change),
            }))
        }
    }

    #[test]
    fn dropping_watch_frees_callback_state() {
        let marker = Rc::new(());
        let held = marker.clone();
        let watch = reveal_once(&OwningSource, &(), &RevealOptions::default(), move || {
            let _ = &held;
        })
        .unwrap();
        assert_eq!(Rc::strong_count(&marker), 2);

        drop(watch);
        assert_eq!(Rc::strong_count(&marker), 1);
    }
}
