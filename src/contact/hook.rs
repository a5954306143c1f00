use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::controller::FormController;
use super::relay::HttpRelay;
use super::submission::{clears_fields, ContactFields, SubmissionState};
use crate::config;

/// Counts delivered messages. Bumped through the reducer so an increment
/// dispatched from a finished request never reads a stale render's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearGeneration(pub u32);

impl Reducible for ClearGeneration {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(ClearGeneration(self.0.wrapping_add(1)))
    }
}

#[derive(Clone)]
pub struct UseFormHandle {
    pub state: UseReducerHandle<SubmissionState>,
    pub submit: Callback<ContactFields>,
    pub reset: Callback<()>,
    /// Changes after every delivered message; the form clears its inputs
    /// when it does.
    pub cleared: ClearGeneration,
}

#[hook]
pub fn use_form_handler() -> UseFormHandle {
    let state = use_reducer(SubmissionState::default);
    let cleared = use_reducer(ClearGeneration::default);
    let controller = use_memo(
        |_| FormController::new(HttpRelay, config::relay_config()),
        (),
    );

    let submit = {
        let dispatcher = state.dispatcher();
        let bump_cleared = cleared.dispatcher();
        let controller: Rc<FormController<HttpRelay>> = controller.clone();
        Callback::from(move |fields: ContactFields| {
            let dispatcher = dispatcher.clone();
            let bump_cleared = bump_cleared.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let event = controller
                    .submit(&fields, |event| dispatcher.dispatch(event))
                    .await;
                if clears_fields(&event) {
                    bump_cleared.dispatch(());
                }
            });
        })
    };

    let reset = {
        let dispatcher = state.dispatcher();
        let controller = controller.clone();
        Callback::from(move |_| controller.reset(|event| dispatcher.dispatch(event)))
    };

    UseFormHandle {
        state,
        submit,
        reset,
        cleared: *cleared,
    }
}
