use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use js_sys::{Function, Promise};
use sideload_core::SideloadResult;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, EventTarget};

pub const LOAD: &str = "load";
pub const ERROR: &str = "error";

/// 为资源节点注册一次性的 `load` / `error` 监听。
///
/// 先触发的事件生效：成功时调用 `on_load`，失败时调用 `on_error`，
/// 另一个回调随之丢弃，两个监听器都会被移除。
pub fn on_settled<L, E>(target: &EventTarget, on_load: L, on_error: E) -> SideloadResult<()>
where
    L: FnOnce(Event) + 'static,
    E: FnOnce(Event) + 'static,
{
    let pending = Rc::new(RefCell::new(Some((on_load, on_error))));
    let registered: Rc<RefCell<Option<JsValue>>> = Rc::new(RefCell::new(None));

    let listener = {
        let target = target.clone();
        let registered = Rc::clone(&registered);
        Closure::wrap(Box::new(move |event: Event| {
            let settled = pending.borrow_mut().take();
            let Some((on_load, on_error)) = settled else {
                return;
            };

            let handler = registered.borrow_mut().take();
            if let Some(handler) = handler {
                let handler = handler.unchecked_ref::<Function>();
                let _ = target.remove_event_listener_with_callback(LOAD, handler);
                let _ = target.remove_event_listener_with_callback(ERROR, handler);
            }

            if event.type_() == LOAD {
                on_load(event);
            } else {
                on_error(event);
            }
        }) as Box<dyn FnMut(Event)>)
        .into_js_value()
    };

    target.add_event_listener_with_callback(LOAD, listener.unchecked_ref())?;
    target.add_event_listener_with_callback(ERROR, listener.unchecked_ref())?;
    *registered.borrow_mut() = Some(listener);
    Ok(())
}

/// Resolves with the first `load` event (`Ok`) or `error` event (`Err`) fired
/// on `target`.
///
/// The listeners are registered before this returns, so the signal can be
/// created right after the node is appended without missing the event.
pub fn load_signal(
    target: &EventTarget,
) -> SideloadResult<impl Future<Output = Result<Event, Event>> + 'static> {
    let mut registered = Ok(());
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        registered = on_settled(
            target,
            move |event| {
                let _ = resolve.call1(&JsValue::NULL, &event);
            },
            move |event| {
                let _ = reject.call1(&JsValue::NULL, &event);
            },
        );
    });
    registered?;

    let settled = JsFuture::from(promise);
    Ok(async move {
        match settled.await {
            Ok(event) => Ok(event.unchecked_into::<Event>()),
            Err(event) => Err(event.unchecked_into::<Event>()),
        }
    })
}
