use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs `callback` once the window has stopped resizing for `delay_ms`.
///
/// Charts redraw on resize, and a window drag fires dozens of resize events per
/// second; only the last one in a burst triggers a redraw.
///
/// Returns `None` outside a browser window. The listener is removed when the
/// returned value is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = on_resize_debounced(move || redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn on_resize_debounced<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Overwriting the handle drops, and thereby cancels, the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
