//! Cancelable one-shot timers. Dropping a [`Timeout`] cancels it.

#[cfg(target_arch = "wasm32")]
pub struct Timeout {
    inner: gloo_timers::callback::Timeout,
}

#[cfg(target_arch = "wasm32")]
impl Timeout {
    pub fn new(ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        Some(Self {
            inner: gloo_timers::callback::Timeout::new(ms, callback),
        })
    }

    /// Let the timer fire without holding a handle
    pub fn forget(self) {
        let _ = self.inner.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct Timeout {
    window: web_sys_x::Window,
    handle: i32,
    callback: Option<wasm_bindgen_x::closure::Closure<dyn FnMut()>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Timeout {
    pub fn new(ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        use wasm_bindgen_x::JsCast;

        let delay = i32::try_from(ms).ok()?;
        let window = web_sys_x::window()?;
        let callback = wasm_bindgen_x::closure::Closure::once(callback);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )
            .ok()?;
        Some(Self {
            window,
            handle,
            callback: Some(callback),
        })
    }

    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
        std::mem::forget(self);
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}
