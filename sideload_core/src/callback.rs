use std::rc::Rc;

/// A wrapper around a reference-counted closure.
///
/// Batch attaches share one callback across every node, so it is `Fn` and
/// cheap to clone rather than `FnOnce`.
#[derive(Clone)]
pub struct Callback<T = ()> {
    f: Rc<dyn Fn(T)>,
}

impl<T> Callback<T> {
    /// Create a new callback from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Call the callback.
    pub fn call(&self, arg: T) {
        (self.f)(arg);
    }
}

impl<T> std::fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback")
    }
}

// Allow passing a closure directly where a Callback is expected
impl<T, F> From<F> for Callback<T>
where
    F: Fn(T) + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Success notification for an attached node, called with the `load` event.
pub type OnLoad = Callback<web_sys::Event>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clones_share_closure() {
        let hits = Rc::new(Cell::new(0));
        let cb: Callback<u32> = {
            let hits = Rc::clone(&hits);
            Callback::new(move |n: u32| hits.set(hits.get() + n))
        };
        let other = cb.clone();
        cb.call(1);
        other.call(2);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_from_closure() {
        let seen = Rc::new(Cell::new(false));
        let cb: Callback<()> = {
            let seen = Rc::clone(&seen);
            (move |_: ()| seen.set(true)).into()
        };
        cb.call(());
        assert!(seen.get());
    }
}
