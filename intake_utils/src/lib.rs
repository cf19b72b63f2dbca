pub use intake_utils_derive::trace_instrument;

mod macros;

pub trait Apply {
    /// Applies the function `f` with a mutable reference to `self`.
    ///
    /// #### Example
    /// ```rust
    /// # use intake_utils::Apply;
    /// let v = vec![1, 2].with(|v| v.push(3));
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    fn with<X>(mut self, f: impl FnOnce(&mut Self) -> X) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }

    /// Passes `self` through the function `f`.
    ///
    /// Useful to keep builder chains flowing through helpers that take and
    /// return the value by ownership.
    ///
    /// #### Example
    /// ```rust
    /// # use intake_utils::Apply;
    /// fn double(x: i32) -> i32 {
    ///     x * 2
    /// }
    /// assert_eq!(3.apply(double).apply(double), 12);
    /// ```
    fn apply(self, f: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        f(self)
    }
}

impl<T> Apply for T {}
