use crate::f;

/// Summary text for optional metadata
pub trait OptionExt {
    /// Formatted value, or `unset` when there is nothing to show
    ///
    /// Field summaries list every metadata entry, whether or not the model
    /// output provided it.
    ///
    /// ```rust
    /// # use ashtools_utils::{Coordinate, OptionExt};
    /// let source = Some(Coordinate::new(61.3, -152.25));
    /// assert_eq!(source.or_unset(), "61.3000N 152.2500W");
    ///
    /// let units: Option<String> = None;
    /// assert_eq!(units.or_unset(), "unset");
    /// ```
    fn or_unset(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn or_unset(&self) -> String {
        self.as_ref()
            .map_or_else(|| "unset".to_string(), |value| f!("{value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_contained_value() {
        assert_eq!(Some("mm").or_unset(), "mm");
        assert_eq!(Some(0.25).or_unset(), "0.25");
        assert_eq!(None::<f64>.or_unset(), "unset");
    }
}
