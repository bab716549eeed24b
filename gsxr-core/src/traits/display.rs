//! Numeric display trait

/// Sink for the value shown on the add-on's numeric readout
pub trait DisplaySink {
    /// Show a value
    fn show(&mut self, value: u16);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn show(&mut self, value: u16) {
        (**self).show(value)
    }
}
