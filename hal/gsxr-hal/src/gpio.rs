//! Digital outputs
//!
//! The dash emulator only drives lines: the three wires of the LED
//! controller bus. Nothing is read back from a pin.

/// Push-pull output line
pub trait OutputPin {
    /// Drive the line high
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);

    /// Drive the line to `high`
    ///
    /// Used to put a data bit on a serial line.
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level last driven
    fn is_set_high(&self) -> bool;

    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
