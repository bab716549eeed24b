//! Temperature sender trait

/// Source of the raw temperature value
///
/// Returns the sender reading in the 10-bit native range of the ECU frame
/// (0-1023). No conversion to degrees happens here: the dash owns its own
/// ADC-to-temperature table.
pub trait SensorReader {
    /// Take one reading
    fn read(&mut self) -> u16;
}

impl<T: SensorReader + ?Sized> SensorReader for &mut T {
    fn read(&mut self) -> u16 {
        (**self).read()
    }
}
