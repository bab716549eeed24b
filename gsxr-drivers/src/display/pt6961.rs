//! PT6961 LED driver
//!
//! Four 7-segment digits behind a PT6961 (TM1628-compatible) controller,
//! driven over a 3-wire serial bus (DIN, CLK, STB). Data is shifted LSB
//! first and latched on the rising clock edge while STB is low.
//!
//! Display RAM holds two bytes per grid; only the first byte of each of the
//! first four grids carries segments on this board.

use embedded_hal::delay::DelayNs;
use gsxr_core::traits::DisplaySink;
use gsxr_hal::OutputPin;

/// Display mode: 6 grids, 12 segments
const CMD_MODE_6X12: u8 = 0x02;

/// Data command: write, auto-increment address
const CMD_WRITE_AUTO: u8 = 0x40;

/// Address command base (RAM address 0)
const CMD_ADDRESS: u8 = 0xC0;

/// Display control: on, pulse width 14/16
const CMD_DISPLAY_ON: u8 = 0x8F;

/// Bytes of display RAM cleared on init
const RAM_SIZE: usize = 14;

/// Number of digits on the readout
pub const DIGITS: usize = 4;

/// Segment bit for the colon / decimal point
const SEG_COLON: u8 = 0x80;

/// Segment patterns for 0-9 (bit 0 = segment a)
const SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Clock half-period (us)
const HALF_PERIOD_US: u32 = 1;

/// Split a value into four decimal digits, most significant first
///
/// Keeps leading zeros. Only the low four digits of larger values survive.
pub fn digits(value: u16) -> [u8; DIGITS] {
    [
        ((value / 1000) % 10) as u8,
        ((value / 100) % 10) as u8,
        ((value / 10) % 10) as u8,
        (value % 10) as u8,
    ]
}

/// PT6961 display on three GPIO lines
pub struct Pt6961<DIN, CLK, STB, D> {
    din: DIN,
    clk: CLK,
    stb: STB,
    delay: D,
}

impl<DIN, CLK, STB, D> Pt6961<DIN, CLK, STB, D>
where
    DIN: OutputPin,
    CLK: OutputPin,
    STB: OutputPin,
    D: DelayNs,
{
    /// Take the bus lines and park them idle (STB and CLK high)
    pub fn new(mut din: DIN, mut clk: CLK, mut stb: STB, delay: D) -> Self {
        stb.set_high();
        clk.set_high();
        din.set_low();
        Self {
            din,
            clk,
            stb,
            delay,
        }
    }

    /// Configure the controller, blank the RAM and switch the display on
    pub fn init(&mut self) {
        self.send_command(CMD_MODE_6X12);
        self.send_command(CMD_WRITE_AUTO);

        self.begin();
        self.shift_out(CMD_ADDRESS);
        for _ in 0..RAM_SIZE {
            self.shift_out(0x00);
        }
        self.end();

        self.send_command(CMD_DISPLAY_ON);
    }

    /// Send a single-byte command in its own strobe window
    pub fn send_command(&mut self, command: u8) {
        self.begin();
        self.shift_out(command);
        self.end();
    }

    /// Show a value as four decimal digits
    pub fn show_number(&mut self, value: u16, colon: bool) {
        let d = digits(value);
        self.send_segments(
            [
                SEGMENTS[d[0] as usize],
                SEGMENTS[d[1] as usize],
                SEGMENTS[d[2] as usize],
                SEGMENTS[d[3] as usize],
            ],
            colon,
        );
    }

    /// Write raw segment patterns to the four digits
    ///
    /// Grids sit at RAM addresses 0, 2, 4, 6; the odd bytes are written as
    /// zero. The colon is segment 7 of the second digit.
    pub fn send_segments(&mut self, mut segments: [u8; DIGITS], colon: bool) {
        if colon {
            segments[1] |= SEG_COLON;
        }

        self.send_command(CMD_WRITE_AUTO);

        self.begin();
        self.shift_out(CMD_ADDRESS);
        for seg in segments {
            self.shift_out(seg);
            self.shift_out(0x00);
        }
        self.end();
    }

    fn begin(&mut self) {
        self.stb.set_low();
        self.delay.delay_us(HALF_PERIOD_US);
    }

    fn end(&mut self) {
        self.stb.set_high();
        self.delay.delay_us(HALF_PERIOD_US);
    }

    fn shift_out(&mut self, byte: u8) {
        for bit in 0..8 {
            self.clk.set_low();
            self.din.set_state(byte & (1 << bit) != 0);
            self.delay.delay_us(HALF_PERIOD_US);
            self.clk.set_high();
            self.delay.delay_us(HALF_PERIOD_US);
        }
    }
}

impl<DIN, CLK, STB, D> DisplaySink for Pt6961<DIN, CLK, STB, D>
where
    DIN: OutputPin,
    CLK: OutputPin,
    STB: OutputPin,
    D: DelayNs,
{
    fn show(&mut self, value: u16) {
        self.show_number(value, false);
    }
}
