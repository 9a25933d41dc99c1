//! # APDS-9930 Digital Proximity and Ambient Light Sensor Driver
//!
//! This is a platform-agnostic Rust driver for the APDS-9930 digital proximity
//! and ambient light sensor, built using the [`embedded-hal`] traits for I2C
//! communication.
//!
//! The APDS-9930 provides:
//! - Ambient light sensing on two photodiode channels (visible + IR, IR only)
//! - Proximity detection with IR LED drive up to 100 mA
//! - Programmable ALS gain (1x to 120x) and proximity gain (1x to 8x)
//! - Interrupt support with 16-bit thresholds and persistence filtering
//! - I2C interface (address 0x39)
//!
//! ## Features
//!
//! - **High-level API** for ambient light and proximity measurements
//! - **Async/await support** with feature gating (optional)
//! - **Interrupt support** with threshold configuration and clear commands
//! - **Lux calculation** from the raw channel data
//! - **Power management** through the ENABLE register feature bits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apds9930::Apds9930;
//! use embedded_hal::i2c::I2c;
//!
//! # fn main() {
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! let mut sensor = Apds9930::new(i2c);
//!
//! // Verify the device ID and program the power-on defaults
//! sensor.init().unwrap();
//!
//! // Turn on the ambient light sensor (without interrupts)
//! sensor.enable_ambient_light_sensor(false).unwrap();
//!
//! // Wait one integration cycle before the first reading
//! // std::thread::sleep(std::time::Duration::from_millis(120));
//!
//! // Read the ambient light level in lux
//! // let lux = sensor.ambient_light().unwrap();
//! // println!("Ambient light: {:.2} lux", lux);
//! # }
//! ```
//!
//! ## Async Usage
//!
//! Enable the `async` feature to use async/await patterns:
//!
//! ```toml
//! [dependencies]
//! apds9930 = { version = "0.1", features = ["async"] }
//! ```
//!
//! ```rust,ignore
//! # #[cfg(feature = "async")]
//! # async fn example() {
//! use apds9930::Apds9930;
//! use embedded_hal_async::i2c::I2c;
//!
//! let i2c = /* your async I2C implementation */;
//! let mut sensor = Apds9930::new_async(i2c);
//!
//! sensor.init_async().await.unwrap();
//! sensor.enable_proximity_sensor_async(true).await.unwrap();
//!
//! let distance = sensor.proximity_async().await.unwrap();
//! println!("Proximity: {}", distance);
//! # }
//! ```
//!
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal

#![no_std]
#![deny(missing_docs)]

use embedded_hal::i2c::I2c;

#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c as AsyncI2c;

pub mod ll;

use ll::register;
pub use ll::{CommandMode, I2C_ADDRESS};

/// Features gated by the individual bits of the ENABLE register
///
/// `All` is the bulk selector: enabling it writes `0x7F` and disabling it
/// writes `0x00`, replacing the whole register (bit 7 is reserved and never
/// set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Internal oscillator (PON, bit 0)
    Power = 0,
    /// Ambient light sensor (AEN, bit 1)
    AmbientLight = 1,
    /// Proximity sensor (PEN, bit 2)
    Proximity = 2,
    /// Wait timer (WEN, bit 3)
    Wait = 3,
    /// Ambient light interrupt (AIEN, bit 4)
    AmbientLightInt = 4,
    /// Proximity interrupt (PIEN, bit 5)
    ProximityInt = 5,
    /// Sleep after interrupt (SAI, bit 6)
    SleepAfterInt = 6,
    /// All of the above at once
    All = 7,
}

/// LED drive strength for the proximity IR LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum LedDrive {
    /// 100 mA
    #[default]
    Ma100 = 0,
    /// 50 mA
    Ma50 = 1,
    /// 25 mA
    Ma25 = 2,
    /// 12.5 mA
    Ma12_5 = 3,
}

/// Receiver gain for proximity detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum ProximityGain {
    /// 1x gain
    Gain1x = 0,
    /// 2x gain
    Gain2x = 1,
    /// 4x gain
    Gain4x = 2,
    /// 8x gain
    #[default]
    Gain8x = 3,
}

/// Receiver gain for the ambient light sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum AlsGain {
    /// 1x gain
    Gain1x = 0,
    /// 8x gain
    Gain8x = 1,
    /// 16x gain
    #[default]
    Gain16x = 2,
    /// 120x gain
    Gain120x = 3,
}

/// Photodiode used for proximity detection
///
/// The channel 1 diode is the only selection the datasheet defines; the
/// remaining field values are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum ProximityDiode {
    /// Channel 1 photodiode
    #[default]
    Ch1 = 2,
}

/// All possible errors in this crate
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
    /// The ID register did not match any accepted device ID
    InvalidDeviceId {
        /// ID value read from the device
        found: u8,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C communication error: {:?}", e),
            Error::InvalidDeviceId { found } => {
                write!(f, "device ID not recognized: 0x{:02X}", found)
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

/// Number of registers returned by [`Apds9930::dump_registers`]
pub const DUMP_LEN: usize = 27;

/// Convert raw channel readings to lux using the datasheet equation
///
/// `als_gain_code` is the raw 2-bit AGAIN register code (0-3), which the
/// equation uses directly in the denominator rather than the optical
/// multiplier it stands for (1x/8x/16x/120x). Other APDS-993x ports disagree
/// on this point; the code form is kept here. A gain code of 0 therefore
/// yields a non-finite result, and `iac` is not clamped, so noisy or
/// saturated channel readings can produce a negative lux value.
pub fn lux_from_channels(ch0: u16, ch1: u16, als_gain_code: u8) -> f32 {
    let ch0 = ch0 as f32;
    let ch1 = ch1 as f32;
    // Integration time from the default ATIME, not the live register
    let alsit = 2.73 * (256.0 - ll::DEFAULT_ATIME as f32);
    let iac = f32::max(ch0 - ll::LUX_B * ch1, ll::LUX_C * ch0 - ll::LUX_D * ch1);
    let lpc = ll::LUX_GA * ll::LUX_DF / (alsit * als_gain_code as f32);
    iac * lpc
}

/// High-level APDS-9930 driver
///
/// The driver keeps no register cache: every getter issues a bus read and
/// every field setter re-reads the register it modifies before writing it
/// back. Read-modify-write sequences span two bus transactions and are not
/// atomic, so sharing one instance between threads requires external
/// serialization.
pub struct Apds9930<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> Apds9930<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Create a new APDS-9930 driver instance at the default address (0x39)
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, I2C_ADDRESS)
    }

    /// Create a new APDS-9930 driver instance at a custom address
    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Initialize the sensor with default settings
    ///
    /// Verifies the device ID, disables every feature, then programs the
    /// default timing, control, threshold and persistence values. If any
    /// step fails the device is left partially configured and the sequence
    /// must be rerun from the start.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        let id = self.id()?;
        if !ll::DEVICE_IDS.contains(&id) {
            return Err(Error::InvalidDeviceId { found: id });
        }

        // All features off while the defaults are programmed
        self.set_mode(Mode::All, false)?;

        self.write_reg(register::ATIME, ll::DEFAULT_ATIME)?;
        self.write_reg(register::WTIME, ll::DEFAULT_WTIME)?;
        self.write_reg(register::PPULSE, ll::DEFAULT_PPULSE)?;
        self.write_reg(register::POFFSET, ll::DEFAULT_POFFSET)?;
        self.write_reg(register::CONFIG, ll::DEFAULT_CONFIG)?;

        self.set_led_drive(LedDrive::default())?;
        self.set_proximity_gain(ProximityGain::default())?;
        self.set_ambient_light_gain(AlsGain::default())?;
        self.set_proximity_diode(ProximityDiode::default())?;

        self.set_proximity_int_low_threshold(ll::DEFAULT_PILT)?;
        self.set_proximity_int_high_threshold(ll::DEFAULT_PIHT)?;
        self.set_light_int_low_threshold(ll::DEFAULT_AILT)?;
        self.set_light_int_high_threshold(ll::DEFAULT_AIHT)?;

        self.write_reg(register::PERS, ll::DEFAULT_PERS)
    }

    /// Read the device ID register
    pub fn id(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(register::ID)
    }

    /// Read the raw ENABLE register
    pub fn mode(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(register::ENABLE)
    }

    /// Check whether a feature bit of the ENABLE register is set
    ///
    /// `Mode::All` reports whether every feature bit is set.
    pub fn get_mode(&mut self, mode: Mode) -> Result<bool, Error<E>> {
        let current = self.read_reg(register::ENABLE)?;
        Ok(match mode {
            Mode::All => current & ll::ENABLE_ALL == ll::ENABLE_ALL,
            _ => ll::get_bit(current, mode as u8),
        })
    }

    /// Enable or disable a feature bit of the ENABLE register
    ///
    /// Individual features are read-modify-written; `Mode::All` replaces
    /// the whole register with `0x7F` or `0x00`.
    pub fn set_mode(&mut self, mode: Mode, enable: bool) -> Result<(), Error<E>> {
        let current = self.read_reg(register::ENABLE)?;
        let value = match mode {
            Mode::All => {
                if enable {
                    ll::ENABLE_ALL
                } else {
                    0x00
                }
            }
            _ => ll::set_bit(current, mode as u8, enable),
        };
        self.write_reg(register::ENABLE, value)
    }

    /// Check whether the internal oscillator is powered on
    pub fn power(&mut self) -> Result<bool, Error<E>> {
        self.get_mode(Mode::Power)
    }

    /// Turn the internal oscillator on or off
    pub fn set_power(&mut self, on: bool) -> Result<(), Error<E>> {
        self.set_mode(Mode::Power, on)
    }

    /// Configure and turn on the ambient light sensor
    ///
    /// Sets the default ALS gain and the interrupt enable bit before
    /// powering on, so the first sample is taken with the final settings.
    pub fn enable_ambient_light_sensor(&mut self, interrupt: bool) -> Result<(), Error<E>> {
        self.set_ambient_light_gain(AlsGain::default())?;
        self.set_mode(Mode::AmbientLightInt, interrupt)?;
        self.set_mode(Mode::Power, true)?;
        self.set_mode(Mode::AmbientLight, true)
    }

    /// Configure and turn on the proximity sensor
    ///
    /// Sets the default proximity gain, LED drive, diode selection and the
    /// interrupt enable bit before powering on.
    pub fn enable_proximity_sensor(&mut self, interrupt: bool) -> Result<(), Error<E>> {
        self.set_proximity_gain(ProximityGain::default())?;
        self.set_led_drive(LedDrive::default())?;
        self.set_proximity_diode(ProximityDiode::default())?;
        self.set_mode(Mode::ProximityInt, interrupt)?;
        self.set_mode(Mode::Power, true)?;
        self.set_mode(Mode::Proximity, true)
    }

    /// Read the raw 2-bit LED drive code from the CONTROL register
    pub fn led_drive(&mut self) -> Result<u8, Error<E>> {
        self.control_field(ll::SHIFT_PDRIVE)
    }

    /// Set the proximity LED drive strength
    pub fn set_led_drive(&mut self, drive: LedDrive) -> Result<(), Error<E>> {
        self.update_control_field(ll::SHIFT_PDRIVE, drive as u8)
    }

    /// Read the raw 2-bit proximity gain code from the CONTROL register
    pub fn proximity_gain(&mut self) -> Result<u8, Error<E>> {
        self.control_field(ll::SHIFT_PGAIN)
    }

    /// Set the proximity receiver gain
    pub fn set_proximity_gain(&mut self, gain: ProximityGain) -> Result<(), Error<E>> {
        self.update_control_field(ll::SHIFT_PGAIN, gain as u8)
    }

    /// Read the raw 2-bit ALS gain code from the CONTROL register
    pub fn ambient_light_gain(&mut self) -> Result<u8, Error<E>> {
        self.control_field(ll::SHIFT_AGAIN)
    }

    /// Set the ambient light receiver gain
    pub fn set_ambient_light_gain(&mut self, gain: AlsGain) -> Result<(), Error<E>> {
        self.update_control_field(ll::SHIFT_AGAIN, gain as u8)
    }

    /// Read the raw 2-bit proximity diode code from the CONTROL register
    pub fn proximity_diode(&mut self) -> Result<u8, Error<E>> {
        self.control_field(ll::SHIFT_PDIODE)
    }

    /// Select the photodiode used for proximity detection
    pub fn set_proximity_diode(&mut self, diode: ProximityDiode) -> Result<(), Error<E>> {
        self.update_control_field(ll::SHIFT_PDIODE, diode as u8)
    }

    /// Read the ambient light interrupt low threshold
    pub fn light_int_low_threshold(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(register::AILTL)
    }

    /// Set the ambient light interrupt low threshold
    pub fn set_light_int_low_threshold(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16(register::AILTL, value)
    }

    /// Read the ambient light interrupt high threshold
    pub fn light_int_high_threshold(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(register::AIHTL)
    }

    /// Set the ambient light interrupt high threshold
    pub fn set_light_int_high_threshold(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16(register::AIHTL, value)
    }

    /// Read the proximity interrupt low threshold
    pub fn proximity_int_low_threshold(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(register::PILTL)
    }

    /// Set the proximity interrupt low threshold
    pub fn set_proximity_int_low_threshold(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16(register::PILTL, value)
    }

    /// Read the proximity interrupt high threshold
    pub fn proximity_int_high_threshold(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(register::PIHTL)
    }

    /// Set the proximity interrupt high threshold
    pub fn set_proximity_int_high_threshold(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16(register::PIHTL, value)
    }

    /// Read the channel 0 (visible + IR) light data
    pub fn ch0_light(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(register::CH0DATAL)
    }

    /// Read the channel 1 (IR only) light data
    pub fn ch1_light(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(register::CH1DATAL)
    }

    /// Read the proximity data register
    pub fn proximity(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(register::PDATAL)
    }

    /// Read both light channels and convert them to lux
    ///
    /// Uses the live ALS gain code from the CONTROL register; see
    /// [`lux_from_channels`] for the conversion details and its caveats.
    pub fn ambient_light(&mut self) -> Result<f32, Error<E>> {
        let ch0 = self.ch0_light()?;
        let ch1 = self.ch1_light()?;
        let gain = self.ambient_light_gain()?;
        Ok(lux_from_channels(ch0, ch1, gain))
    }

    /// Check whether the device is asserting an ambient light interrupt
    pub fn ambient_light_interrupt(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_reg(register::STATUS)?;
        Ok(ll::get_bit(status, ll::STATUS_AINT_BIT))
    }

    /// Clear the ambient light interrupt flag
    ///
    /// Only the device can assert the flag, so `asserted = true` is a bus
    /// no-op; `asserted = false` issues the clear command.
    pub fn set_ambient_light_interrupt(&mut self, asserted: bool) -> Result<(), Error<E>> {
        if !asserted {
            self.write_command(ll::CLEAR_ALS_INT)?;
        }
        Ok(())
    }

    /// Check whether the device is asserting a proximity interrupt
    pub fn proximity_interrupt(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_reg(register::STATUS)?;
        Ok(ll::get_bit(status, ll::STATUS_PINT_BIT))
    }

    /// Clear the proximity interrupt flag
    ///
    /// Only the device can assert the flag, so `asserted = true` is a bus
    /// no-op; `asserted = false` issues the clear command.
    pub fn set_proximity_interrupt(&mut self, asserted: bool) -> Result<(), Error<E>> {
        if !asserted {
            self.write_command(ll::CLEAR_PROX_INT)?;
        }
        Ok(())
    }

    /// Clear both interrupt flags with a single command
    pub fn clear_all_interrupts(&mut self) -> Result<(), Error<E>> {
        self.write_command(ll::CLEAR_ALL_INTS)
    }

    /// Read every register for debugging
    ///
    /// Returns `(address, value)` pairs for registers `0x00..=0x19` plus
    /// POFFSET. Format the addresses with [`ll::register_name`] if needed.
    pub fn dump_registers(&mut self) -> Result<[(u8, u8); DUMP_LEN], Error<E>> {
        let mut block = [0u8; DUMP_LEN - 1];
        self.read_block(register::ENABLE, &mut block)?;

        let mut out = [(0u8, 0u8); DUMP_LEN];
        for (addr, value) in block.iter().enumerate() {
            out[addr] = (addr as u8, *value);
        }
        out[DUMP_LEN - 1] = (register::POFFSET, self.read_reg(register::POFFSET)?);
        Ok(out)
    }

    /// Read a single register with an explicit command mode
    pub fn read_register(&mut self, reg: u8, mode: CommandMode) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg | mode as u8], &mut buffer)
            .map_err(Error::I2c)?;
        Ok(buffer[0])
    }

    /// Write a single register with an explicit command mode
    pub fn write_register(&mut self, reg: u8, value: u8, mode: CommandMode) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[reg | mode as u8, value])
            .map_err(Error::I2c)
    }

    /// Write a bare command byte with no register address
    ///
    /// Used for the special-function interrupt clear commands.
    pub fn write_command(&mut self, command: u8) -> Result<(), Error<E>> {
        self.i2c.write(self.address, &[command]).map_err(Error::I2c)
    }

    /// Read consecutive registers starting at `reg`
    pub fn read_block(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(
                self.address,
                &[reg | CommandMode::AutoIncrement as u8],
                buffer,
            )
            .map_err(Error::I2c)
    }

    /// Write consecutive registers starting at `reg`
    ///
    /// `data` must be at most 32 bytes, the SMBus block transfer limit.
    pub fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<E>> {
        // SMBus block transfers top out at 32 data bytes + 1 command byte
        let mut buf = [0u8; 33];
        buf[0] = reg | CommandMode::AutoIncrement as u8;
        let len = data.len();
        buf[1..1 + len].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..1 + len])
            .map_err(Error::I2c)
    }

    /// Destroy the driver and return the I2C interface
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    // Helper methods for register access

    fn read_reg(&mut self, reg: u8) -> Result<u8, Error<E>> {
        self.read_register(reg, CommandMode::AutoIncrement)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
        self.write_register(reg, value, CommandMode::AutoIncrement)
    }

    // 16-bit values live in consecutive registers, low byte first. The two
    // reads are separate transactions, so the value is not sampled
    // atomically.
    fn read_u16(&mut self, low_reg: u8) -> Result<u16, Error<E>> {
        let low = self.read_reg(low_reg)?;
        let high = self.read_reg(low_reg + 1)?;
        Ok(ll::decode16(low, high))
    }

    fn write_u16(&mut self, low_reg: u8, value: u16) -> Result<(), Error<E>> {
        let (low, high) = ll::encode16(value);
        self.write_reg(low_reg, low)?;
        self.write_reg(low_reg + 1, high)
    }

    fn control_field(&mut self, shift: u8) -> Result<u8, Error<E>> {
        let current = self.read_reg(register::CONTROL)?;
        Ok(ll::unpack_field(current, shift))
    }

    // Fresh read on every update: the register may have changed since the
    // last access, and the other three fields must survive the write.
    fn update_control_field(&mut self, shift: u8, code: u8) -> Result<(), Error<E>> {
        let current = self.read_reg(register::CONTROL)?;
        self.write_reg(register::CONTROL, ll::pack_field(current, code, shift))
    }
}

#[cfg(feature = "async")]
impl<I2C, E> Apds9930<I2C>
where
    I2C: AsyncI2c<Error = E>,
{
    /// Create a new APDS-9930 driver instance at the default address (async version)
    pub fn new_async(i2c: I2C) -> Self {
        Self::new_async_with_address(i2c, I2C_ADDRESS)
    }

    /// Create a new APDS-9930 driver instance at a custom address (async version)
    pub fn new_async_with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Initialize the sensor with default settings (async version)
    pub async fn init_async(&mut self) -> Result<(), Error<E>> {
        let id = self.id_async().await?;
        if !ll::DEVICE_IDS.contains(&id) {
            return Err(Error::InvalidDeviceId { found: id });
        }

        // All features off while the defaults are programmed
        self.set_mode_async(Mode::All, false).await?;

        self.write_reg_async(register::ATIME, ll::DEFAULT_ATIME).await?;
        self.write_reg_async(register::WTIME, ll::DEFAULT_WTIME).await?;
        self.write_reg_async(register::PPULSE, ll::DEFAULT_PPULSE).await?;
        self.write_reg_async(register::POFFSET, ll::DEFAULT_POFFSET).await?;
        self.write_reg_async(register::CONFIG, ll::DEFAULT_CONFIG).await?;

        self.set_led_drive_async(LedDrive::default()).await?;
        self.set_proximity_gain_async(ProximityGain::default()).await?;
        self.set_ambient_light_gain_async(AlsGain::default()).await?;
        self.set_proximity_diode_async(ProximityDiode::default()).await?;

        self.set_proximity_int_low_threshold_async(ll::DEFAULT_PILT)
            .await?;
        self.set_proximity_int_high_threshold_async(ll::DEFAULT_PIHT)
            .await?;
        self.set_light_int_low_threshold_async(ll::DEFAULT_AILT)
            .await?;
        self.set_light_int_high_threshold_async(ll::DEFAULT_AIHT)
            .await?;

        self.write_reg_async(register::PERS, ll::DEFAULT_PERS).await
    }

    /// Read the device ID register (async version)
    pub async fn id_async(&mut self) -> Result<u8, Error<E>> {
        self.read_reg_async(register::ID).await
    }

    /// Read the raw ENABLE register (async version)
    pub async fn mode_async(&mut self) -> Result<u8, Error<E>> {
        self.read_reg_async(register::ENABLE).await
    }

    /// Check whether a feature bit of the ENABLE register is set (async version)
    pub async fn get_mode_async(&mut self, mode: Mode) -> Result<bool, Error<E>> {
        let current = self.read_reg_async(register::ENABLE).await?;
        Ok(match mode {
            Mode::All => current & ll::ENABLE_ALL == ll::ENABLE_ALL,
            _ => ll::get_bit(current, mode as u8),
        })
    }

    /// Enable or disable a feature bit of the ENABLE register (async version)
    pub async fn set_mode_async(&mut self, mode: Mode, enable: bool) -> Result<(), Error<E>> {
        let current = self.read_reg_async(register::ENABLE).await?;
        let value = match mode {
            Mode::All => {
                if enable {
                    ll::ENABLE_ALL
                } else {
                    0x00
                }
            }
            _ => ll::set_bit(current, mode as u8, enable),
        };
        self.write_reg_async(register::ENABLE, value).await
    }

    /// Check whether the internal oscillator is powered on (async version)
    pub async fn power_async(&mut self) -> Result<bool, Error<E>> {
        self.get_mode_async(Mode::Power).await
    }

    /// Turn the internal oscillator on or off (async version)
    pub async fn set_power_async(&mut self, on: bool) -> Result<(), Error<E>> {
        self.set_mode_async(Mode::Power, on).await
    }

    /// Configure and turn on the ambient light sensor (async version)
    pub async fn enable_ambient_light_sensor_async(
        &mut self,
        interrupt: bool,
    ) -> Result<(), Error<E>> {
        self.set_ambient_light_gain_async(AlsGain::default()).await?;
        self.set_mode_async(Mode::AmbientLightInt, interrupt).await?;
        self.set_mode_async(Mode::Power, true).await?;
        self.set_mode_async(Mode::AmbientLight, true).await
    }

    /// Configure and turn on the proximity sensor (async version)
    pub async fn enable_proximity_sensor_async(&mut self, interrupt: bool) -> Result<(), Error<E>> {
        self.set_proximity_gain_async(ProximityGain::default()).await?;
        self.set_led_drive_async(LedDrive::default()).await?;
        self.set_proximity_diode_async(ProximityDiode::default()).await?;
        self.set_mode_async(Mode::ProximityInt, interrupt).await?;
        self.set_mode_async(Mode::Power, true).await?;
        self.set_mode_async(Mode::Proximity, true).await
    }

    /// Read the raw 2-bit LED drive code (async version)
    pub async fn led_drive_async(&mut self) -> Result<u8, Error<E>> {
        self.control_field_async(ll::SHIFT_PDRIVE).await
    }

    /// Set the proximity LED drive strength (async version)
    pub async fn set_led_drive_async(&mut self, drive: LedDrive) -> Result<(), Error<E>> {
        self.update_control_field_async(ll::SHIFT_PDRIVE, drive as u8)
            .await
    }

    /// Read the raw 2-bit proximity gain code (async version)
    pub async fn proximity_gain_async(&mut self) -> Result<u8, Error<E>> {
        self.control_field_async(ll::SHIFT_PGAIN).await
    }

    /// Set the proximity receiver gain (async version)
    pub async fn set_proximity_gain_async(&mut self, gain: ProximityGain) -> Result<(), Error<E>> {
        self.update_control_field_async(ll::SHIFT_PGAIN, gain as u8)
            .await
    }

    /// Read the raw 2-bit ALS gain code (async version)
    pub async fn ambient_light_gain_async(&mut self) -> Result<u8, Error<E>> {
        self.control_field_async(ll::SHIFT_AGAIN).await
    }

    /// Set the ambient light receiver gain (async version)
    pub async fn set_ambient_light_gain_async(&mut self, gain: AlsGain) -> Result<(), Error<E>> {
        self.update_control_field_async(ll::SHIFT_AGAIN, gain as u8)
            .await
    }

    /// Read the raw 2-bit proximity diode code (async version)
    pub async fn proximity_diode_async(&mut self) -> Result<u8, Error<E>> {
        self.control_field_async(ll::SHIFT_PDIODE).await
    }

    /// Select the photodiode used for proximity detection (async version)
    pub async fn set_proximity_diode_async(
        &mut self,
        diode: ProximityDiode,
    ) -> Result<(), Error<E>> {
        self.update_control_field_async(ll::SHIFT_PDIODE, diode as u8)
            .await
    }

    /// Read the ambient light interrupt low threshold (async version)
    pub async fn light_int_low_threshold_async(&mut self) -> Result<u16, Error<E>> {
        self.read_u16_async(register::AILTL).await
    }

    /// Set the ambient light interrupt low threshold (async version)
    pub async fn set_light_int_low_threshold_async(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16_async(register::AILTL, value).await
    }

    /// Read the ambient light interrupt high threshold (async version)
    pub async fn light_int_high_threshold_async(&mut self) -> Result<u16, Error<E>> {
        self.read_u16_async(register::AIHTL).await
    }

    /// Set the ambient light interrupt high threshold (async version)
    pub async fn set_light_int_high_threshold_async(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16_async(register::AIHTL, value).await
    }

    /// Read the proximity interrupt low threshold (async version)
    pub async fn proximity_int_low_threshold_async(&mut self) -> Result<u16, Error<E>> {
        self.read_u16_async(register::PILTL).await
    }

    /// Set the proximity interrupt low threshold (async version)
    pub async fn set_proximity_int_low_threshold_async(
        &mut self,
        value: u16,
    ) -> Result<(), Error<E>> {
        self.write_u16_async(register::PILTL, value).await
    }

    /// Read the proximity interrupt high threshold (async version)
    pub async fn proximity_int_high_threshold_async(&mut self) -> Result<u16, Error<E>> {
        self.read_u16_async(register::PIHTL).await
    }

    /// Set the proximity interrupt high threshold (async version)
    pub async fn set_proximity_int_high_threshold_async(
        &mut self,
        value: u16,
    ) -> Result<(), Error<E>> {
        self.write_u16_async(register::PIHTL, value).await
    }

    /// Read the channel 0 (visible + IR) light data (async version)
    pub async fn ch0_light_async(&mut self) -> Result<u16, Error<E>> {
        self.read_u16_async(register::CH0DATAL).await
    }

    /// Read the channel 1 (IR only) light data (async version)
    pub async fn ch1_light_async(&mut self) -> Result<u16, Error<E>> {
        self.read_u16_async(register::CH1DATAL).await
    }

    /// Read the proximity data register (async version)
    pub async fn proximity_async(&mut self) -> Result<u16, Error<E>> {
        self.read_u16_async(register::PDATAL).await
    }

    /// Read both light channels and convert them to lux (async version)
    pub async fn ambient_light_async(&mut self) -> Result<f32, Error<E>> {
        let ch0 = self.ch0_light_async().await?;
        let ch1 = self.ch1_light_async().await?;
        let gain = self.ambient_light_gain_async().await?;
        Ok(lux_from_channels(ch0, ch1, gain))
    }

    /// Check whether the device is asserting an ambient light interrupt (async version)
    pub async fn ambient_light_interrupt_async(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_reg_async(register::STATUS).await?;
        Ok(ll::get_bit(status, ll::STATUS_AINT_BIT))
    }

    /// Clear the ambient light interrupt flag (async version)
    ///
    /// `asserted = true` is a bus no-op, as in the sync version.
    pub async fn set_ambient_light_interrupt_async(
        &mut self,
        asserted: bool,
    ) -> Result<(), Error<E>> {
        if !asserted {
            self.write_command_async(ll::CLEAR_ALS_INT).await?;
        }
        Ok(())
    }

    /// Check whether the device is asserting a proximity interrupt (async version)
    pub async fn proximity_interrupt_async(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_reg_async(register::STATUS).await?;
        Ok(ll::get_bit(status, ll::STATUS_PINT_BIT))
    }

    /// Clear the proximity interrupt flag (async version)
    ///
    /// `asserted = true` is a bus no-op, as in the sync version.
    pub async fn set_proximity_interrupt_async(&mut self, asserted: bool) -> Result<(), Error<E>> {
        if !asserted {
            self.write_command_async(ll::CLEAR_PROX_INT).await?;
        }
        Ok(())
    }

    /// Clear both interrupt flags with a single command (async version)
    pub async fn clear_all_interrupts_async(&mut self) -> Result<(), Error<E>> {
        self.write_command_async(ll::CLEAR_ALL_INTS).await
    }

    /// Read every register for debugging (async version)
    pub async fn dump_registers_async(&mut self) -> Result<[(u8, u8); DUMP_LEN], Error<E>> {
        let mut block = [0u8; DUMP_LEN - 1];
        self.read_block_async(register::ENABLE, &mut block).await?;

        let mut out = [(0u8, 0u8); DUMP_LEN];
        for (addr, value) in block.iter().enumerate() {
            out[addr] = (addr as u8, *value);
        }
        out[DUMP_LEN - 1] = (
            register::POFFSET,
            self.read_reg_async(register::POFFSET).await?,
        );
        Ok(out)
    }

    /// Read a single register with an explicit command mode (async version)
    pub async fn read_register_async(
        &mut self,
        reg: u8,
        mode: CommandMode,
    ) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg | mode as u8], &mut buffer)
            .await
            .map_err(Error::I2c)?;
        Ok(buffer[0])
    }

    /// Write a single register with an explicit command mode (async version)
    pub async fn write_register_async(
        &mut self,
        reg: u8,
        value: u8,
        mode: CommandMode,
    ) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[reg | mode as u8, value])
            .await
            .map_err(Error::I2c)
    }

    /// Write a bare command byte with no register address (async version)
    pub async fn write_command_async(&mut self, command: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[command])
            .await
            .map_err(Error::I2c)
    }

    /// Read consecutive registers starting at `reg` (async version)
    pub async fn read_block_async(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(
                self.address,
                &[reg | CommandMode::AutoIncrement as u8],
                buffer,
            )
            .await
            .map_err(Error::I2c)
    }

    /// Write consecutive registers starting at `reg` (async version)
    ///
    /// `data` must be at most 32 bytes, the SMBus block transfer limit.
    pub async fn write_block_async(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<E>> {
        // SMBus block transfers top out at 32 data bytes + 1 command byte
        let mut buf = [0u8; 33];
        buf[0] = reg | CommandMode::AutoIncrement as u8;
        let len = data.len();
        buf[1..1 + len].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..1 + len])
            .await
            .map_err(Error::I2c)
    }

    // Helper methods for async register access

    async fn read_reg_async(&mut self, reg: u8) -> Result<u8, Error<E>> {
        self.read_register_async(reg, CommandMode::AutoIncrement).await
    }

    async fn write_reg_async(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
        self.write_register_async(reg, value, CommandMode::AutoIncrement)
            .await
    }

    async fn read_u16_async(&mut self, low_reg: u8) -> Result<u16, Error<E>> {
        let low = self.read_reg_async(low_reg).await?;
        let high = self.read_reg_async(low_reg + 1).await?;
        Ok(ll::decode16(low, high))
    }

    async fn write_u16_async(&mut self, low_reg: u8, value: u16) -> Result<(), Error<E>> {
        let (low, high) = ll::encode16(value);
        self.write_reg_async(low_reg, low).await?;
        self.write_reg_async(low_reg + 1, high).await
    }

    async fn control_field_async(&mut self, shift: u8) -> Result<u8, Error<E>> {
        let current = self.read_reg_async(register::CONTROL).await?;
        Ok(ll::unpack_field(current, shift))
    }

    async fn update_control_field_async(&mut self, shift: u8, code: u8) -> Result<(), Error<E>> {
        let current = self.read_reg_async(register::CONTROL).await?;
        self.write_reg_async(register::CONTROL, ll::pack_field(current, code, shift))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    extern crate std;
    use std::vec;
    use std::vec::Vec;

    const ADDR: u8 = I2C_ADDRESS;

    // Register addresses as they appear on the wire (AUTO_INCREMENT mode)
    const ENABLE: u8 = 0xA0;
    const ATIME: u8 = 0xA1;
    const WTIME: u8 = 0xA3;
    const AILTL: u8 = 0xA4;
    const AILTH: u8 = 0xA5;
    const AIHTL: u8 = 0xA6;
    const AIHTH: u8 = 0xA7;
    const PILTL: u8 = 0xA8;
    const PILTH: u8 = 0xA9;
    const PIHTL: u8 = 0xAA;
    const PIHTH: u8 = 0xAB;
    const PERS: u8 = 0xAC;
    const CONFIG: u8 = 0xAD;
    const PPULSE: u8 = 0xAE;
    const CONTROL: u8 = 0xAF;
    const ID: u8 = 0xB2;
    const STATUS: u8 = 0xB3;
    const CH0DATAL: u8 = 0xB4;
    const CH0DATAH: u8 = 0xB5;
    const CH1DATAL: u8 = 0xB6;
    const CH1DATAH: u8 = 0xB7;
    const PDATAL: u8 = 0xB8;
    const PDATAH: u8 = 0xB9;
    const POFFSET: u8 = 0xBE;

    fn read(reg: u8, value: u8) -> I2cTransaction {
        I2cTransaction::write_read(ADDR, vec![reg], vec![value])
    }

    fn write(reg: u8, value: u8) -> I2cTransaction {
        I2cTransaction::write(ADDR, vec![reg, value])
    }

    #[test]
    fn device_creation() {
        let i2c = I2cMock::new(&[]);
        let sensor = Apds9930::new(i2c);
        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn init_issues_documented_sequence() {
        let expectations: Vec<I2cTransaction> = vec![
            // ID check
            read(ID, 0x39),
            // All features off (read-modify-write shape, whole byte replaced)
            read(ENABLE, 0x00),
            write(ENABLE, 0x00),
            // Timing and configuration defaults
            write(ATIME, 0xFF),
            write(WTIME, 0xFF),
            write(PPULSE, 0x08),
            write(POFFSET, 0x00),
            write(CONFIG, 0x00),
            // CONTROL fields: LED drive 100 mA, prox gain 8x, ALS gain 16x,
            // diode 2; each one is a fresh read-modify-write
            read(CONTROL, 0x00),
            write(CONTROL, 0x00),
            read(CONTROL, 0x00),
            write(CONTROL, 0x0C),
            read(CONTROL, 0x0C),
            write(CONTROL, 0x0E),
            read(CONTROL, 0x0E),
            write(CONTROL, 0x2E),
            // Proximity thresholds 0 / 50
            write(PILTL, 0x00),
            write(PILTH, 0x00),
            write(PIHTL, 0x32),
            write(PIHTH, 0x00),
            // ALS thresholds inverted to force a first interrupt
            write(AILTL, 0xFF),
            write(AILTH, 0xFF),
            write(AIHTL, 0x00),
            write(AIHTH, 0x00),
            // Persistence: 2 consecutive samples for ALS and proximity
            write(PERS, 0x22),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.init().unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn init_rejects_unknown_device_id() {
        // Only the ID read happens; no write follows
        let expectations = [read(ID, 0x00)];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        let result = sensor.init();
        assert!(matches!(result, Err(Error::InvalidDeviceId { found: 0x00 })));

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn set_mode_all_replaces_whole_register() {
        let expectations = [
            read(ENABLE, 0x15),
            write(ENABLE, 0x7F),
            read(ENABLE, 0x6A),
            write(ENABLE, 0x00),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.set_mode(Mode::All, true).unwrap();
        sensor.set_mode(Mode::All, false).unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn set_mode_preserves_other_bits() {
        let expectations = [
            read(ENABLE, 0x03),
            write(ENABLE, 0x23),
            read(ENABLE, 0x23),
            write(ENABLE, 0x21),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.set_mode(Mode::ProximityInt, true).unwrap();
        sensor.set_mode(Mode::AmbientLight, false).unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn proximity_high_threshold_end_to_end() {
        let expectations = [
            write(PIHTL, 0x32),
            write(PIHTH, 0x00),
            read(PIHTL, 0x32),
            read(PIHTH, 0x00),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.set_proximity_int_high_threshold(50).unwrap();
        assert_eq!(sensor.proximity_int_high_threshold().unwrap(), 50);

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn light_threshold_wide_value() {
        let expectations = [
            write(AIHTL, 0xCD),
            write(AIHTH, 0xAB),
            read(AIHTL, 0xCD),
            read(AIHTH, 0xAB),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.set_light_int_high_threshold(0xABCD).unwrap();
        assert_eq!(sensor.light_int_high_threshold().unwrap(), 0xABCD);

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn enable_ambient_light_sensor_sequence() {
        let expectations = [
            // ALS gain to default (16x), diode bits already programmed
            read(CONTROL, 0x2C),
            write(CONTROL, 0x2E),
            // Interrupt enable, then power, then ALS enable
            read(ENABLE, 0x00),
            write(ENABLE, 0x10),
            read(ENABLE, 0x10),
            write(ENABLE, 0x11),
            read(ENABLE, 0x11),
            write(ENABLE, 0x13),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.enable_ambient_light_sensor(true).unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn enable_proximity_sensor_sequence() {
        let expectations = [
            // Prox gain 8x, LED drive 100 mA, diode 2
            read(CONTROL, 0x00),
            write(CONTROL, 0x0C),
            read(CONTROL, 0x0C),
            write(CONTROL, 0x0C),
            read(CONTROL, 0x0C),
            write(CONTROL, 0x2C),
            // Interrupt bit stays clear, then power and prox enable
            read(ENABLE, 0x00),
            write(ENABLE, 0x00),
            read(ENABLE, 0x00),
            write(ENABLE, 0x01),
            read(ENABLE, 0x01),
            write(ENABLE, 0x05),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.enable_proximity_sensor(false).unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn proximity_data_combines_bytes() {
        let expectations = [read(PDATAL, 0x23), read(PDATAH, 0x01)];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        assert_eq!(sensor.proximity().unwrap(), 0x0123);

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn ambient_light_reads_channels_and_gain() {
        let expectations = [
            read(CH0DATAL, 100),
            read(CH0DATAH, 0),
            read(CH1DATAL, 20),
            read(CH1DATAH, 0),
            read(CONTROL, 0x02), // AGAIN code 2
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        let lux = sensor.ambient_light().unwrap();
        assert!((lux - 292.88).abs() < 0.01);

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn lux_formula_exactness() {
        // ALSIT = 2.73, iac = max(62.76, 48.78), lpc = 0.49 * 52 / 5.46
        let lux = lux_from_channels(100, 20, 2);
        assert!((lux - 292.88).abs() < 0.01);
    }

    #[test]
    fn lux_can_be_negative() {
        // IR-dominated readings drive iac below zero; no clamping
        assert!(lux_from_channels(0, 100, 2) < 0.0);
    }

    #[test]
    fn interrupt_flags_from_status_bits() {
        let expectations = [
            read(STATUS, 0x10),
            read(STATUS, 0x10),
            read(STATUS, 0x30),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        assert!(sensor.ambient_light_interrupt().unwrap());
        assert!(!sensor.proximity_interrupt().unwrap());
        assert!(sensor.proximity_interrupt().unwrap());

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn interrupt_clear_asymmetry() {
        let expectations = [
            // Clearing issues the bare command byte; "setting" is a no-op
            I2cTransaction::write(ADDR, vec![0xE6]),
            I2cTransaction::write(ADDR, vec![0xE5]),
            I2cTransaction::write(ADDR, vec![0xE7]),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        sensor.set_ambient_light_interrupt(true).unwrap();
        sensor.set_proximity_interrupt(true).unwrap();
        sensor.set_ambient_light_interrupt(false).unwrap();
        sensor.set_proximity_interrupt(false).unwrap();
        sensor.clear_all_interrupts().unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn dump_covers_full_register_window() {
        let mut block = Vec::new();
        for addr in 0..26u8 {
            block.push(addr.wrapping_mul(3));
        }
        let expectations = [
            I2cTransaction::write_read(ADDR, vec![ENABLE], block.clone()),
            read(POFFSET, 0x12),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        let dump = sensor.dump_registers().unwrap();
        assert_eq!(dump.len(), DUMP_LEN);
        assert_eq!(dump[0], (0x00, 0x00));
        assert_eq!(dump[25], (0x19, 25u8.wrapping_mul(3)));
        assert_eq!(dump[26], (0x1E, 0x12));

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn custom_address_is_used_on_the_wire() {
        let expectations = [I2cTransaction::write_read(
            0x49,
            vec![ID],
            vec![0x39],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new_with_address(i2c, 0x49);

        assert_eq!(sensor.id().unwrap(), 0x39);

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn get_mode_reads_individual_bits() {
        let expectations = [
            read(ENABLE, 0b0100_0101),
            read(ENABLE, 0b0100_0101),
            read(ENABLE, 0x7F),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Apds9930::new(i2c);

        assert!(sensor.get_mode(Mode::Proximity).unwrap());
        assert!(!sensor.get_mode(Mode::AmbientLight).unwrap());
        assert!(sensor.get_mode(Mode::All).unwrap());

        let mut i2c = sensor.destroy();
        i2c.done();
    }
}
