//! Low-level register and protocol definitions for the APDS-9930

/// Default I2C address of the APDS-9930
pub const I2C_ADDRESS: u8 = 0x39;

/// Device IDs accepted during initialization
pub const DEVICE_IDS: [u8; 1] = [0x39];

/// Command-register transaction modes
///
/// Every addressed register access ORs the register address with one of
/// these tags before it goes on the wire. `AutoIncrement` is the default
/// for all driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum CommandMode {
    /// Repeatedly access the same register address
    RepeatedByte = 0x80,
    /// Auto-increment the register address after each byte
    AutoIncrement = 0xA0,
    /// Special function access
    SpecialFunction = 0xE0,
}

/// Special-function command byte: clear the proximity interrupt
pub const CLEAR_PROX_INT: u8 = 0xE5;
/// Special-function command byte: clear the ALS interrupt
pub const CLEAR_ALS_INT: u8 = 0xE6;
/// Special-function command byte: clear both interrupts
pub const CLEAR_ALL_INTS: u8 = 0xE7;

/// Register address map
#[allow(missing_docs)]
pub mod register {
    pub const ENABLE: u8 = 0x00;
    pub const ATIME: u8 = 0x01;
    pub const WTIME: u8 = 0x03;
    pub const AILTL: u8 = 0x04;
    pub const AILTH: u8 = 0x05;
    pub const AIHTL: u8 = 0x06;
    pub const AIHTH: u8 = 0x07;
    pub const PILTL: u8 = 0x08;
    pub const PILTH: u8 = 0x09;
    pub const PIHTL: u8 = 0x0A;
    pub const PIHTH: u8 = 0x0B;
    pub const PERS: u8 = 0x0C;
    pub const CONFIG: u8 = 0x0D;
    pub const PPULSE: u8 = 0x0E;
    pub const CONTROL: u8 = 0x0F;
    pub const ID: u8 = 0x12;
    pub const STATUS: u8 = 0x13;
    pub const CH0DATAL: u8 = 0x14;
    pub const CH0DATAH: u8 = 0x15;
    pub const CH1DATAL: u8 = 0x16;
    pub const CH1DATAH: u8 = 0x17;
    pub const PDATAL: u8 = 0x18;
    pub const PDATAH: u8 = 0x19;
    pub const POFFSET: u8 = 0x1E;
}

/// ENABLE register value with every feature bit set (bit 7 is reserved)
pub const ENABLE_ALL: u8 = 0x7F;

/// STATUS register bit index of the ALS interrupt flag
pub const STATUS_AINT_BIT: u8 = 4;
/// STATUS register bit index of the proximity interrupt flag
pub const STATUS_PINT_BIT: u8 = 5;

/// CONTROL register shift of the ALS gain field
pub const SHIFT_AGAIN: u8 = 0;
/// CONTROL register shift of the proximity gain field
pub const SHIFT_PGAIN: u8 = 2;
/// CONTROL register shift of the proximity diode field
pub const SHIFT_PDIODE: u8 = 4;
/// CONTROL register shift of the LED drive field
pub const SHIFT_PDRIVE: u8 = 6;

/// Default ALS integration time (ATIME register, 2.73 ms per count from 256)
pub const DEFAULT_ATIME: u8 = 0xFF;
/// Default wait time (WTIME register)
pub const DEFAULT_WTIME: u8 = 0xFF;
/// Default proximity pulse count
pub const DEFAULT_PPULSE: u8 = 0x08;
/// Default proximity offset
pub const DEFAULT_POFFSET: u8 = 0x00;
/// Default CONFIG register value
pub const DEFAULT_CONFIG: u8 = 0x00;
/// Default proximity diode selection (channel 1 diode)
pub const DEFAULT_PDIODE: u8 = 2;
/// Default proximity interrupt low threshold
pub const DEFAULT_PILT: u16 = 0;
/// Default proximity interrupt high threshold
pub const DEFAULT_PIHT: u16 = 50;
/// Default ALS interrupt low threshold (inverted bounds force an interrupt
/// on the first reading, which calibration workflows rely on)
pub const DEFAULT_AILT: u16 = 0xFFFF;
/// Default ALS interrupt high threshold
pub const DEFAULT_AIHT: u16 = 0x0000;
/// Default interrupt persistence (2 consecutive out-of-threshold samples
/// for both ALS and proximity)
pub const DEFAULT_PERS: u8 = 0x22;

/// Device factor of the lux equation
pub const LUX_DF: f32 = 52.0;
/// Glass attenuation factor of the lux equation
pub const LUX_GA: f32 = 0.49;
/// Channel coefficient B of the lux equation
pub const LUX_B: f32 = 1.862;
/// Channel coefficient C of the lux equation
pub const LUX_C: f32 = 0.746;
/// Channel coefficient D of the lux equation
pub const LUX_D: f32 = 1.291;

/// Split a 16-bit value into its (low, high) register bytes
#[inline]
pub const fn encode16(value: u16) -> (u8, u8) {
    ((value & 0xFF) as u8, (value >> 8) as u8)
}

/// Combine (low, high) register bytes into a 16-bit value
#[inline]
pub const fn decode16(low: u8, high: u8) -> u16 {
    low as u16 | ((high as u16) << 8)
}

/// Replace the 2-bit field at `shift` in `current` with `value`
///
/// `value` is masked to two bits rather than rejected; passing a wider
/// value is a caller error but follows the permissive policy of the other
/// APDS-993x ports. The remaining six bits of `current` are preserved.
#[inline]
pub const fn pack_field(current: u8, value: u8, shift: u8) -> u8 {
    (current & !(0b11 << shift)) | ((value & 0b11) << shift)
}

/// Extract the 2-bit field at `shift` from `current`
#[inline]
pub const fn unpack_field(current: u8, shift: u8) -> u8 {
    (current >> shift) & 0b11
}

/// Set or clear a single bit of `current`
#[inline]
pub const fn set_bit(current: u8, bit: u8, enable: bool) -> u8 {
    if enable {
        current | (1 << bit)
    } else {
        current & !(1 << bit)
    }
}

/// Test a single bit of `current`
#[inline]
pub const fn get_bit(current: u8, bit: u8) -> bool {
    (current >> bit) & 1 != 0
}

/// Human-readable name of a register address, for dump output
pub fn register_name(addr: u8) -> &'static str {
    match addr {
        register::ENABLE => "ENABLE",
        register::ATIME => "ATIME",
        register::WTIME => "WTIME",
        register::AILTL => "AILTL",
        register::AILTH => "AILTH",
        register::AIHTL => "AIHTL",
        register::AIHTH => "AIHTH",
        register::PILTL => "PILTL",
        register::PILTH => "PILTH",
        register::PIHTL => "PIHTL",
        register::PIHTH => "PIHTH",
        register::PERS => "PERS",
        register::CONFIG => "CONFIG",
        register::PPULSE => "PPULSE",
        register::CONTROL => "CONTROL",
        register::ID => "ID",
        register::STATUS => "STATUS",
        register::CH0DATAL => "Ch0DATAL",
        register::CH0DATAH => "Ch0DATAH",
        register::CH1DATAL => "Ch1DATAL",
        register::CH1DATAH => "Ch1DATAH",
        register::PDATAL => "PDATAL",
        register::PDATAH => "PDATAH",
        register::POFFSET => "POFFSET",
        _ => "RESERVED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        for v in 0..=u16::MAX {
            let (low, high) = encode16(v);
            assert_eq!(decode16(low, high), v);
        }
    }

    #[test]
    fn encode_is_little_endian() {
        assert_eq!(encode16(50), (0x32, 0x00));
        assert_eq!(encode16(0xABCD), (0xCD, 0xAB));
        assert_eq!(decode16(0x23, 0x01), 0x0123);
    }

    #[test]
    fn pack_unpack_preserves_other_bits() {
        for &current in &[0x00u8, 0xFF, 0xA5, 0x5A, 0x3C] {
            for shift in [0u8, 2, 4, 6] {
                for value in 0..=3u8 {
                    let packed = pack_field(current, value, shift);
                    assert_eq!(unpack_field(packed, shift), value);
                    let others = !(0b11 << shift);
                    assert_eq!(packed & others, current & others);
                }
            }
        }
    }

    #[test]
    fn pack_field_masks_wide_values() {
        // Out-of-range field values are truncated, not rejected
        assert_eq!(pack_field(0x00, 0xFF, 2), 0b0000_1100);
        assert_eq!(unpack_field(pack_field(0xFF, 0x07, 6), 6), 0b11);
    }

    #[test]
    fn set_get_bit_round_trip() {
        for &current in &[0x00u8, 0x7F, 0xA5, 0x12] {
            for bit in 0..=6u8 {
                for enable in [true, false] {
                    let updated = set_bit(current, bit, enable);
                    assert_eq!(get_bit(updated, bit), enable);
                    let others = !(1u8 << bit);
                    assert_eq!(updated & others, current & others);
                }
            }
        }
    }

    #[test]
    fn register_names_resolve() {
        assert_eq!(register_name(register::ENABLE), "ENABLE");
        assert_eq!(register_name(register::CONTROL), "CONTROL");
        assert_eq!(register_name(register::POFFSET), "POFFSET");
        assert_eq!(register_name(0x02), "RESERVED");
        assert_eq!(register_name(0x10), "RESERVED");
    }
}
