//! GPRS timer decoding for the PSM timers reported in `+CEREG`
//!
//! The modem reports the negotiated timers as 8 character binary strings,
//! e.g. `"01000010"`. Bits 8..6 select the timer unit and bits 5..1 hold the
//! timer value, as laid out in the GPRS Timer 2 (3GPP TS 24.008 table
//! 10.5.163) and GPRS Timer 3 (table 10.5.163a) information elements.

use crate::error::Error;

/// Reported in place of a timer value when the unit says "deactivated".
pub const TIMER_DISABLED: i32 = -1;

/// Number of characters in an encoded timer field.
pub const TIMER_FIELD_LEN: usize = 8;

const UNIT_LEN: usize = 3;

/// T3324 (PSM active time) multipliers in seconds, GPRS Timer 2.
///
/// Unit values 3 to 6 are unassigned by the standard and are interpreted as
/// one minute.
const ACTIVE_TIME_UNITS: [u32; 8] = [2, 60, 600, 60, 60, 60, 60, 0];

/// T3412 extended (periodic TAU) multipliers in seconds, GPRS Timer 3.
const PERIODIC_TAU_UNITS: [u32; 8] = [600, 3600, 36000, 2, 30, 60, 1_152_000, 0];

/// Which GPRS timer information element a field is encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerKind {
    /// T3324, GPRS Timer 2
    ActiveTime,
    /// T3412 extended, GPRS Timer 3
    PeriodicTau,
}

impl TimerKind {
    /// Multiplier in seconds for a 3 bit unit index, `0` meaning deactivated.
    pub const fn multiplier(self, unit: u8) -> Option<u32> {
        let table = match self {
            Self::ActiveTime => &ACTIVE_TIME_UNITS,
            Self::PeriodicTau => &PERIODIC_TAU_UNITS,
        };
        if (unit as usize) < table.len() {
            Some(table[unit as usize])
        } else {
            None
        }
    }
}

/// Decode an 8 character GPRS timer field into seconds.
///
/// Returns [`TIMER_DISABLED`] when the unit maps to "deactivated". Any
/// character beyond the eighth is ignored.
pub fn decode_timer(kind: TimerKind, field: &str) -> Result<i32, Error> {
    let field = field.as_bytes();
    if field.len() < TIMER_FIELD_LEN {
        return Err(Error::InvalidEncoding);
    }

    let unit = parse_binary(&field[..UNIT_LEN])?;
    let value = parse_binary(&field[UNIT_LEN..TIMER_FIELD_LEN])?;

    let multiplier = kind
        .multiplier(unit as u8)
        .ok_or(Error::InvalidEncoding)?;

    if multiplier == 0 {
        return Ok(TIMER_DISABLED);
    }

    // 1_152_000 * 31 still fits comfortably in an i32
    Ok((multiplier * value) as i32)
}

fn parse_binary(digits: &[u8]) -> Result<u32, Error> {
    digits.iter().try_fold(0u32, |acc, digit| match digit {
        b'0' => Ok(acc << 1),
        b'1' => Ok((acc << 1) | 1),
        _ => Err(Error::InvalidEncoding),
    })
}
