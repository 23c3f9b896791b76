//! Display adapters for event arguments.
//!
//! Each adapter renders one argument shape the way trace lines show it, so
//! the decorator can `write!` straight into its sink without building
//! intermediate strings.

use std::fmt::{self, Write as _};

use crate::types::{Index, Limits, Type, V128};

/// `[t0, t1, ...]`; block-signature style, so type indices render as
/// `funcidx[N]`.
#[derive(Debug, Clone, Copy)]
pub struct Types<'a>(pub &'a [Type]);

impl fmt::Display for Types<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, ty) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str("]")
    }
}

/// `[d0, d1, ...]` of branch depths.
#[derive(Debug, Clone, Copy)]
pub struct Depths<'a>(pub &'a [Index]);

impl fmt::Display for Depths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, depth) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{depth}")?;
        }
        f.write_str("]")
    }
}

/// `initial: I`, plus `, max: M` when a maximum is present. Sharedness is
/// not shown.
#[derive(Debug, Clone, Copy)]
pub struct DisplayLimits<'a>(pub &'a Limits);

impl fmt::Display for DisplayLimits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "initial: {}", self.0.initial)?;
        if let Some(max) = self.0.max {
            write!(f, ", max: {max}")?;
        }
        Ok(())
    }
}

/// Four lanes as `0x%08x`, space separated.
#[derive(Debug, Clone, Copy)]
pub struct Lanes(pub V128);

impl fmt::Display for Lanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.v;
        write!(f, "0x{a:08x} 0x{b:08x} 0x{c:08x} 0x{d:08x}")
    }
}

/// Shuffle immediates: only the first lane carries the `0x` prefix.
#[derive(Debug, Clone, Copy)]
pub struct ShuffleLanes(pub V128);

impl fmt::Display for ShuffleLanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.v;
        write!(f, "0x{a:08x} {b:08x} {c:08x} {d:08x}")
    }
}

/// Shortest "general" float rendering with six significant digits, the
/// `%g` conversion of C's printf.
///
/// Fixed notation when the decimal exponent is in `-4..6`, scientific
/// (`1e+06`) otherwise; trailing zeros are dropped in both.
#[derive(Debug, Clone, Copy)]
pub struct General(pub f64);

const PRECISION: i32 = 6;

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" });
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // Rounding to the target precision first decides the exponent, so
        // 999999.5 becomes 1e+06 like printf does.
        let mut sci = Digits::new();
        write!(sci, "{:.*e}", (PRECISION - 1) as usize, v)?;
        let Some((mantissa, exp)) = sci.as_str().split_once('e') else {
            return f.write_str(sci.as_str());
        };
        let Ok(exp) = exp.parse::<i32>() else {
            return f.write_str(sci.as_str());
        };

        if exp < -4 || exp >= PRECISION {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
        } else {
            let mut fixed = Digits::new();
            write!(fixed, "{:.*}", (PRECISION - 1 - exp) as usize, v)?;
            f.write_str(trim_zeros(fixed.as_str()))
        }
    }
}

/// Stack buffer for one rendered float.
///
/// Six significant digits need at most `-d.ddddde-308` or
/// `-0.000dddddd`; anything longer is a formatting error.
struct Digits {
    buf: [u8; 32],
    len: usize,
}

impl Digits {
    fn new() -> Self {
        Self { buf: [0; 32], len: 0 }
    }

    fn as_str(&self) -> &str {
        // Only whole `&str`s are ever copied in.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl fmt::Write for Digits {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dst = self.buf.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn trim_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
