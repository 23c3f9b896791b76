//! Opcode descriptors.
//!
//! An [`Opcode`] is the pair a trace line shows for an instruction: its text
//! mnemonic and its numeric code. Decoding from the binary encoding goes
//! through static perfect-hash tables, one per prefix space.

use phf::phf_map;
use std::fmt;

/// Prefix byte of the miscellaneous (saturating truncation, bulk memory,
/// table) opcode space.
pub const PREFIX_MISC: u8 = 0xfc;

/// Prefix byte of the SIMD opcode space.
pub const PREFIX_SIMD: u8 = 0xfd;

/// Prefix byte of the atomic (threads) opcode space.
pub const PREFIX_THREADS: u8 = 0xfe;

/// An instruction opcode: mnemonic plus numeric code.
///
/// `code` is the value within the opcode's prefix space, so `i32.add` is
/// `0x6a` and `memory.copy` is `10` with prefix `0xfc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    name: &'static str,
    prefix: Option<u8>,
    code: u32,
}

impl Opcode {
    /// Describe an unprefixed opcode.
    pub const fn new(name: &'static str, code: u32) -> Self {
        Self {
            name,
            prefix: None,
            code,
        }
    }

    /// Describe an opcode in a prefixed space.
    pub const fn prefixed(name: &'static str, prefix: u8, code: u32) -> Self {
        Self {
            name,
            prefix: Some(prefix),
            code,
        }
    }

    /// Look up an opcode from its binary encoding.
    ///
    /// Only the single-byte space and the `0xfc` space are tabled; SIMD and
    /// atomic opcodes are built by the reader with [`Opcode::prefixed`].
    pub fn decode(prefix: Option<u8>, code: u32) -> Option<Self> {
        match prefix {
            None => {
                let byte = u8::try_from(code).ok()?;
                SINGLE_BYTE
                    .get(&byte)
                    .map(|&name| Self::new(name, code))
            }
            Some(PREFIX_MISC) => MISC
                .get(&code)
                .map(|&name| Self::prefixed(name, PREFIX_MISC, code)),
            Some(_) => None,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub fn prefix(&self) -> Option<u8> {
        self.prefix
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.name, self.code)
    }
}

static SINGLE_BYTE: phf::Map<u8, &'static str> = phf_map! {
    0x00u8 => "unreachable",
    0x01u8 => "nop",
    0x02u8 => "block",
    0x03u8 => "loop",
    0x04u8 => "if",
    0x05u8 => "else",
    0x06u8 => "try",
    0x07u8 => "catch",
    0x08u8 => "throw",
    0x09u8 => "rethrow",
    0x0au8 => "br_on_exn",
    0x0bu8 => "end",
    0x0cu8 => "br",
    0x0du8 => "br_if",
    0x0eu8 => "br_table",
    0x0fu8 => "return",
    0x10u8 => "call",
    0x11u8 => "call_indirect",
    0x12u8 => "return_call",
    0x13u8 => "return_call_indirect",
    0x1au8 => "drop",
    0x1bu8 => "select",
    0x20u8 => "local.get",
    0x21u8 => "local.set",
    0x22u8 => "local.tee",
    0x23u8 => "global.get",
    0x24u8 => "global.set",
    0x25u8 => "table.get",
    0x26u8 => "table.set",
    0x28u8 => "i32.load",
    0x29u8 => "i64.load",
    0x2au8 => "f32.load",
    0x2bu8 => "f64.load",
    0x2cu8 => "i32.load8_s",
    0x2du8 => "i32.load8_u",
    0x2eu8 => "i32.load16_s",
    0x2fu8 => "i32.load16_u",
    0x30u8 => "i64.load8_s",
    0x31u8 => "i64.load8_u",
    0x32u8 => "i64.load16_s",
    0x33u8 => "i64.load16_u",
    0x34u8 => "i64.load32_s",
    0x35u8 => "i64.load32_u",
    0x36u8 => "i32.store",
    0x37u8 => "i64.store",
    0x38u8 => "f32.store",
    0x39u8 => "f64.store",
    0x3au8 => "i32.store8",
    0x3bu8 => "i32.store16",
    0x3cu8 => "i64.store8",
    0x3du8 => "i64.store16",
    0x3eu8 => "i64.store32",
    0x3fu8 => "memory.size",
    0x40u8 => "memory.grow",
    0x41u8 => "i32.const",
    0x42u8 => "i64.const",
    0x43u8 => "f32.const",
    0x44u8 => "f64.const",
    0x45u8 => "i32.eqz",
    0x46u8 => "i32.eq",
    0x47u8 => "i32.ne",
    0x48u8 => "i32.lt_s",
    0x49u8 => "i32.lt_u",
    0x4au8 => "i32.gt_s",
    0x4bu8 => "i32.gt_u",
    0x4cu8 => "i32.le_s",
    0x4du8 => "i32.le_u",
    0x4eu8 => "i32.ge_s",
    0x4fu8 => "i32.ge_u",
    0x50u8 => "i64.eqz",
    0x51u8 => "i64.eq",
    0x52u8 => "i64.ne",
    0x53u8 => "i64.lt_s",
    0x54u8 => "i64.lt_u",
    0x55u8 => "i64.gt_s",
    0x56u8 => "i64.gt_u",
    0x57u8 => "i64.le_s",
    0x58u8 => "i64.le_u",
    0x59u8 => "i64.ge_s",
    0x5au8 => "i64.ge_u",
    0x5bu8 => "f32.eq",
    0x5cu8 => "f32.ne",
    0x5du8 => "f32.lt",
    0x5eu8 => "f32.gt",
    0x5fu8 => "f32.le",
    0x60u8 => "f32.ge",
    0x61u8 => "f64.eq",
    0x62u8 => "f64.ne",
    0x63u8 => "f64.lt",
    0x64u8 => "f64.gt",
    0x65u8 => "f64.le",
    0x66u8 => "f64.ge",
    0x67u8 => "i32.clz",
    0x68u8 => "i32.ctz",
    0x69u8 => "i32.popcnt",
    0x6au8 => "i32.add",
    0x6bu8 => "i32.sub",
    0x6cu8 => "i32.mul",
    0x6du8 => "i32.div_s",
    0x6eu8 => "i32.div_u",
    0x6fu8 => "i32.rem_s",
    0x70u8 => "i32.rem_u",
    0x71u8 => "i32.and",
    0x72u8 => "i32.or",
    0x73u8 => "i32.xor",
    0x74u8 => "i32.shl",
    0x75u8 => "i32.shr_s",
    0x76u8 => "i32.shr_u",
    0x77u8 => "i32.rotl",
    0x78u8 => "i32.rotr",
    0x79u8 => "i64.clz",
    0x7au8 => "i64.ctz",
    0x7bu8 => "i64.popcnt",
    0x7cu8 => "i64.add",
    0x7du8 => "i64.sub",
    0x7eu8 => "i64.mul",
    0x7fu8 => "i64.div_s",
    0x80u8 => "i64.div_u",
    0x81u8 => "i64.rem_s",
    0x82u8 => "i64.rem_u",
    0x83u8 => "i64.and",
    0x84u8 => "i64.or",
    0x85u8 => "i64.xor",
    0x86u8 => "i64.shl",
    0x87u8 => "i64.shr_s",
    0x88u8 => "i64.shr_u",
    0x89u8 => "i64.rotl",
    0x8au8 => "i64.rotr",
    0x8bu8 => "f32.abs",
    0x8cu8 => "f32.neg",
    0x8du8 => "f32.ceil",
    0x8eu8 => "f32.floor",
    0x8fu8 => "f32.trunc",
    0x90u8 => "f32.nearest",
    0x91u8 => "f32.sqrt",
    0x92u8 => "f32.add",
    0x93u8 => "f32.sub",
    0x94u8 => "f32.mul",
    0x95u8 => "f32.div",
    0x96u8 => "f32.min",
    0x97u8 => "f32.max",
    0x98u8 => "f32.copysign",
    0x99u8 => "f64.abs",
    0x9au8 => "f64.neg",
    0x9bu8 => "f64.ceil",
    0x9cu8 => "f64.floor",
    0x9du8 => "f64.trunc",
    0x9eu8 => "f64.nearest",
    0x9fu8 => "f64.sqrt",
    0xa0u8 => "f64.add",
    0xa1u8 => "f64.sub",
    0xa2u8 => "f64.mul",
    0xa3u8 => "f64.div",
    0xa4u8 => "f64.min",
    0xa5u8 => "f64.max",
    0xa6u8 => "f64.copysign",
    0xa7u8 => "i32.wrap_i64",
    0xa8u8 => "i32.trunc_f32_s",
    0xa9u8 => "i32.trunc_f32_u",
    0xaau8 => "i32.trunc_f64_s",
    0xabu8 => "i32.trunc_f64_u",
    0xacu8 => "i64.extend_i32_s",
    0xadu8 => "i64.extend_i32_u",
    0xaeu8 => "i64.trunc_f32_s",
    0xafu8 => "i64.trunc_f32_u",
    0xb0u8 => "i64.trunc_f64_s",
    0xb1u8 => "i64.trunc_f64_u",
    0xb2u8 => "f32.convert_i32_s",
    0xb3u8 => "f32.convert_i32_u",
    0xb4u8 => "f32.convert_i64_s",
    0xb5u8 => "f32.convert_i64_u",
    0xb6u8 => "f32.demote_f64",
    0xb7u8 => "f64.convert_i32_s",
    0xb8u8 => "f64.convert_i32_u",
    0xb9u8 => "f64.convert_i64_s",
    0xbau8 => "f64.convert_i64_u",
    0xbbu8 => "f64.promote_f32",
    0xbcu8 => "i32.reinterpret_f32",
    0xbdu8 => "i64.reinterpret_f64",
    0xbeu8 => "f32.reinterpret_i32",
    0xbfu8 => "f64.reinterpret_i64",
    0xc0u8 => "i32.extend8_s",
    0xc1u8 => "i32.extend16_s",
    0xc2u8 => "i64.extend8_s",
    0xc3u8 => "i64.extend16_s",
    0xc4u8 => "i64.extend32_s",
    0xd0u8 => "ref.null",
    0xd1u8 => "ref.is_null",
    0xd2u8 => "ref.func",
};

static MISC: phf::Map<u32, &'static str> = phf_map! {
    0u32 => "i32.trunc_sat_f32_s",
    1u32 => "i32.trunc_sat_f32_u",
    2u32 => "i32.trunc_sat_f64_s",
    3u32 => "i32.trunc_sat_f64_u",
    4u32 => "i64.trunc_sat_f32_s",
    5u32 => "i64.trunc_sat_f32_u",
    6u32 => "i64.trunc_sat_f64_s",
    7u32 => "i64.trunc_sat_f64_u",
    8u32 => "memory.init",
    9u32 => "data.drop",
    10u32 => "memory.copy",
    11u32 => "memory.fill",
    12u32 => "table.init",
    13u32 => "elem.drop",
    14u32 => "table.copy",
    15u32 => "table.grow",
    16u32 => "table.size",
    17u32 => "table.fill",
};
