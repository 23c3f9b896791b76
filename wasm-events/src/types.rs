//! Argument types carried by reader events.
//!
//! These mirror the shapes a WebAssembly binary reader hands to its
//! delegate: plain indices and offsets, value types that may be either a
//! primitive or a reference to a declared signature, resizable limits,
//! and the small enumerations used by the linking and relocation sections.

use std::fmt;

/// Index into one of the module's index spaces.
pub type Index = u32;

/// Byte offset or size within the binary being read.
pub type Offset = usize;

/// Memory address or static offset of a load/store.
pub type Address = u64;

// ============================================================================
// Value Types
// ============================================================================

/// A value type slot.
///
/// Either a primitive type, or an index into the type section (used by
/// multi-value block signatures).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    I32,
    I64,
    F32,
    F64,
    V128,
    Funcref,
    Anyref,
    Nullref,
    Exnref,
    Func,
    Void,
    /// Reference to a declared signature by index.
    Index(Index),
}

impl Type {
    /// Decode a signed LEB type code.
    ///
    /// Non-negative codes are type-index references.
    pub fn from_code(code: i32) -> Option<Type> {
        if code >= 0 {
            return Some(Type::Index(code as Index));
        }
        let ty = match code {
            -0x01 => Type::I32,
            -0x02 => Type::I64,
            -0x03 => Type::F32,
            -0x04 => Type::F64,
            -0x05 => Type::V128,
            -0x10 => Type::Funcref,
            -0x11 => Type::Anyref,
            -0x12 => Type::Nullref,
            -0x18 => Type::Exnref,
            -0x20 => Type::Func,
            -0x40 => Type::Void,
            _ => return None,
        };
        Some(ty)
    }

    /// The signed LEB code of this type.
    ///
    /// `None` for a type index above `i32::MAX`, which has no code that
    /// decodes back to it.
    pub fn code(self) -> Option<i32> {
        let code = match self {
            Type::I32 => -0x01,
            Type::I64 => -0x02,
            Type::F32 => -0x03,
            Type::F64 => -0x04,
            Type::V128 => -0x05,
            Type::Funcref => -0x10,
            Type::Anyref => -0x11,
            Type::Nullref => -0x12,
            Type::Exnref => -0x18,
            Type::Func => -0x20,
            Type::Void => -0x40,
            Type::Index(index) => return i32::try_from(index).ok(),
        };
        Some(code)
    }

    /// Name of a primitive type.
    ///
    /// Type-index references have no name of their own; see the `Display`
    /// impl for how they render.
    pub fn name(self) -> &'static str {
        match self {
            Type::I32 => "i32",
            Type::I64 => "i64",
            Type::F32 => "f32",
            Type::F64 => "f64",
            Type::V128 => "v128",
            Type::Funcref => "funcref",
            Type::Anyref => "anyref",
            Type::Nullref => "nullref",
            Type::Exnref => "exnref",
            Type::Func => "func",
            Type::Void => "void",
            Type::Index(_) => "<type index>",
        }
    }

    #[inline]
    pub fn is_index(self) -> bool {
        matches!(self, Type::Index(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Index(index) => write!(f, "funcidx[{}]", index),
            primitive => f.write_str(primitive.name()),
        }
    }
}

// ============================================================================
// Limits
// ============================================================================

/// Size bounds of a table or memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Limits {
    pub initial: u64,
    pub max: Option<u64>,
    pub is_shared: bool,
}

impl Limits {
    /// Limits with only an initial size.
    pub const fn new(initial: u64) -> Self {
        Self {
            initial,
            max: None,
            is_shared: false,
        }
    }

    /// Set the maximum size.
    pub const fn with_max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    /// Mark as shared memory (threads proposal).
    pub const fn shared(mut self) -> Self {
        self.is_shared = true;
        self
    }

    #[inline]
    pub fn has_max(&self) -> bool {
        self.max.is_some()
    }
}

// ============================================================================
// V128
// ============================================================================

/// A 128-bit SIMD constant as four 32-bit lanes, lane 0 least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct V128 {
    pub v: [u32; 4],
}

impl V128 {
    pub const fn new(v: [u32; 4]) -> Self {
        Self { v }
    }

    pub const fn from_u128(bits: u128) -> Self {
        Self {
            v: [
                bits as u32,
                (bits >> 32) as u32,
                (bits >> 64) as u32,
                (bits >> 96) as u32,
            ],
        }
    }

    pub const fn to_u128(self) -> u128 {
        (self.v[0] as u128)
            | ((self.v[1] as u128) << 32)
            | ((self.v[2] as u128) << 64)
            | ((self.v[3] as u128) << 96)
    }
}

// ============================================================================
// Small Enumerations
// ============================================================================

/// Kind of an imported or exported item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExternalKind {
    Func = 0,
    Table = 1,
    Memory = 2,
    Global = 3,
    Event = 4,
}

impl ExternalKind {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Func),
            1 => Some(Self::Table),
            2 => Some(Self::Memory),
            3 => Some(Self::Global),
            4 => Some(Self::Event),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Func => "func",
            Self::Table => "table",
            Self::Memory => "memory",
            Self::Global => "global",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for ExternalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Known section ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BinarySection {
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Elem = 9,
    Code = 10,
    Data = 11,
    DataCount = 12,
    Event = 13,
}

impl BinarySection {
    pub fn from_code(code: u8) -> Option<Self> {
        let section = match code {
            0 => Self::Custom,
            1 => Self::Type,
            2 => Self::Import,
            3 => Self::Function,
            4 => Self::Table,
            5 => Self::Memory,
            6 => Self::Global,
            7 => Self::Export,
            8 => Self::Start,
            9 => Self::Elem,
            10 => Self::Code,
            11 => Self::Data,
            12 => Self::DataCount,
            13 => Self::Event,
            _ => return None,
        };
        Some(section)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Type => "Type",
            Self::Import => "Import",
            Self::Function => "Function",
            Self::Table => "Table",
            Self::Memory => "Memory",
            Self::Global => "Global",
            Self::Export => "Export",
            Self::Start => "Start",
            Self::Elem => "Elem",
            Self::Code => "Code",
            Self::Data => "Data",
            Self::DataCount => "DataCount",
            Self::Event => "Event",
        }
    }
}

/// Relocation entry types of the `reloc.*` custom sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RelocType {
    FuncIndexLeb = 0,
    TableIndexSleb = 1,
    TableIndexI32 = 2,
    MemoryAddressLeb = 3,
    MemoryAddressSleb = 4,
    MemoryAddressI32 = 5,
    TypeIndexLeb = 6,
    GlobalIndexLeb = 7,
    FunctionOffsetI32 = 8,
    SectionOffsetI32 = 9,
    EventIndexLeb = 10,
    MemoryAddressRelSleb = 11,
    TableIndexRelSleb = 12,
}

impl RelocType {
    pub fn from_code(code: u8) -> Option<Self> {
        let ty = match code {
            0 => Self::FuncIndexLeb,
            1 => Self::TableIndexSleb,
            2 => Self::TableIndexI32,
            3 => Self::MemoryAddressLeb,
            4 => Self::MemoryAddressSleb,
            5 => Self::MemoryAddressI32,
            6 => Self::TypeIndexLeb,
            7 => Self::GlobalIndexLeb,
            8 => Self::FunctionOffsetI32,
            9 => Self::SectionOffsetI32,
            10 => Self::EventIndexLeb,
            11 => Self::MemoryAddressRelSleb,
            12 => Self::TableIndexRelSleb,
            _ => return None,
        };
        Some(ty)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FuncIndexLeb => "R_WASM_FUNCTION_INDEX_LEB",
            Self::TableIndexSleb => "R_WASM_TABLE_INDEX_SLEB",
            Self::TableIndexI32 => "R_WASM_TABLE_INDEX_I32",
            Self::MemoryAddressLeb => "R_WASM_MEMORY_ADDR_LEB",
            Self::MemoryAddressSleb => "R_WASM_MEMORY_ADDR_SLEB",
            Self::MemoryAddressI32 => "R_WASM_MEMORY_ADDR_I32",
            Self::TypeIndexLeb => "R_WASM_TYPE_INDEX_LEB",
            Self::GlobalIndexLeb => "R_WASM_GLOBAL_INDEX_LEB",
            Self::FunctionOffsetI32 => "R_WASM_FUNCTION_OFFSET_I32",
            Self::SectionOffsetI32 => "R_WASM_SECTION_OFFSET_I32",
            Self::EventIndexLeb => "R_WASM_EVENT_INDEX_LEB",
            Self::MemoryAddressRelSleb => "R_WASM_MEMORY_ADDR_REL_SLEB",
            Self::TableIndexRelSleb => "R_WASM_TABLE_INDEX_REL_SLEB",
        }
    }
}

/// Symbol kinds of the linking section's symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SymbolType {
    Function = 0,
    Data = 1,
    Global = 2,
    Section = 3,
    Event = 4,
}

impl SymbolType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Function),
            1 => Some(Self::Data),
            2 => Some(Self::Global),
            3 => Some(Self::Section),
            4 => Some(Self::Event),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Function => "func",
            Self::Data => "data",
            Self::Global => "global",
            Self::Section => "section",
            Self::Event => "event",
        }
    }
}

/// Entry kind of a COMDAT group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComdatType {
    Data = 0,
    Function = 1,
}

impl ComdatType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Data),
            1 => Some(Self::Function),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Position snapshot the reader publishes before raising events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReaderState {
    /// Current read offset.
    pub offset: Offset,
    /// Total size of the input.
    pub size: Offset,
}
