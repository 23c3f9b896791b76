//! Tracing decorator.
//!
//! [`Logging`] sits between a reader and the delegate that does the real
//! work. For every event it writes one human-readable line to a [`Stream`]
//! (indented by nesting depth) and then forwards the exact same call to the
//! wrapped delegate, returning whatever the delegate returns.
//!
//! ```
//! use wasm_events::{Delegate, Logging, MemoryStream, NopDelegate};
//!
//! let mut out = MemoryStream::new();
//! let mut inner = NopDelegate;
//! let mut log = Logging::new(&mut out, &mut inner);
//! log.begin_module(1).unwrap();
//! log.begin_type_section(7).unwrap();
//! log.on_type_count(0).unwrap();
//! log.end_type_section().unwrap();
//! log.end_module().unwrap();
//! drop(log);
//!
//! assert_eq!(
//!     out.to_string_lossy(),
//!     "BeginModule(version: 1)\n  BeginTypeSection(7)\n    OnTypeCount(0)\n  EndTypeSection\nEndModule\n"
//! );
//! ```

use crate::delegate::Delegate;
use crate::error::ParseError;
use crate::event::{Category, EventKind};
use crate::format::{Depths, DisplayLimits, General, Lanes, ShuffleLanes, Types};
use crate::indent::Indentation;
use crate::opcode::Opcode;
use crate::stream::Stream;
use crate::types::{
    Address, BinarySection, ComdatType, ExternalKind, Index, Limits, Offset, ReaderState,
    RelocType, SymbolType, Type, V128,
};

/// Decorator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Spaces added per nesting level.
    pub indent_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

/// Logs every event to a stream, then forwards it unchanged.
///
/// The stream and the delegate are borrowed for the decorator's lifetime.
/// A failed delegate call does not stop the decorator; it keeps logging and
/// forwarding whatever the reader raises next.
pub struct Logging<'a, S: Stream + ?Sized, D: Delegate + ?Sized> {
    stream: &'a mut S,
    delegate: &'a mut D,
    indent: Indentation,
    state: Option<ReaderState>,
}

impl<'a, S: Stream + ?Sized, D: Delegate + ?Sized> Logging<'a, S, D> {
    pub fn new(stream: &'a mut S, delegate: &'a mut D) -> Self {
        Self::with_options(stream, delegate, Options::default())
    }

    pub fn with_options(stream: &'a mut S, delegate: &'a mut D, options: Options) -> Self {
        Self {
            stream,
            delegate,
            indent: Indentation::new(options.indent_width),
            state: None,
        }
    }

    /// Current indentation in spaces.
    #[inline]
    pub fn depth(&self) -> usize {
        self.indent.depth()
    }

    /// Last reader position published through `on_set_state`.
    #[inline]
    pub fn state(&self) -> Option<&ReaderState> {
        self.state.as_ref()
    }

    /// Write the line for `kind`, if it has one.
    ///
    /// `args` writes everything after the event name, without the newline.
    fn line(&mut self, kind: EventKind, args: impl FnOnce(&mut S)) {
        let category = kind.category();
        match category {
            Category::Silent => return,
            Category::End => self.indent.dedent(),
            Category::Begin | Category::Leaf => {}
        }

        self.indent.write_to(&mut *self.stream);
        self.stream.write_data(kind.name().as_bytes());
        args(&mut *self.stream);
        self.stream.write_data(b"\n");

        if category == Category::Begin {
            self.indent.indent();
        }
    }
}

// Forwarders for the recurring line shapes.

/// `Name(size)`, opening a level.
macro_rules! begin_sections {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self, size: Offset) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| write!(s, "({})", size));
            self.delegate.$method(size)
        }
    )*};
}

/// Bare `Name`. Covers End events and instructions without immediates.
macro_rules! bare {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |_| {});
            self.delegate.$method()
        }
    )*};
}

/// `Name(N)`.
macro_rules! index {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self, value: Index) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| write!(s, "({})", value));
            self.delegate.$method(value)
        }
    )*};
}

/// `Name(desc: N)`.
macro_rules! named_index {
    ($($method:ident => $kind:ident, $desc:literal);* $(;)?) => {$(
        fn $method(&mut self, value: Index) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| write!(s, concat!("(", $desc, ": {})"), value));
            self.delegate.$method(value)
        }
    )*};
}

/// `Name(desc0: A, desc1: B)`.
macro_rules! index_pair {
    ($($method:ident => $kind:ident, $desc0:literal, $desc1:literal);* $(;)?) => {$(
        fn $method(&mut self, value0: Index, value1: Index) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| {
                write!(s, concat!("(", $desc0, ": {}, ", $desc1, ": {})"), value0, value1)
            });
            self.delegate.$method(value0, value1)
        }
    )*};
}

/// `Name("mnemonic" (code))`.
macro_rules! opcode {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| write!(s, "({})", opcode));
            self.delegate.$method(opcode)
        }
    )*};
}

/// Memory access with alignment and static offset.
macro_rules! load_store {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| {
                write!(s, "(opcode: {}, align log2: {}, offset: {})", opcode, alignment_log2, offset)
            });
            self.delegate.$method(opcode, alignment_log2, offset)
        }
    )*};
}

/// `Name(sig: TY)` for structured control instructions.
macro_rules! block_sig {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self, sig_type: Type) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| write!(s, "(sig: {})", sig_type));
            self.delegate.$method(sig_type)
        }
    )*};
}

/// `Name(index:I, nametype:T, size:S)` for the name section's subsections.
macro_rules! name_subsection {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self, index: Index, name_type: u32, subsection_size: Offset) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| {
                write!(s, "(index:{}, nametype:{}, size:{})", index, name_type, subsection_size)
            });
            self.delegate.$method(index, name_type, subsection_size)
        }
    )*};
}

/// `Name(name: N flags: 0xF index: I)` for named linking symbols.
macro_rules! named_symbol {
    ($($method:ident => $kind:ident),* $(,)?) => {$(
        fn $method(&mut self, index: Index, flags: u32, name: &[u8], item_index: Index) -> Result<(), Self::Error> {
            self.line(EventKind::$kind, |s| {
                s.write_data(b"(name: ");
                s.write_data(name);
                write!(s, " flags: 0x{:x} index: {})", flags, item_index);
            });
            self.delegate.$method(index, flags, name, item_index)
        }
    )*};
}

impl<'a, S: Stream + ?Sized, D: Delegate + ?Sized> Delegate for Logging<'a, S, D> {
    type Error = D::Error;

    fn on_error(&mut self, error: &ParseError) -> bool {
        self.line(EventKind::OnError, |_| {});
        self.delegate.on_error(error)
    }

    fn on_set_state(&mut self, state: &ReaderState) {
        self.line(EventKind::OnSetState, |_| {});
        self.state = Some(*state);
        self.delegate.on_set_state(state)
    }

    // ========================================================================
    // Module
    // ========================================================================

    fn begin_module(&mut self, version: u32) -> Result<(), Self::Error> {
        self.line(EventKind::BeginModule, |s| write!(s, "(version: {version})"));
        self.delegate.begin_module(version)
    }

    bare! {
        end_module => EndModule,
    }

    fn begin_section(
        &mut self,
        section_index: Index,
        section_type: BinarySection,
        size: Offset,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::BeginSection, |_| {});
        self.delegate.begin_section(section_index, section_type, size)
    }

    fn begin_custom_section(&mut self, size: Offset, section_name: &[u8]) -> Result<(), Self::Error> {
        self.line(EventKind::BeginCustomSection, |s| {
            s.write_data(b"('");
            s.write_data(section_name);
            write!(s, "', size: {size})");
        });
        self.delegate.begin_custom_section(size, section_name)
    }

    bare! {
        end_custom_section => EndCustomSection,
    }

    // ========================================================================
    // Sections
    // ========================================================================

    begin_sections! {
        begin_type_section => BeginTypeSection,
        begin_import_section => BeginImportSection,
        begin_function_section => BeginFunctionSection,
        begin_table_section => BeginTableSection,
        begin_memory_section => BeginMemorySection,
        begin_global_section => BeginGlobalSection,
        begin_export_section => BeginExportSection,
        begin_start_section => BeginStartSection,
        begin_code_section => BeginCodeSection,
        begin_elem_section => BeginElemSection,
        begin_data_section => BeginDataSection,
        begin_data_count_section => BeginDataCountSection,
        begin_names_section => BeginNamesSection,
        begin_reloc_section => BeginRelocSection,
        begin_dylink_section => BeginDylinkSection,
        begin_linking_section => BeginLinkingSection,
        begin_event_section => BeginEventSection,
    }

    bare! {
        end_type_section => EndTypeSection,
        end_import_section => EndImportSection,
        end_function_section => EndFunctionSection,
        end_table_section => EndTableSection,
        end_memory_section => EndMemorySection,
        end_global_section => EndGlobalSection,
        end_export_section => EndExportSection,
        end_start_section => EndStartSection,
        end_code_section => EndCodeSection,
        end_elem_section => EndElemSection,
        end_data_section => EndDataSection,
        end_data_count_section => EndDataCountSection,
        end_names_section => EndNamesSection,
        end_reloc_section => EndRelocSection,
        end_dylink_section => EndDylinkSection,
        end_linking_section => EndLinkingSection,
        end_event_section => EndEventSection,
    }

    index! {
        on_type_count => OnTypeCount,
        on_import_count => OnImportCount,
        on_function_count => OnFunctionCount,
        on_table_count => OnTableCount,
        on_memory_count => OnMemoryCount,
        on_global_count => OnGlobalCount,
        on_export_count => OnExportCount,
        on_function_body_count => OnFunctionBodyCount,
        on_elem_segment_count => OnElemSegmentCount,
        on_data_segment_count => OnDataSegmentCount,
        on_data_count => OnDataCount,
        on_function_names_count => OnFunctionNamesCount,
        on_local_name_function_count => OnLocalNameFunctionCount,
        on_dylink_needed_count => OnDylinkNeededCount,
        on_symbol_count => OnSymbolCount,
        on_segment_info_count => OnSegmentInfoCount,
        on_init_function_count => OnInitFunctionCount,
        on_comdat_count => OnComdatCount,
        on_event_count => OnEventCount,
    }

    // ========================================================================
    // Type Section
    // ========================================================================

    fn on_type(&mut self, index: Index, param_types: &[Type], result_types: &[Type]) -> Result<(), Self::Error> {
        self.line(EventKind::OnType, |s| {
            write!(
                s,
                "(index: {}, params: {}, results: {})",
                index,
                Types(param_types),
                Types(result_types)
            )
        });
        self.delegate.on_type(index, param_types, result_types)
    }

    // ========================================================================
    // Import Section
    // ========================================================================

    fn on_import(&mut self, index: Index, module_name: &[u8], field_name: &[u8]) -> Result<(), Self::Error> {
        self.line(EventKind::OnImport, |s| {
            write!(s, "(index: {index}, module: \"");
            s.write_data(module_name);
            s.write_data(b"\", field: \"");
            s.write_data(field_name);
            s.write_data(b"\")");
        });
        self.delegate.on_import(index, module_name, field_name)
    }

    fn on_import_func(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        func_index: Index,
        sig_index: Index,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnImportFunc, |s| {
            write!(
                s,
                "(import_index: {import_index}, func_index: {func_index}, sig_index: {sig_index})"
            )
        });
        self.delegate
            .on_import_func(import_index, module_name, field_name, func_index, sig_index)
    }

    fn on_import_table(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        table_index: Index,
        elem_type: Type,
        elem_limits: &Limits,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnImportTable, |s| {
            write!(
                s,
                "(import_index: {}, table_index: {}, elem_type: {}, {})",
                import_index,
                table_index,
                elem_type.name(),
                DisplayLimits(elem_limits)
            )
        });
        self.delegate.on_import_table(
            import_index,
            module_name,
            field_name,
            table_index,
            elem_type,
            elem_limits,
        )
    }

    fn on_import_memory(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        memory_index: Index,
        page_limits: &Limits,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnImportMemory, |s| {
            write!(
                s,
                "(import_index: {}, memory_index: {}, {})",
                import_index,
                memory_index,
                DisplayLimits(page_limits)
            )
        });
        self.delegate
            .on_import_memory(import_index, module_name, field_name, memory_index, page_limits)
    }

    fn on_import_global(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        global_index: Index,
        ty: Type,
        mutable: bool,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnImportGlobal, |s| {
            write!(
                s,
                "(import_index: {}, global_index: {}, type: {}, mutable: {})",
                import_index,
                global_index,
                ty.name(),
                mutable
            )
        });
        self.delegate
            .on_import_global(import_index, module_name, field_name, global_index, ty, mutable)
    }

    fn on_import_event(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        event_index: Index,
        sig_index: Index,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnImportEvent, |s| {
            write!(
                s,
                "(import_index: {import_index}, event_index: {event_index}, sig_index: {sig_index})"
            )
        });
        self.delegate
            .on_import_event(import_index, module_name, field_name, event_index, sig_index)
    }

    // ========================================================================
    // Function, Table, Memory, Global Sections
    // ========================================================================

    index_pair! {
        on_function => OnFunction, "index", "sig_index";
    }

    fn on_table(&mut self, index: Index, elem_type: Type, elem_limits: &Limits) -> Result<(), Self::Error> {
        self.line(EventKind::OnTable, |s| {
            write!(
                s,
                "(index: {}, elem_type: {}, {})",
                index,
                elem_type.name(),
                DisplayLimits(elem_limits)
            )
        });
        self.delegate.on_table(index, elem_type, elem_limits)
    }

    fn on_memory(&mut self, index: Index, page_limits: &Limits) -> Result<(), Self::Error> {
        self.line(EventKind::OnMemory, |s| {
            write!(s, "(index: {}, {})", index, DisplayLimits(page_limits))
        });
        self.delegate.on_memory(index, page_limits)
    }

    fn begin_global(&mut self, index: Index, ty: Type, mutable: bool) -> Result<(), Self::Error> {
        self.line(EventKind::BeginGlobal, |s| {
            write!(s, "(index: {}, type: {}, mutable: {})", index, ty.name(), mutable)
        });
        self.delegate.begin_global(index, ty, mutable)
    }

    index! {
        begin_global_init_expr => BeginGlobalInitExpr,
        end_global_init_expr => EndGlobalInitExpr,
        end_global => EndGlobal,
    }

    // ========================================================================
    // Export, Start Sections
    // ========================================================================

    fn on_export(
        &mut self,
        index: Index,
        kind: ExternalKind,
        item_index: Index,
        name: &[u8],
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnExport, |s| {
            write!(s, "(index: {index}, kind: {kind}, item_index: {item_index}, name: \"");
            s.write_data(name);
            s.write_data(b"\")");
        });
        self.delegate.on_export(index, kind, item_index, name)
    }

    index! {
        on_start_function => OnStartFunction,
    }

    // ========================================================================
    // Code Section
    // ========================================================================

    fn begin_function_body(&mut self, index: Index, size: Offset) -> Result<(), Self::Error> {
        self.line(EventKind::BeginFunctionBody, |s| write!(s, "({index}, size:{size})"));
        self.delegate.begin_function_body(index, size)
    }

    index! {
        on_local_decl_count => OnLocalDeclCount,
        end_function_body => EndFunctionBody,
    }

    fn on_local_decl(&mut self, decl_index: Index, count: Index, ty: Type) -> Result<(), Self::Error> {
        self.line(EventKind::OnLocalDecl, |s| {
            write!(s, "(index: {}, count: {}, type: {})", decl_index, count, ty.name())
        });
        self.delegate.on_local_decl(decl_index, count, ty)
    }

    // The generic opcode hooks are not logged; the specific instruction
    // event that accompanies each one is.

    fn on_opcode(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcode, |_| {});
        self.delegate.on_opcode(opcode)
    }

    fn on_opcode_bare(&mut self) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeBare, |_| {});
        self.delegate.on_opcode_bare()
    }

    fn on_opcode_index(&mut self, value: Index) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeIndex, |_| {});
        self.delegate.on_opcode_index(value)
    }

    fn on_opcode_index_index(&mut self, value: Index, value2: Index) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeIndexIndex, |_| {});
        self.delegate.on_opcode_index_index(value, value2)
    }

    fn on_opcode_uint32(&mut self, value: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeUint32, |_| {});
        self.delegate.on_opcode_uint32(value)
    }

    fn on_opcode_uint32_uint32(&mut self, value: u32, value2: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeUint32Uint32, |_| {});
        self.delegate.on_opcode_uint32_uint32(value, value2)
    }

    fn on_opcode_uint64(&mut self, value: u64) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeUint64, |_| {});
        self.delegate.on_opcode_uint64(value)
    }

    fn on_opcode_f32(&mut self, value_bits: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeF32, |_| {});
        self.delegate.on_opcode_f32(value_bits)
    }

    fn on_opcode_f64(&mut self, value_bits: u64) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeF64, |_| {});
        self.delegate.on_opcode_f64(value_bits)
    }

    fn on_opcode_v128(&mut self, value_bits: V128) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeV128, |_| {});
        self.delegate.on_opcode_v128(value_bits)
    }

    fn on_opcode_block_sig(&mut self, sig_type: Type) -> Result<(), Self::Error> {
        self.line(EventKind::OnOpcodeBlockSig, |_| {});
        self.delegate.on_opcode_block_sig(sig_type)
    }

    fn on_end_func(&mut self) -> Result<(), Self::Error> {
        self.line(EventKind::OnEndFunc, |_| {});
        self.delegate.on_end_func()
    }

    load_store! {
        on_atomic_load_expr => OnAtomicLoadExpr,
        on_atomic_store_expr => OnAtomicStoreExpr,
        on_atomic_rmw_expr => OnAtomicRmwExpr,
        on_atomic_rmw_cmpxchg_expr => OnAtomicRmwCmpxchgExpr,
        on_atomic_wait_expr => OnAtomicWaitExpr,
        on_atomic_notify_expr => OnAtomicNotifyExpr,
        on_load_expr => OnLoadExpr,
        on_store_expr => OnStoreExpr,
    }

    opcode! {
        on_binary_expr => OnBinaryExpr,
        on_compare_expr => OnCompareExpr,
        on_convert_expr => OnConvertExpr,
        on_unary_expr => OnUnaryExpr,
        on_ternary_expr => OnTernaryExpr,
    }

    block_sig! {
        on_block_expr => OnBlockExpr,
        on_if_expr => OnIfExpr,
        on_loop_expr => OnLoopExpr,
        on_try_expr => OnTryExpr,
    }

    named_index! {
        on_br_expr => OnBrExpr, "depth";
        on_br_if_expr => OnBrIfExpr, "depth";
        on_call_expr => OnCallExpr, "func_index";
        on_return_call_expr => OnReturnCallExpr, "func_index";
        on_global_get_expr => OnGlobalGetExpr, "index";
        on_global_set_expr => OnGlobalSetExpr, "index";
        on_local_get_expr => OnLocalGetExpr, "index";
        on_local_set_expr => OnLocalSetExpr, "index";
        on_local_tee_expr => OnLocalTeeExpr, "index";
        on_throw_expr => OnThrowExpr, "event_index";
    }

    index_pair! {
        on_br_on_exn_expr => OnBrOnExnExpr, "depth", "event_index";
        on_call_indirect_expr => OnCallIndirectExpr, "sig_index", "table_index";
        on_return_call_indirect_expr => OnReturnCallIndirectExpr, "sig_index", "table_index";
    }

    fn on_br_table_expr(&mut self, target_depths: &[Index], default_target_depth: Index) -> Result<(), Self::Error> {
        self.line(EventKind::OnBrTableExpr, |s| {
            write!(
                s,
                "(num_targets: {}, depths: {}, default: {})",
                target_depths.len(),
                Depths(target_depths),
                default_target_depth
            )
        });
        self.delegate.on_br_table_expr(target_depths, default_target_depth)
    }

    index! {
        on_data_drop_expr => OnDataDropExpr,
        on_memory_init_expr => OnMemoryInitExpr,
        on_elem_drop_expr => OnElemDropExpr,
        on_table_init_expr => OnTableInitExpr,
        on_table_get_expr => OnTableGetExpr,
        on_table_set_expr => OnTableSetExpr,
        on_table_grow_expr => OnTableGrowExpr,
        on_table_size_expr => OnTableSizeExpr,
    }

    bare! {
        on_catch_expr => OnCatchExpr,
        on_drop_expr => OnDropExpr,
        on_else_expr => OnElseExpr,
        on_end_expr => OnEndExpr,
        on_memory_copy_expr => OnMemoryCopyExpr,
        on_memory_fill_expr => OnMemoryFillExpr,
        on_memory_grow_expr => OnMemoryGrowExpr,
        on_memory_size_expr => OnMemorySizeExpr,
        on_table_copy_expr => OnTableCopyExpr,
        on_ref_null_expr => OnRefNullExpr,
        on_ref_is_null_expr => OnRefIsNullExpr,
        on_nop_expr => OnNopExpr,
        on_rethrow_expr => OnRethrowExpr,
        on_return_expr => OnReturnExpr,
        on_select_expr => OnSelectExpr,
        on_unreachable_expr => OnUnreachableExpr,
    }

    fn on_f32_const_expr(&mut self, value_bits: u32) -> Result<(), Self::Error> {
        let value = f32::from_bits(value_bits);
        self.line(EventKind::OnF32ConstExpr, |s| {
            write!(s, "({} (0x{:x}))", General(value.into()), value_bits)
        });
        self.delegate.on_f32_const_expr(value_bits)
    }

    fn on_f64_const_expr(&mut self, value_bits: u64) -> Result<(), Self::Error> {
        let value = f64::from_bits(value_bits);
        self.line(EventKind::OnF64ConstExpr, |s| {
            write!(s, "({} (0x{:x}))", General(value), value_bits)
        });
        self.delegate.on_f64_const_expr(value_bits)
    }

    fn on_v128_const_expr(&mut self, value_bits: V128) -> Result<(), Self::Error> {
        self.line(EventKind::OnV128ConstExpr, |s| write!(s, "({})", Lanes(value_bits)));
        self.delegate.on_v128_const_expr(value_bits)
    }

    fn on_i32_const_expr(&mut self, value: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnI32ConstExpr, |s| write!(s, "({value} (0x{value:x}))"));
        self.delegate.on_i32_const_expr(value)
    }

    fn on_i64_const_expr(&mut self, value: u64) -> Result<(), Self::Error> {
        self.line(EventKind::OnI64ConstExpr, |s| write!(s, "({value} (0x{value:x}))"));
        self.delegate.on_i64_const_expr(value)
    }

    fn on_simd_lane_op_expr(&mut self, opcode: Opcode, value: u64) -> Result<(), Self::Error> {
        self.line(EventKind::OnSimdLaneOpExpr, |s| write!(s, " (lane: {value})"));
        self.delegate.on_simd_lane_op_expr(opcode, value)
    }

    fn on_simd_shuffle_op_expr(&mut self, opcode: Opcode, value: V128) -> Result<(), Self::Error> {
        self.line(EventKind::OnSimdShuffleOpExpr, |s| {
            write!(s, " (lane: {})", ShuffleLanes(value))
        });
        self.delegate.on_simd_shuffle_op_expr(opcode, value)
    }

    // ========================================================================
    // Elem Section
    // ========================================================================

    fn begin_elem_segment(
        &mut self,
        index: Index,
        table_index: Index,
        passive: bool,
        elem_type: Type,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::BeginElemSegment, |s| {
            write!(
                s,
                "(index: {}, table_index: {}, passive: {}, elem_type: {})",
                index,
                table_index,
                passive,
                elem_type.name()
            )
        });
        self.delegate.begin_elem_segment(index, table_index, passive, elem_type)
    }

    index! {
        begin_elem_segment_init_expr => BeginElemSegmentInitExpr,
        end_elem_segment_init_expr => EndElemSegmentInitExpr,
        on_elem_segment_elem_expr_ref_null => OnElemSegmentElemExprRefNull,
        end_elem_segment => EndElemSegment,
    }

    index_pair! {
        on_elem_segment_elem_expr_count => OnElemSegmentElemExprCount, "index", "count";
        on_elem_segment_elem_expr_ref_func => OnElemSegmentElemExprRefFunc, "index", "func_index";
    }

    // ========================================================================
    // Data Section
    // ========================================================================

    fn begin_data_segment(&mut self, index: Index, memory_index: Index, passive: bool) -> Result<(), Self::Error> {
        self.line(EventKind::BeginDataSegment, |s| {
            write!(s, "(index: {index}, memory_index: {memory_index}, passive: {passive})")
        });
        self.delegate.begin_data_segment(index, memory_index, passive)
    }

    index! {
        begin_data_segment_init_expr => BeginDataSegmentInitExpr,
        end_data_segment_init_expr => EndDataSegmentInitExpr,
        end_data_segment => EndDataSegment,
    }

    fn on_data_segment_data(&mut self, index: Index, data: &[u8]) -> Result<(), Self::Error> {
        self.line(EventKind::OnDataSegmentData, |s| {
            write!(s, "(index:{}, size:{})", index, data.len())
        });
        self.delegate.on_data_segment_data(index, data)
    }

    // ========================================================================
    // Names Section
    // ========================================================================

    name_subsection! {
        on_module_name_subsection => OnModuleNameSubsection,
        on_function_name_subsection => OnFunctionNameSubsection,
        on_local_name_subsection => OnLocalNameSubsection,
    }

    fn on_module_name(&mut self, name: &[u8]) -> Result<(), Self::Error> {
        self.line(EventKind::OnModuleName, |s| {
            s.write_data(b"(name: \"");
            s.write_data(name);
            s.write_data(b"\")");
        });
        self.delegate.on_module_name(name)
    }

    fn on_function_name(&mut self, function_index: Index, function_name: &[u8]) -> Result<(), Self::Error> {
        self.line(EventKind::OnFunctionName, |s| {
            write!(s, "(index: {function_index}, name: \"");
            s.write_data(function_name);
            s.write_data(b"\")");
        });
        self.delegate.on_function_name(function_index, function_name)
    }

    index_pair! {
        on_local_name_local_count => OnLocalNameLocalCount, "index", "count";
    }

    fn on_local_name(&mut self, function_index: Index, local_index: Index, local_name: &[u8]) -> Result<(), Self::Error> {
        self.line(EventKind::OnLocalName, |s| {
            write!(s, "(func_index: {function_index}, local_index: {local_index}, name: \"");
            s.write_data(local_name);
            s.write_data(b"\")");
        });
        self.delegate.on_local_name(function_index, local_index, local_name)
    }

    // ========================================================================
    // Reloc Section
    // ========================================================================

    index_pair! {
        on_reloc_count => OnRelocCount, "count", "section";
    }

    fn on_reloc(&mut self, ty: RelocType, offset: Offset, index: Index, addend: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnReloc, |s| {
            write!(
                s,
                "(type: {}, offset: {}, index: {}, addend: {})",
                ty.name(),
                offset,
                index,
                addend as i32
            )
        });
        self.delegate.on_reloc(ty, offset, index, addend)
    }

    // ========================================================================
    // Dylink Section
    // ========================================================================

    fn on_dylink_info(
        &mut self,
        mem_size: u32,
        mem_align: u32,
        table_size: u32,
        table_align: u32,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnDylinkInfo, |s| {
            write!(
                s,
                "(mem_size: {mem_size}, mem_align: {mem_align}, table_size: {table_size}, table_align: {table_align})"
            )
        });
        self.delegate
            .on_dylink_info(mem_size, mem_align, table_size, table_align)
    }

    fn on_dylink_needed(&mut self, so_name: &[u8]) -> Result<(), Self::Error> {
        self.line(EventKind::OnDylinkNeeded, |s| {
            s.write_data(b"(name: ");
            s.write_data(so_name);
            s.write_data(b")");
        });
        self.delegate.on_dylink_needed(so_name)
    }

    // ========================================================================
    // Linking Section
    // ========================================================================

    fn on_symbol(&mut self, symbol_index: Index, ty: SymbolType, flags: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnSymbol, |s| {
            write!(s, "(type: {} flags: 0x{:x})", ty.name(), flags)
        });
        self.delegate.on_symbol(symbol_index, ty, flags)
    }

    fn on_data_symbol(
        &mut self,
        index: Index,
        flags: u32,
        name: &[u8],
        segment: Index,
        offset: u32,
        size: u32,
    ) -> Result<(), Self::Error> {
        self.line(EventKind::OnDataSymbol, |s| {
            s.write_data(b"(name: ");
            s.write_data(name);
            write!(s, " flags: 0x{flags:x})");
        });
        self.delegate
            .on_data_symbol(index, flags, name, segment, offset, size)
    }

    named_symbol! {
        on_function_symbol => OnFunctionSymbol,
        on_global_symbol => OnGlobalSymbol,
        on_event_symbol => OnEventSymbol,
    }

    fn on_section_symbol(&mut self, index: Index, flags: u32, section_index: Index) -> Result<(), Self::Error> {
        self.line(EventKind::OnSectionSymbol, |s| {
            write!(s, "(flags: 0x{flags:x} index: {section_index})")
        });
        self.delegate.on_section_symbol(index, flags, section_index)
    }

    fn on_segment_info(&mut self, index: Index, name: &[u8], alignment: u32, flags: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnSegmentInfo, |s| {
            write!(s, "({} name: ", index as i32);
            s.write_data(name);
            write!(s, ", alignment: {}, flags: 0x{:x})", alignment as i32, flags);
        });
        self.delegate.on_segment_info(index, name, alignment, flags)
    }

    fn on_init_function(&mut self, priority: u32, func_index: Index) -> Result<(), Self::Error> {
        self.line(EventKind::OnInitFunction, |s| {
            write!(s, "({} priority: {})", func_index as i32, priority as i32)
        });
        self.delegate.on_init_function(priority, func_index)
    }

    fn on_comdat_begin(&mut self, name: &[u8], flags: u32, count: Index) -> Result<(), Self::Error> {
        self.line(EventKind::OnComdatBegin, |s| {
            s.write_data(b"(");
            s.write_data(name);
            write!(s, ", flags: {}, count: {})", flags as i32, count);
        });
        self.delegate.on_comdat_begin(name, flags, count)
    }

    fn on_comdat_entry(&mut self, kind: ComdatType, index: Index) -> Result<(), Self::Error> {
        self.line(EventKind::OnComdatEntry, |s| {
            write!(s, "(kind: {}, index: {})", kind.code(), index)
        });
        self.delegate.on_comdat_entry(kind, index)
    }

    // ========================================================================
    // Event Section
    // ========================================================================

    index_pair! {
        on_event_type => OnEventType, "index", "sig_index";
    }

    // ========================================================================
    // Init Expressions
    // ========================================================================

    fn on_init_expr_f32_const_expr(&mut self, index: Index, value_bits: u32) -> Result<(), Self::Error> {
        let value = f32::from_bits(value_bits);
        self.line(EventKind::OnInitExprF32ConstExpr, |s| {
            write!(
                s,
                "(index: {}, value: {} (0x{:x}))",
                index,
                General(value.into()),
                value_bits
            )
        });
        self.delegate.on_init_expr_f32_const_expr(index, value_bits)
    }

    fn on_init_expr_f64_const_expr(&mut self, index: Index, value_bits: u64) -> Result<(), Self::Error> {
        let value = f64::from_bits(value_bits);
        self.line(EventKind::OnInitExprF64ConstExpr, |s| {
            write!(s, "(index: {} value: {} (0x{:x}))", index, General(value), value_bits)
        });
        self.delegate.on_init_expr_f64_const_expr(index, value_bits)
    }

    fn on_init_expr_v128_const_expr(&mut self, index: Index, value_bits: V128) -> Result<(), Self::Error> {
        self.line(EventKind::OnInitExprV128ConstExpr, |s| {
            write!(s, "(index: {} value: ( {}))", index, Lanes(value_bits))
        });
        self.delegate.on_init_expr_v128_const_expr(index, value_bits)
    }

    index_pair! {
        on_init_expr_global_get_expr => OnInitExprGlobalGetExpr, "index", "global_index";
    }

    fn on_init_expr_i32_const_expr(&mut self, index: Index, value: u32) -> Result<(), Self::Error> {
        self.line(EventKind::OnInitExprI32ConstExpr, |s| {
            write!(s, "(index: {index}, value: {value})")
        });
        self.delegate.on_init_expr_i32_const_expr(index, value)
    }

    fn on_init_expr_i64_const_expr(&mut self, index: Index, value: u64) -> Result<(), Self::Error> {
        self.line(EventKind::OnInitExprI64ConstExpr, |s| {
            write!(s, "(index: {index}, value: {value})")
        });
        self.delegate.on_init_expr_i64_const_expr(index, value)
    }
}
