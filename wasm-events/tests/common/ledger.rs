//! A delegate covering the whole vocabulary, and a driver raising it.
//!
//! Every call is recorded as its kind plus the `Debug` rendering of its
//! arguments, so a dropped, reordered or altered argument shows up as a
//! differing record.

use wasm_events::{
    Address, BinarySection, ComdatType, Delegate, EventKind, ExternalKind, Index, Limits, Offset,
    Opcode, ParseError, ReaderState, RelocType, SymbolType, Type, V128,
};

/// One received call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub kind: EventKind,
    pub args: String,
}

/// Error of a [`Ledger`] that refuses every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refused(pub EventKind);

/// Records every event. When `refuse` is set, every `Result` is an `Err`
/// naming the event's kind, and `on_error` answers `true`.
#[derive(Debug, Default)]
pub struct Ledger {
    pub calls: Vec<Call>,
    pub refuse: bool,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    fn record(&mut self, kind: EventKind, args: String) -> Result<(), Refused> {
        self.calls.push(Call { kind, args });
        if self.refuse {
            Err(Refused(kind))
        } else {
            Ok(())
        }
    }
}

macro_rules! ledger_methods {
    ($($method:ident => $kind:ident($($arg:ident: $ty:ty),*);)*) => {
        impl Delegate for Ledger {
            type Error = Refused;

            fn on_error(&mut self, error: &ParseError) -> bool {
                self.calls.push(Call {
                    kind: EventKind::OnError,
                    args: format!("{:?}", error),
                });
                self.refuse
            }

            fn on_set_state(&mut self, state: &ReaderState) {
                self.calls.push(Call {
                    kind: EventKind::OnSetState,
                    args: format!("{:?}", state),
                });
            }

            $(
                fn $method(&mut self, $($arg: $ty),*) -> Result<(), Refused> {
                    self.record(EventKind::$kind, format!("{:?}", ($($arg,)*)))
                }
            )*
        }
    };
}

ledger_methods! {
    begin_module => BeginModule(version: u32);
    end_module => EndModule();
    begin_section => BeginSection(section_index: Index, section_type: BinarySection, size: Offset);
    begin_custom_section => BeginCustomSection(size: Offset, section_name: &[u8]);
    end_custom_section => EndCustomSection();
    begin_type_section => BeginTypeSection(size: Offset);
    on_type_count => OnTypeCount(count: Index);
    on_type => OnType(index: Index, param_types: &[Type], result_types: &[Type]);
    end_type_section => EndTypeSection();
    begin_import_section => BeginImportSection(size: Offset);
    on_import_count => OnImportCount(count: Index);
    on_import => OnImport(index: Index, module_name: &[u8], field_name: &[u8]);
    on_import_func => OnImportFunc(import_index: Index, module_name: &[u8], field_name: &[u8], func_index: Index, sig_index: Index);
    on_import_table => OnImportTable(import_index: Index, module_name: &[u8], field_name: &[u8], table_index: Index, elem_type: Type, elem_limits: &Limits);
    on_import_memory => OnImportMemory(import_index: Index, module_name: &[u8], field_name: &[u8], memory_index: Index, page_limits: &Limits);
    on_import_global => OnImportGlobal(import_index: Index, module_name: &[u8], field_name: &[u8], global_index: Index, ty: Type, mutable: bool);
    on_import_event => OnImportEvent(import_index: Index, module_name: &[u8], field_name: &[u8], event_index: Index, sig_index: Index);
    end_import_section => EndImportSection();
    begin_function_section => BeginFunctionSection(size: Offset);
    on_function_count => OnFunctionCount(count: Index);
    on_function => OnFunction(index: Index, sig_index: Index);
    end_function_section => EndFunctionSection();
    begin_table_section => BeginTableSection(size: Offset);
    on_table_count => OnTableCount(count: Index);
    on_table => OnTable(index: Index, elem_type: Type, elem_limits: &Limits);
    end_table_section => EndTableSection();
    begin_memory_section => BeginMemorySection(size: Offset);
    on_memory_count => OnMemoryCount(count: Index);
    on_memory => OnMemory(index: Index, page_limits: &Limits);
    end_memory_section => EndMemorySection();
    begin_global_section => BeginGlobalSection(size: Offset);
    on_global_count => OnGlobalCount(count: Index);
    begin_global => BeginGlobal(index: Index, ty: Type, mutable: bool);
    begin_global_init_expr => BeginGlobalInitExpr(index: Index);
    end_global_init_expr => EndGlobalInitExpr(index: Index);
    end_global => EndGlobal(index: Index);
    end_global_section => EndGlobalSection();
    begin_export_section => BeginExportSection(size: Offset);
    on_export_count => OnExportCount(count: Index);
    on_export => OnExport(index: Index, kind: ExternalKind, item_index: Index, name: &[u8]);
    end_export_section => EndExportSection();
    begin_start_section => BeginStartSection(size: Offset);
    on_start_function => OnStartFunction(func_index: Index);
    end_start_section => EndStartSection();
    begin_code_section => BeginCodeSection(size: Offset);
    on_function_body_count => OnFunctionBodyCount(count: Index);
    begin_function_body => BeginFunctionBody(index: Index, size: Offset);
    on_local_decl_count => OnLocalDeclCount(count: Index);
    on_local_decl => OnLocalDecl(decl_index: Index, count: Index, ty: Type);
    on_opcode => OnOpcode(opcode: Opcode);
    on_opcode_bare => OnOpcodeBare();
    on_opcode_index => OnOpcodeIndex(value: Index);
    on_opcode_index_index => OnOpcodeIndexIndex(value: Index, value2: Index);
    on_opcode_uint32 => OnOpcodeUint32(value: u32);
    on_opcode_uint32_uint32 => OnOpcodeUint32Uint32(value: u32, value2: u32);
    on_opcode_uint64 => OnOpcodeUint64(value: u64);
    on_opcode_f32 => OnOpcodeF32(value_bits: u32);
    on_opcode_f64 => OnOpcodeF64(value_bits: u64);
    on_opcode_v128 => OnOpcodeV128(value_bits: V128);
    on_opcode_block_sig => OnOpcodeBlockSig(sig_type: Type);
    on_atomic_load_expr => OnAtomicLoadExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_atomic_store_expr => OnAtomicStoreExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_atomic_rmw_expr => OnAtomicRmwExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_atomic_rmw_cmpxchg_expr => OnAtomicRmwCmpxchgExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_atomic_wait_expr => OnAtomicWaitExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_atomic_notify_expr => OnAtomicNotifyExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_binary_expr => OnBinaryExpr(opcode: Opcode);
    on_block_expr => OnBlockExpr(sig_type: Type);
    on_br_expr => OnBrExpr(depth: Index);
    on_br_if_expr => OnBrIfExpr(depth: Index);
    on_br_on_exn_expr => OnBrOnExnExpr(depth: Index, event_index: Index);
    on_br_table_expr => OnBrTableExpr(target_depths: &[Index], default_target_depth: Index);
    on_call_expr => OnCallExpr(func_index: Index);
    on_call_indirect_expr => OnCallIndirectExpr(sig_index: Index, table_index: Index);
    on_catch_expr => OnCatchExpr();
    on_compare_expr => OnCompareExpr(opcode: Opcode);
    on_convert_expr => OnConvertExpr(opcode: Opcode);
    on_drop_expr => OnDropExpr();
    on_else_expr => OnElseExpr();
    on_end_expr => OnEndExpr();
    on_f32_const_expr => OnF32ConstExpr(value_bits: u32);
    on_f64_const_expr => OnF64ConstExpr(value_bits: u64);
    on_v128_const_expr => OnV128ConstExpr(value_bits: V128);
    on_global_get_expr => OnGlobalGetExpr(global_index: Index);
    on_global_set_expr => OnGlobalSetExpr(global_index: Index);
    on_i32_const_expr => OnI32ConstExpr(value: u32);
    on_i64_const_expr => OnI64ConstExpr(value: u64);
    on_if_expr => OnIfExpr(sig_type: Type);
    on_load_expr => OnLoadExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_local_get_expr => OnLocalGetExpr(local_index: Index);
    on_local_set_expr => OnLocalSetExpr(local_index: Index);
    on_local_tee_expr => OnLocalTeeExpr(local_index: Index);
    on_loop_expr => OnLoopExpr(sig_type: Type);
    on_memory_copy_expr => OnMemoryCopyExpr();
    on_data_drop_expr => OnDataDropExpr(segment_index: Index);
    on_memory_fill_expr => OnMemoryFillExpr();
    on_memory_grow_expr => OnMemoryGrowExpr();
    on_memory_init_expr => OnMemoryInitExpr(segment_index: Index);
    on_memory_size_expr => OnMemorySizeExpr();
    on_table_copy_expr => OnTableCopyExpr();
    on_elem_drop_expr => OnElemDropExpr(segment_index: Index);
    on_table_init_expr => OnTableInitExpr(segment_index: Index);
    on_table_get_expr => OnTableGetExpr(table_index: Index);
    on_table_set_expr => OnTableSetExpr(table_index: Index);
    on_table_grow_expr => OnTableGrowExpr(table_index: Index);
    on_table_size_expr => OnTableSizeExpr(table_index: Index);
    on_ref_null_expr => OnRefNullExpr();
    on_ref_is_null_expr => OnRefIsNullExpr();
    on_nop_expr => OnNopExpr();
    on_rethrow_expr => OnRethrowExpr();
    on_return_call_expr => OnReturnCallExpr(func_index: Index);
    on_return_call_indirect_expr => OnReturnCallIndirectExpr(sig_index: Index, table_index: Index);
    on_return_expr => OnReturnExpr();
    on_select_expr => OnSelectExpr();
    on_store_expr => OnStoreExpr(opcode: Opcode, alignment_log2: u32, offset: Address);
    on_throw_expr => OnThrowExpr(event_index: Index);
    on_try_expr => OnTryExpr(sig_type: Type);
    on_unary_expr => OnUnaryExpr(opcode: Opcode);
    on_ternary_expr => OnTernaryExpr(opcode: Opcode);
    on_unreachable_expr => OnUnreachableExpr();
    on_simd_lane_op_expr => OnSimdLaneOpExpr(opcode: Opcode, value: u64);
    on_simd_shuffle_op_expr => OnSimdShuffleOpExpr(opcode: Opcode, value: V128);
    end_function_body => EndFunctionBody(index: Index);
    on_end_func => OnEndFunc();
    end_code_section => EndCodeSection();
    begin_elem_section => BeginElemSection(size: Offset);
    on_elem_segment_count => OnElemSegmentCount(count: Index);
    begin_elem_segment => BeginElemSegment(index: Index, table_index: Index, passive: bool, elem_type: Type);
    begin_elem_segment_init_expr => BeginElemSegmentInitExpr(index: Index);
    end_elem_segment_init_expr => EndElemSegmentInitExpr(index: Index);
    on_elem_segment_elem_expr_count => OnElemSegmentElemExprCount(index: Index, count: Index);
    on_elem_segment_elem_expr_ref_null => OnElemSegmentElemExprRefNull(segment_index: Index);
    on_elem_segment_elem_expr_ref_func => OnElemSegmentElemExprRefFunc(segment_index: Index, func_index: Index);
    end_elem_segment => EndElemSegment(index: Index);
    end_elem_section => EndElemSection();
    begin_data_section => BeginDataSection(size: Offset);
    on_data_segment_count => OnDataSegmentCount(count: Index);
    begin_data_segment => BeginDataSegment(index: Index, memory_index: Index, passive: bool);
    begin_data_segment_init_expr => BeginDataSegmentInitExpr(index: Index);
    end_data_segment_init_expr => EndDataSegmentInitExpr(index: Index);
    on_data_segment_data => OnDataSegmentData(index: Index, data: &[u8]);
    end_data_segment => EndDataSegment(index: Index);
    end_data_section => EndDataSection();
    begin_data_count_section => BeginDataCountSection(size: Offset);
    on_data_count => OnDataCount(count: Index);
    end_data_count_section => EndDataCountSection();
    begin_names_section => BeginNamesSection(size: Offset);
    on_module_name_subsection => OnModuleNameSubsection(index: Index, name_type: u32, subsection_size: Offset);
    on_module_name => OnModuleName(name: &[u8]);
    on_function_name_subsection => OnFunctionNameSubsection(index: Index, name_type: u32, subsection_size: Offset);
    on_function_names_count => OnFunctionNamesCount(num_functions: Index);
    on_function_name => OnFunctionName(function_index: Index, function_name: &[u8]);
    on_local_name_subsection => OnLocalNameSubsection(index: Index, name_type: u32, subsection_size: Offset);
    on_local_name_function_count => OnLocalNameFunctionCount(num_functions: Index);
    on_local_name_local_count => OnLocalNameLocalCount(function_index: Index, num_locals: Index);
    on_local_name => OnLocalName(function_index: Index, local_index: Index, local_name: &[u8]);
    end_names_section => EndNamesSection();
    begin_reloc_section => BeginRelocSection(size: Offset);
    on_reloc_count => OnRelocCount(count: Index, section_index: Index);
    on_reloc => OnReloc(ty: RelocType, offset: Offset, index: Index, addend: u32);
    end_reloc_section => EndRelocSection();
    begin_dylink_section => BeginDylinkSection(size: Offset);
    on_dylink_info => OnDylinkInfo(mem_size: u32, mem_align: u32, table_size: u32, table_align: u32);
    on_dylink_needed_count => OnDylinkNeededCount(count: Index);
    on_dylink_needed => OnDylinkNeeded(so_name: &[u8]);
    end_dylink_section => EndDylinkSection();
    begin_linking_section => BeginLinkingSection(size: Offset);
    on_symbol_count => OnSymbolCount(count: Index);
    on_symbol => OnSymbol(symbol_index: Index, ty: SymbolType, flags: u32);
    on_data_symbol => OnDataSymbol(index: Index, flags: u32, name: &[u8], segment: Index, offset: u32, size: u32);
    on_function_symbol => OnFunctionSymbol(index: Index, flags: u32, name: &[u8], func_index: Index);
    on_global_symbol => OnGlobalSymbol(index: Index, flags: u32, name: &[u8], global_index: Index);
    on_section_symbol => OnSectionSymbol(index: Index, flags: u32, section_index: Index);
    on_event_symbol => OnEventSymbol(index: Index, flags: u32, name: &[u8], event_index: Index);
    on_segment_info_count => OnSegmentInfoCount(count: Index);
    on_segment_info => OnSegmentInfo(index: Index, name: &[u8], alignment: u32, flags: u32);
    on_init_function_count => OnInitFunctionCount(count: Index);
    on_init_function => OnInitFunction(priority: u32, func_index: Index);
    on_comdat_count => OnComdatCount(count: Index);
    on_comdat_begin => OnComdatBegin(name: &[u8], flags: u32, count: Index);
    on_comdat_entry => OnComdatEntry(kind: ComdatType, index: Index);
    end_linking_section => EndLinkingSection();
    begin_event_section => BeginEventSection(size: Offset);
    on_event_count => OnEventCount(count: Index);
    on_event_type => OnEventType(index: Index, sig_index: Index);
    end_event_section => EndEventSection();
    on_init_expr_f32_const_expr => OnInitExprF32ConstExpr(index: Index, value_bits: u32);
    on_init_expr_f64_const_expr => OnInitExprF64ConstExpr(index: Index, value_bits: u64);
    on_init_expr_v128_const_expr => OnInitExprV128ConstExpr(index: Index, value_bits: V128);
    on_init_expr_global_get_expr => OnInitExprGlobalGetExpr(index: Index, global_index: Index);
    on_init_expr_i32_const_expr => OnInitExprI32ConstExpr(index: Index, value: u32);
    on_init_expr_i64_const_expr => OnInitExprI64ConstExpr(index: Index, value: u64);
}

/// What [`raise_every_event`] got back.
#[derive(Debug, PartialEq)]
pub struct Raised<E> {
    pub handled: bool,
    pub results: Vec<Result<(), E>>,
}

/// Raise every event once, in declaration order, with argument values that
/// are distinct from each other. Begin and End events stay balanced.
pub fn raise_every_event<D: Delegate + ?Sized>(d: &mut D) -> Raised<D::Error> {
    d.on_set_state(&ReaderState { offset: 8, size: 4096 });
    let handled = d.on_error(&ParseError::at(0x40, "bad opcode"));
    let results = vec![
        d.begin_module(1),
        d.end_module(),
        d.begin_section(2, BinarySection::Data, 3),
        d.begin_custom_section(4, b"name5"),
        d.end_custom_section(),
        d.begin_type_section(6),
        d.on_type_count(7),
        d.on_type(8, &[Type::I64, Type::Index(9)], &[Type::I64, Type::Index(10)]),
        d.end_type_section(),
        d.begin_import_section(11),
        d.on_import_count(12),
        d.on_import(13, b"name14", b"name15"),
        d.on_import_func(16, b"name17", b"name18", 19, 20),
        d.on_import_table(21, b"name22", b"name23", 24, Type::Index(25), &Limits::new(26).with_max(27)),
        d.on_import_memory(28, b"name29", b"name30", 31, &Limits::new(32).with_max(33)),
        d.on_import_global(34, b"name35", b"name36", 37, Type::Index(38), true),
        d.on_import_event(40, b"name41", b"name42", 43, 44),
        d.end_import_section(),
        d.begin_function_section(45),
        d.on_function_count(46),
        d.on_function(47, 48),
        d.end_function_section(),
        d.begin_table_section(49),
        d.on_table_count(50),
        d.on_table(51, Type::Index(52), &Limits::new(53).with_max(54)),
        d.end_table_section(),
        d.begin_memory_section(55),
        d.on_memory_count(56),
        d.on_memory(57, &Limits::new(58).with_max(59)),
        d.end_memory_section(),
        d.begin_global_section(60),
        d.on_global_count(61),
        d.begin_global(62, Type::Index(63), false),
        d.begin_global_init_expr(65),
        d.end_global_init_expr(66),
        d.end_global(67),
        d.end_global_section(),
        d.begin_export_section(68),
        d.on_export_count(69),
        d.on_export(70, ExternalKind::Global, 71, b"name72"),
        d.end_export_section(),
        d.begin_start_section(73),
        d.on_start_function(74),
        d.end_start_section(),
        d.begin_code_section(75),
        d.on_function_body_count(76),
        d.begin_function_body(77, 78),
        d.on_local_decl_count(79),
        d.on_local_decl(80, 81, Type::Index(82)),
        d.on_opcode(Opcode::new("op83", 83)),
        d.on_opcode_bare(),
        d.on_opcode_index(84),
        d.on_opcode_index_index(85, 86),
        d.on_opcode_uint32(87),
        d.on_opcode_uint32_uint32(88, 89),
        d.on_opcode_uint64(0x1_0000_005a),
        d.on_opcode_f32(91),
        d.on_opcode_f64(0x1_0000_005c),
        d.on_opcode_v128(V128::new([93, 193, 94, 95])),
        d.on_opcode_block_sig(Type::Index(94)),
        d.on_atomic_load_expr(Opcode::new("op95", 95), 96, 0x1_0000_0061),
        d.on_atomic_store_expr(Opcode::new("op98", 98), 99, 0x1_0000_0064),
        d.on_atomic_rmw_expr(Opcode::new("op101", 101), 102, 0x1_0000_0067),
        d.on_atomic_rmw_cmpxchg_expr(Opcode::new("op104", 104), 105, 0x1_0000_006a),
        d.on_atomic_wait_expr(Opcode::new("op107", 107), 108, 0x1_0000_006d),
        d.on_atomic_notify_expr(Opcode::new("op110", 110), 111, 0x1_0000_0070),
        d.on_binary_expr(Opcode::new("op113", 113)),
        d.on_block_expr(Type::Index(114)),
        d.on_br_expr(115),
        d.on_br_if_expr(116),
        d.on_br_on_exn_expr(117, 118),
        d.on_br_table_expr(&[119, 120], 121),
        d.on_call_expr(122),
        d.on_call_indirect_expr(123, 124),
        d.on_catch_expr(),
        d.on_compare_expr(Opcode::new("op125", 125)),
        d.on_convert_expr(Opcode::new("op126", 126)),
        d.on_drop_expr(),
        d.on_else_expr(),
        d.on_end_expr(),
        d.on_f32_const_expr(127),
        d.on_f64_const_expr(0x1_0000_0080),
        d.on_v128_const_expr(V128::new([129, 229, 130, 131])),
        d.on_global_get_expr(130),
        d.on_global_set_expr(131),
        d.on_i32_const_expr(132),
        d.on_i64_const_expr(0x1_0000_0085),
        d.on_if_expr(Type::Index(134)),
        d.on_load_expr(Opcode::new("op135", 135), 136, 0x1_0000_0089),
        d.on_local_get_expr(138),
        d.on_local_set_expr(139),
        d.on_local_tee_expr(140),
        d.on_loop_expr(Type::Index(141)),
        d.on_memory_copy_expr(),
        d.on_data_drop_expr(142),
        d.on_memory_fill_expr(),
        d.on_memory_grow_expr(),
        d.on_memory_init_expr(143),
        d.on_memory_size_expr(),
        d.on_table_copy_expr(),
        d.on_elem_drop_expr(144),
        d.on_table_init_expr(145),
        d.on_table_get_expr(146),
        d.on_table_set_expr(147),
        d.on_table_grow_expr(148),
        d.on_table_size_expr(149),
        d.on_ref_null_expr(),
        d.on_ref_is_null_expr(),
        d.on_nop_expr(),
        d.on_rethrow_expr(),
        d.on_return_call_expr(150),
        d.on_return_call_indirect_expr(151, 152),
        d.on_return_expr(),
        d.on_select_expr(),
        d.on_store_expr(Opcode::new("op153", 153), 154, 0x1_0000_009b),
        d.on_throw_expr(156),
        d.on_try_expr(Type::Index(157)),
        d.on_unary_expr(Opcode::new("op158", 158)),
        d.on_ternary_expr(Opcode::new("op159", 159)),
        d.on_unreachable_expr(),
        d.on_simd_lane_op_expr(Opcode::new("op160", 160), 0x1_0000_00a1),
        d.on_simd_shuffle_op_expr(Opcode::new("op162", 162), V128::new([163, 263, 164, 165])),
        d.end_function_body(164),
        d.on_end_func(),
        d.end_code_section(),
        d.begin_elem_section(165),
        d.on_elem_segment_count(166),
        d.begin_elem_segment(167, 168, true, Type::Index(170)),
        d.begin_elem_segment_init_expr(171),
        d.end_elem_segment_init_expr(172),
        d.on_elem_segment_elem_expr_count(173, 174),
        d.on_elem_segment_elem_expr_ref_null(175),
        d.on_elem_segment_elem_expr_ref_func(176, 177),
        d.end_elem_segment(178),
        d.end_elem_section(),
        d.begin_data_section(179),
        d.on_data_segment_count(180),
        d.begin_data_segment(181, 182, true),
        d.begin_data_segment_init_expr(184),
        d.end_data_segment_init_expr(185),
        d.on_data_segment_data(186, b"name187"),
        d.end_data_segment(188),
        d.end_data_section(),
        d.begin_data_count_section(189),
        d.on_data_count(190),
        d.end_data_count_section(),
        d.begin_names_section(191),
        d.on_module_name_subsection(192, 193, 194),
        d.on_module_name(b"name195"),
        d.on_function_name_subsection(196, 197, 198),
        d.on_function_names_count(199),
        d.on_function_name(200, b"name201"),
        d.on_local_name_subsection(202, 203, 204),
        d.on_local_name_function_count(205),
        d.on_local_name_local_count(206, 207),
        d.on_local_name(208, 209, b"name210"),
        d.end_names_section(),
        d.begin_reloc_section(211),
        d.on_reloc_count(212, 213),
        d.on_reloc(RelocType::MemoryAddressSleb, 214, 215, 216),
        d.end_reloc_section(),
        d.begin_dylink_section(217),
        d.on_dylink_info(218, 219, 220, 221),
        d.on_dylink_needed_count(222),
        d.on_dylink_needed(b"name223"),
        d.end_dylink_section(),
        d.begin_linking_section(224),
        d.on_symbol_count(225),
        d.on_symbol(226, SymbolType::Event, 227),
        d.on_data_symbol(228, 229, b"name230", 231, 232, 233),
        d.on_function_symbol(234, 235, b"name236", 237),
        d.on_global_symbol(238, 239, b"name240", 241),
        d.on_section_symbol(242, 243, 244),
        d.on_event_symbol(245, 246, b"name247", 248),
        d.on_segment_info_count(249),
        d.on_segment_info(250, b"name251", 252, 253),
        d.on_init_function_count(254),
        d.on_init_function(255, 256),
        d.on_comdat_count(257),
        d.on_comdat_begin(b"name258", 259, 260),
        d.on_comdat_entry(ComdatType::Function, 261),
        d.end_linking_section(),
        d.begin_event_section(262),
        d.on_event_count(263),
        d.on_event_type(264, 265),
        d.end_event_section(),
        d.on_init_expr_f32_const_expr(266, 267),
        d.on_init_expr_f64_const_expr(268, 0x1_0000_010d),
        d.on_init_expr_v128_const_expr(270, V128::new([271, 371, 272, 273])),
        d.on_init_expr_global_get_expr(272, 273),
        d.on_init_expr_i32_const_expr(274, 275),
        d.on_init_expr_i64_const_expr(276, 0x1_0000_0115),
    ];
    Raised { handled, results }
}
