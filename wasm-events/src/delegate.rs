//! The reader's delegate contract.
//!
//! A binary reader walks a module and calls one [`Delegate`] method per
//! structural or instruction event, in input order. Structure is expressed
//! by Begin/End pairs (`begin_module` ... `end_module`, `begin_type_section`
//! ... `end_type_section`); everything in between belongs to that level.
//!
//! Every method returning `Result` has a default body that accepts the
//! event, so a delegate only overrides what it cares about. Returning `Err`
//! asks the reader to stop; the reader decides what happens next.
//!
//! Decorators such as [`Logging`](crate::Logging) implement every method and
//! pass each call through to an inner delegate.

use std::convert::Infallible;

use crate::error::ParseError;
use crate::opcode::Opcode;
use crate::types::{
    Address, BinarySection, ComdatType, ExternalKind, Index, Limits, Offset, ReaderState,
    RelocType, SymbolType, Type, V128,
};

/// Receiver of reader events.
#[allow(unused_variables)]
pub trait Delegate {
    /// Error a handler returns to stop the read.
    type Error;

    /// The reader found a problem in its input. Returns whether the error
    /// was handled.
    fn on_error(&mut self, error: &ParseError) -> bool {
        false
    }

    /// The reader's position changed.
    fn on_set_state(&mut self, state: &ReaderState) {}

    // ========================================================================
    // Module
    // ========================================================================

    fn begin_module(&mut self, version: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_module(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Raised for every section before its specific Begin event.
    fn begin_section(
        &mut self,
        section_index: Index,
        section_type: BinarySection,
        size: Offset,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Custom Section
    // ========================================================================

    fn begin_custom_section(&mut self, size: Offset, section_name: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_custom_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Type Section
    // ========================================================================

    fn begin_type_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_type_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_type(&mut self, index: Index, param_types: &[Type], result_types: &[Type]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_type_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Import Section
    // ========================================================================

    fn begin_import_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_import_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_import(&mut self, index: Index, module_name: &[u8], field_name: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_import_func(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        func_index: Index,
        sig_index: Index,
    ) -> Result<(), Self::Error> {
        Ok(())
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
        Ok(())
    }
    fn on_import_memory(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        memory_index: Index,
        page_limits: &Limits,
    ) -> Result<(), Self::Error> {
        Ok(())
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
        Ok(())
    }
    fn on_import_event(
        &mut self,
        import_index: Index,
        module_name: &[u8],
        field_name: &[u8],
        event_index: Index,
        sig_index: Index,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_import_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Function Section
    // ========================================================================

    fn begin_function_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_function_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_function(&mut self, index: Index, sig_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_function_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Table Section
    // ========================================================================

    fn begin_table_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table(&mut self, index: Index, elem_type: Type, elem_limits: &Limits) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_table_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Memory Section
    // ========================================================================

    fn begin_memory_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_memory_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_memory(&mut self, index: Index, page_limits: &Limits) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_memory_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Global Section
    // ========================================================================

    fn begin_global_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_global_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn begin_global(&mut self, index: Index, ty: Type, mutable: bool) -> Result<(), Self::Error> {
        Ok(())
    }
    fn begin_global_init_expr(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_global_init_expr(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_global(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_global_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Export Section
    // ========================================================================

    fn begin_export_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_export_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_export(
        &mut self,
        index: Index,
        kind: ExternalKind,
        item_index: Index,
        name: &[u8],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_export_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Start Section
    // ========================================================================

    fn begin_start_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_start_function(&mut self, func_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_start_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Code Section
    // ========================================================================

    fn begin_code_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_function_body_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn begin_function_body(&mut self, index: Index, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_decl_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_decl(&mut self, decl_index: Index, count: Index, ty: Type) -> Result<(), Self::Error> {
        Ok(())
    }

    // Generic opcode hooks. Raised for every instruction, alongside the
    // instruction's own event below, grouped by immediate shape.

    fn on_opcode(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_bare(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_index(&mut self, value: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_index_index(&mut self, value: Index, value2: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_uint32(&mut self, value: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_uint32_uint32(&mut self, value: u32, value2: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_uint64(&mut self, value: u64) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_f32(&mut self, value_bits: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_f64(&mut self, value_bits: u64) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_v128(&mut self, value_bits: V128) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_opcode_block_sig(&mut self, sig_type: Type) -> Result<(), Self::Error> {
        Ok(())
    }

    // Instructions.

    fn on_atomic_load_expr(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_atomic_store_expr(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_atomic_rmw_expr(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_atomic_rmw_cmpxchg_expr(
        &mut self,
        opcode: Opcode,
        alignment_log2: u32,
        offset: Address,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_atomic_wait_expr(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_atomic_notify_expr(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_binary_expr(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_block_expr(&mut self, sig_type: Type) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_br_expr(&mut self, depth: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_br_if_expr(&mut self, depth: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_br_on_exn_expr(&mut self, depth: Index, event_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    /// `br_table`; `target_depths` holds exactly the declared number of targets.
    fn on_br_table_expr(&mut self, target_depths: &[Index], default_target_depth: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_call_expr(&mut self, func_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_call_indirect_expr(&mut self, sig_index: Index, table_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_catch_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_compare_expr(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_convert_expr(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_drop_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_else_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_end_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    /// `f32.const`, given as its raw bit pattern.
    fn on_f32_const_expr(&mut self, value_bits: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    /// `f64.const`, given as its raw bit pattern.
    fn on_f64_const_expr(&mut self, value_bits: u64) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_v128_const_expr(&mut self, value_bits: V128) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_global_get_expr(&mut self, global_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_global_set_expr(&mut self, global_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_i32_const_expr(&mut self, value: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_i64_const_expr(&mut self, value: u64) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_if_expr(&mut self, sig_type: Type) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_load_expr(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_get_expr(&mut self, local_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_set_expr(&mut self, local_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_tee_expr(&mut self, local_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_loop_expr(&mut self, sig_type: Type) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_memory_copy_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_data_drop_expr(&mut self, segment_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_memory_fill_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_memory_grow_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_memory_init_expr(&mut self, segment_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_memory_size_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table_copy_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_elem_drop_expr(&mut self, segment_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table_init_expr(&mut self, segment_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table_get_expr(&mut self, table_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table_set_expr(&mut self, table_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table_grow_expr(&mut self, table_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_table_size_expr(&mut self, table_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_ref_null_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_ref_is_null_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_nop_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_rethrow_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_return_call_expr(&mut self, func_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_return_call_indirect_expr(&mut self, sig_index: Index, table_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_return_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_select_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_store_expr(&mut self, opcode: Opcode, alignment_log2: u32, offset: Address) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_throw_expr(&mut self, event_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_try_expr(&mut self, sig_type: Type) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_unary_expr(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_ternary_expr(&mut self, opcode: Opcode) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_unreachable_expr(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_simd_lane_op_expr(&mut self, opcode: Opcode, value: u64) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_simd_shuffle_op_expr(&mut self, opcode: Opcode, value: V128) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_function_body(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    /// The final `end` of a function body was read.
    fn on_end_func(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_code_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Elem Section
    // ========================================================================

    fn begin_elem_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_elem_segment_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn begin_elem_segment(
        &mut self,
        index: Index,
        table_index: Index,
        passive: bool,
        elem_type: Type,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn begin_elem_segment_init_expr(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_elem_segment_init_expr(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_elem_segment_elem_expr_count(&mut self, index: Index, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_elem_segment_elem_expr_ref_null(&mut self, segment_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_elem_segment_elem_expr_ref_func(&mut self, segment_index: Index, func_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_elem_segment(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_elem_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Data Section
    // ========================================================================

    fn begin_data_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_data_segment_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn begin_data_segment(&mut self, index: Index, memory_index: Index, passive: bool) -> Result<(), Self::Error> {
        Ok(())
    }
    fn begin_data_segment_init_expr(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_data_segment_init_expr(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_data_segment_data(&mut self, index: Index, data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_data_segment(&mut self, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_data_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // DataCount Section
    // ========================================================================

    fn begin_data_count_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_data_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_data_count_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Names Section
    // ========================================================================

    fn begin_names_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_module_name_subsection(
        &mut self,
        index: Index,
        name_type: u32,
        subsection_size: Offset,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_module_name(&mut self, name: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_function_name_subsection(
        &mut self,
        index: Index,
        name_type: u32,
        subsection_size: Offset,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_function_names_count(&mut self, num_functions: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_function_name(&mut self, function_index: Index, function_name: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_name_subsection(
        &mut self,
        index: Index,
        name_type: u32,
        subsection_size: Offset,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_name_function_count(&mut self, num_functions: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_name_local_count(&mut self, function_index: Index, num_locals: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_local_name(&mut self, function_index: Index, local_index: Index, local_name: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_names_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Reloc Section
    // ========================================================================

    fn begin_reloc_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_reloc_count(&mut self, count: Index, section_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    /// A relocation entry. `addend` carries the raw bits of a signed value.
    fn on_reloc(&mut self, ty: RelocType, offset: Offset, index: Index, addend: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_reloc_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Dylink Section
    // ========================================================================

    fn begin_dylink_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_dylink_info(
        &mut self,
        mem_size: u32,
        mem_align: u32,
        table_size: u32,
        table_align: u32,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_dylink_needed_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_dylink_needed(&mut self, so_name: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_dylink_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Linking Section
    // ========================================================================

    fn begin_linking_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_symbol_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_symbol(&mut self, symbol_index: Index, ty: SymbolType, flags: u32) -> Result<(), Self::Error> {
        Ok(())
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
        Ok(())
    }
    fn on_function_symbol(&mut self, index: Index, flags: u32, name: &[u8], func_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_global_symbol(&mut self, index: Index, flags: u32, name: &[u8], global_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_section_symbol(&mut self, index: Index, flags: u32, section_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_event_symbol(&mut self, index: Index, flags: u32, name: &[u8], event_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_segment_info_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_segment_info(&mut self, index: Index, name: &[u8], alignment: u32, flags: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_init_function_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_init_function(&mut self, priority: u32, func_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_comdat_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_comdat_begin(&mut self, name: &[u8], flags: u32, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_comdat_entry(&mut self, kind: ComdatType, index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_linking_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Event Section
    // ========================================================================

    fn begin_event_section(&mut self, size: Offset) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_event_count(&mut self, count: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_event_type(&mut self, index: Index, sig_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn end_event_section(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    // ========================================================================
    // Init Expressions
    // ========================================================================

    fn on_init_expr_f32_const_expr(&mut self, index: Index, value_bits: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_init_expr_f64_const_expr(&mut self, index: Index, value_bits: u64) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_init_expr_v128_const_expr(&mut self, index: Index, value_bits: V128) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_init_expr_global_get_expr(&mut self, index: Index, global_index: Index) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_init_expr_i32_const_expr(&mut self, index: Index, value: u32) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_init_expr_i64_const_expr(&mut self, index: Index, value: u64) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A delegate that accepts every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopDelegate;

impl Delegate for NopDelegate {
    type Error = Infallible;
}
