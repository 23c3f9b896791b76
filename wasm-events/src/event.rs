//! The event vocabulary as data.
//!
//! Every method of [`Delegate`](crate::Delegate) has a matching
//! [`EventKind`]. The kind carries the name used in trace output and the
//! [`Category`] that decides how the logging decorator treats it:
//!
//! ```text
//! Begin   log line, then indent          BeginModule, BeginTypeSection, ...
//! End     dedent, then log line          EndModule, EndTypeSection, ...
//! Leaf    log line                       OnType, OnLocalGetExpr, ...
//! Silent  no line, forward only          OnOpcode*, OnError, OnSetState, ...
//! ```
//!
//! Silent events are the generic opcode dispatch hooks (each instruction
//! also gets its own specific event, which is the one that is logged), the
//! error and state-snapshot hooks, and `BeginSection`.

/// How the logging decorator handles an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Opens a nesting level after its line is written.
    Begin,
    /// Closes a nesting level before its line is written.
    End,
    /// Written at the current level.
    Leaf,
    /// Forwarded without a line.
    Silent,
}

macro_rules! event_name {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $name:literal) => {
        $name
    };
}

macro_rules! event_kinds {
    ($( $variant:ident => $category:ident $(as $name:literal)? ),* $(,)?) => {
        /// One entry per reader event.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventKind {
            $( $variant, )*
        }

        impl EventKind {
            /// Every event kind, in declaration order.
            pub const ALL: &'static [EventKind] = &[$( EventKind::$variant, )*];

            /// The name written at the start of the event's trace line.
            pub fn name(self) -> &'static str {
                match self {
                    $( EventKind::$variant => event_name!($variant $(, $name)?), )*
                }
            }

            pub fn category(self) -> Category {
                match self {
                    $( EventKind::$variant => Category::$category, )*
                }
            }
        }
    };
}

event_kinds! {
    OnError => Silent,
    OnSetState => Silent,

    BeginModule => Begin,
    EndModule => End,

    BeginSection => Silent,

    BeginCustomSection => Begin,
    EndCustomSection => End,

    BeginTypeSection => Begin,
    OnTypeCount => Leaf,
    OnType => Leaf,
    EndTypeSection => End,

    BeginImportSection => Begin,
    OnImportCount => Leaf,
    OnImport => Leaf,
    OnImportFunc => Leaf,
    OnImportTable => Leaf,
    OnImportMemory => Leaf,
    OnImportGlobal => Leaf,
    OnImportEvent => Leaf,
    EndImportSection => End,

    BeginFunctionSection => Begin,
    OnFunctionCount => Leaf,
    OnFunction => Leaf,
    EndFunctionSection => End,

    BeginTableSection => Begin,
    OnTableCount => Leaf,
    OnTable => Leaf,
    EndTableSection => End,

    BeginMemorySection => Begin,
    OnMemoryCount => Leaf,
    OnMemory => Leaf,
    EndMemorySection => End,

    BeginGlobalSection => Begin,
    OnGlobalCount => Leaf,
    BeginGlobal => Leaf,
    BeginGlobalInitExpr => Leaf,
    EndGlobalInitExpr => Leaf,
    EndGlobal => Leaf,
    EndGlobalSection => End,

    BeginExportSection => Begin,
    OnExportCount => Leaf,
    OnExport => Leaf,
    EndExportSection => End,

    BeginStartSection => Begin,
    OnStartFunction => Leaf,
    EndStartSection => End,

    BeginCodeSection => Begin,
    OnFunctionBodyCount => Leaf,
    BeginFunctionBody => Leaf,
    OnLocalDeclCount => Leaf,
    OnLocalDecl => Leaf,

    OnOpcode => Silent,
    OnOpcodeBare => Silent,
    OnOpcodeIndex => Silent,
    OnOpcodeIndexIndex => Silent,
    OnOpcodeUint32 => Silent,
    OnOpcodeUint32Uint32 => Silent,
    OnOpcodeUint64 => Silent,
    OnOpcodeF32 => Silent,
    OnOpcodeF64 => Silent,
    OnOpcodeV128 => Silent,
    OnOpcodeBlockSig => Silent,

    OnAtomicLoadExpr => Leaf,
    OnAtomicStoreExpr => Leaf,
    OnAtomicRmwExpr => Leaf,
    OnAtomicRmwCmpxchgExpr => Leaf,
    OnAtomicWaitExpr => Leaf,
    OnAtomicNotifyExpr => Leaf,
    OnBinaryExpr => Leaf,
    OnBlockExpr => Leaf,
    OnBrExpr => Leaf,
    OnBrIfExpr => Leaf,
    OnBrOnExnExpr => Leaf,
    OnBrTableExpr => Leaf,
    OnCallExpr => Leaf,
    OnCallIndirectExpr => Leaf,
    OnCatchExpr => Leaf,
    OnCompareExpr => Leaf,
    OnConvertExpr => Leaf,
    OnDropExpr => Leaf,
    OnElseExpr => Leaf,
    OnEndExpr => Leaf,
    OnF32ConstExpr => Leaf,
    OnF64ConstExpr => Leaf,
    OnV128ConstExpr => Leaf,
    OnGlobalGetExpr => Leaf,
    OnGlobalSetExpr => Leaf,
    OnI32ConstExpr => Leaf,
    OnI64ConstExpr => Leaf,
    OnIfExpr => Leaf,
    OnLoadExpr => Leaf,
    OnLocalGetExpr => Leaf,
    OnLocalSetExpr => Leaf,
    OnLocalTeeExpr => Leaf,
    OnLoopExpr => Leaf,
    OnMemoryCopyExpr => Leaf,
    OnDataDropExpr => Leaf,
    OnMemoryFillExpr => Leaf,
    OnMemoryGrowExpr => Leaf,
    OnMemoryInitExpr => Leaf,
    OnMemorySizeExpr => Leaf,
    OnTableCopyExpr => Leaf,
    OnElemDropExpr => Leaf,
    OnTableInitExpr => Leaf,
    OnTableGetExpr => Leaf,
    OnTableSetExpr => Leaf,
    OnTableGrowExpr => Leaf,
    OnTableSizeExpr => Leaf,
    OnRefNullExpr => Leaf,
    OnRefIsNullExpr => Leaf,
    OnNopExpr => Leaf,
    OnRethrowExpr => Leaf,
    OnReturnCallExpr => Leaf,
    OnReturnCallIndirectExpr => Leaf,
    OnReturnExpr => Leaf,
    OnSelectExpr => Leaf,
    OnStoreExpr => Leaf,
    OnThrowExpr => Leaf,
    OnTryExpr => Leaf,
    OnUnaryExpr => Leaf,
    OnTernaryExpr => Leaf,
    OnUnreachableExpr => Leaf,
    OnSimdLaneOpExpr => Leaf,
    OnSimdShuffleOpExpr => Leaf,
    EndFunctionBody => Leaf,
    OnEndFunc => Silent,
    EndCodeSection => End,

    BeginElemSection => Begin,
    OnElemSegmentCount => Leaf,
    BeginElemSegment => Leaf,
    BeginElemSegmentInitExpr => Leaf,
    EndElemSegmentInitExpr => Leaf,
    OnElemSegmentElemExprCount => Leaf,
    OnElemSegmentElemExprRefNull => Leaf as "OnElemSegmentElemExpr_RefNull",
    OnElemSegmentElemExprRefFunc => Leaf as "OnElemSegmentElemExpr_RefFunc",
    EndElemSegment => Leaf,
    EndElemSection => End,

    BeginDataSection => Begin,
    OnDataSegmentCount => Leaf,
    BeginDataSegment => Leaf,
    BeginDataSegmentInitExpr => Leaf,
    EndDataSegmentInitExpr => Leaf,
    OnDataSegmentData => Leaf,
    EndDataSegment => Leaf,
    EndDataSection => End,

    BeginDataCountSection => Begin,
    OnDataCount => Leaf,
    EndDataCountSection => End,

    BeginNamesSection => Begin,
    OnModuleNameSubsection => Leaf,
    OnModuleName => Leaf,
    OnFunctionNameSubsection => Leaf,
    OnFunctionNamesCount => Leaf,
    OnFunctionName => Leaf,
    OnLocalNameSubsection => Leaf,
    OnLocalNameFunctionCount => Leaf,
    OnLocalNameLocalCount => Leaf,
    OnLocalName => Leaf,
    EndNamesSection => End,

    BeginRelocSection => Begin,
    OnRelocCount => Leaf,
    OnReloc => Leaf,
    EndRelocSection => End,

    BeginDylinkSection => Begin,
    OnDylinkInfo => Leaf,
    OnDylinkNeededCount => Leaf,
    OnDylinkNeeded => Leaf,
    EndDylinkSection => End,

    BeginLinkingSection => Begin,
    OnSymbolCount => Leaf,
    OnSymbol => Leaf,
    OnDataSymbol => Leaf,
    OnFunctionSymbol => Leaf,
    OnGlobalSymbol => Leaf,
    OnSectionSymbol => Leaf,
    OnEventSymbol => Leaf,
    OnSegmentInfoCount => Leaf,
    OnSegmentInfo => Leaf,
    OnInitFunctionCount => Leaf,
    OnInitFunction => Leaf,
    OnComdatCount => Leaf,
    OnComdatBegin => Leaf,
    OnComdatEntry => Leaf,
    EndLinkingSection => End,

    BeginEventSection => Begin,
    OnEventCount => Leaf,
    OnEventType => Leaf,
    EndEventSection => End,

    OnInitExprF32ConstExpr => Leaf,
    OnInitExprF64ConstExpr => Leaf,
    OnInitExprV128ConstExpr => Leaf,
    OnInitExprGlobalGetExpr => Leaf,
    OnInitExprI32ConstExpr => Leaf,
    OnInitExprI64ConstExpr => Leaf,
}

impl EventKind {
    #[inline]
    pub fn is_silent(self) -> bool {
        self.category() == Category::Silent
    }

    /// The End kind closing this Begin kind, by name.
    pub fn closing(self) -> Option<EventKind> {
        if self.category() != Category::Begin {
            return None;
        }
        let rest = self.name().strip_prefix("Begin")?;
        EventKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.category() == Category::End && kind.name().strip_prefix("End") == Some(rest))
    }
}
