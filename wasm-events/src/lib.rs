//! WebAssembly binary reader events
//!
//! The event contract a streaming WebAssembly binary reader drives while it
//! walks a module, and a decorator that traces every event as an indented
//! text line before forwarding it to the delegate doing the real work.
//!
//! # Architecture
//!
//! - **delegate.rs** - `Delegate` trait, one method per event; `NopDelegate`
//! - **event.rs** - `EventKind` table: trace name and nesting category per event
//! - **logging.rs** - `Logging` decorator and its `Options`
//! - **format.rs** - Display adapters for event arguments (type lists, limits, `%g` floats, lanes)
//! - **indent.rs** - Nesting depth of the trace
//! - **stream.rs** - Trace sinks: memory, `io::Write`, `tracing`
//! - **opcode.rs** - Opcode descriptors and mnemonic tables
//! - **types.rs** - Argument types (value types, limits, v128, section/reloc/symbol kinds)
//! - **error.rs** - Error types

pub mod delegate;
pub mod error;
pub mod event;
pub mod format;
pub mod indent;
pub mod logging;
pub mod opcode;
pub mod stream;
pub mod types;

pub use delegate::{Delegate, NopDelegate};
pub use error::{ParseError, StreamError};
pub use event::{Category, EventKind};
pub use indent::Indentation;
pub use logging::{Logging, Options};
pub use opcode::Opcode;
pub use stream::{MemoryStream, Stream, TracingStream, WriteStream};
pub use types::{
    Address, BinarySection, ComdatType, ExternalKind, Index, Limits, Offset, ReaderState,
    RelocType, SymbolType, Type, V128,
};
