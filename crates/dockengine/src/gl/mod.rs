//! Raw GL plumbing: program compilation, binding save/restore guards, and
//! the shared resource pool.
//!
//! Nothing in this module owns the GL context. Every entry point is invoked
//! from a host callback with the host's context current, and every entry
//! point that mutates context-global bindings restores them before
//! returning.

pub(crate) mod compile;
pub(crate) mod pool;
pub(crate) mod state;

pub(crate) use pool::GpuResourcePool;
