//! Hand-written fakes for a small car domain, wired to mokka recorders and
//! exercised through the types that depend on them.

mod bar;
mod car;
