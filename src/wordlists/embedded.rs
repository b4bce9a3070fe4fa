//! Embedded word list
//!
//! Compiled into the binary at build time from `data/classic.txt`.

include!(concat!(env!("OUT_DIR"), "/classic.rs"));
