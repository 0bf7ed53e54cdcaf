//! Blanket implementations connecting [`crate::api`] traits to [`crate::oep`]
//! traits on [`crate::layouts::Engine`], through the width recursion of
//! [`crate::dispatch`].
//!
//! This module contains no user-facing logic; every implementation unpacks
//! its operands, decomposes them onto native registers and repacks the
//! result.

mod elementary;
mod fft;
mod vector_ops;
