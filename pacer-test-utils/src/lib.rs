// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared test infrastructure for the pacer workspace.

pub mod helpers;
pub mod recorder;

pub use self::recorder::{Counter, Recorder};
