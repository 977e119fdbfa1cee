// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests that run the compiled tools in scratch directories.
//!
//! - `util` holds the helpers that spawn a tool with a temporary working directory.
//! - Test names start with the tool they exercise, e.g. `pack_` or `font_`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
