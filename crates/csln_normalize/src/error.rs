/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors from loading or validating a [`NormalizerConfig`](crate::NormalizerConfig).
///
/// Normalization itself never fails; a field it cannot read is left as is.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("month token {token:?} maps to {value}, expected 1-12")]
    InvalidMonth { token: String, value: u8 },

    #[error("configured {0} term is empty")]
    EmptyTerm(&'static str),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
