// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reusable checks on containers.

use crate::enforce::contract_comment;
use crate::status::Status;

/// The vector can take one more element without reallocating.
#[allow(clippy::ptr_arg)]
pub fn vec_below_capacity<T>(v: &Vec<T>) -> Status {
    let below_capacity = v.len() < v.capacity();
    let comment = contract_comment(String::new, || {
        format!(
            "The vector's size ({}) must not exceed its capacity ({})",
            v.len(),
            v.capacity()
        )
    });
    Status::new(comment, below_capacity)
}
