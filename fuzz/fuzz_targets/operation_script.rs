// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target replaying arbitrary operation scripts against a `Vec` oracle.
//!
//! Every outcome (value, error or miss) and the contents after every step
//! must match. Debug contracts inside the list fire on any storage corruption.

#![no_main]

use arbitrary::Arbitrary;
use arrayseq::testing::{apply_op, snapshot, Op};
use arrayseq::{ArrayList, Sequence};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    InsertAt(usize, u8),
    InsertFirst(u8),
    InsertLast(u8),
    InsertAfter(u8, u8),
    RemoveAt(usize),
    RemoveFirst,
    RemoveLast,
    RemoveValue(u8),
    Set(usize, u8),
    Clear,
}

impl From<FuzzOp> for Op<u8> {
    fn from(op: FuzzOp) -> Self {
        match op {
            FuzzOp::InsertAt(i, x) => Op::InsertAt(i, x),
            FuzzOp::InsertFirst(x) => Op::InsertFirst(x),
            FuzzOp::InsertLast(x) => Op::InsertLast(x),
            FuzzOp::InsertAfter(e, x) => Op::InsertAfter(e, x),
            FuzzOp::RemoveAt(i) => Op::RemoveAt(i),
            FuzzOp::RemoveFirst => Op::RemoveFirst,
            FuzzOp::RemoveLast => Op::RemoveLast,
            FuzzOp::RemoveValue(x) => Op::RemoveValue(x),
            FuzzOp::Set(i, x) => Op::Set(i, x),
            FuzzOp::Clear => Op::Clear,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_capacity: u8,
    script: Vec<FuzzOp>,
}

fuzz_target!(|input: Input| {
    let mut list: ArrayList<u8> = ArrayList::with_capacity(input.initial_capacity as usize);
    let mut oracle: Vec<u8> = Vec::new();
    let mut capacity = list.capacity();

    for op in input.script {
        let op = Op::from(op);

        // Property 1: same outcome as Vec
        assert!(apply_op(&mut list, &mut oracle, &op), "diverged on {:?}", op);

        // Property 2: same contents as Vec
        assert_eq!(snapshot(&list), oracle, "contents diverged after {:?}", op);

        // Property 3: capacity covers size and never shrinks
        assert!(list.size() <= list.capacity());
        assert!(list.capacity() >= capacity, "capacity shrank on {:?}", op);
        capacity = list.capacity();
    }
});
