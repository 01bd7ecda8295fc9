//! Test: Deriving on a struct should produce an error.
#![allow(dead_code)]

use enumerated::Enumerated;

#[derive(Clone, Copy, Enumerated)]
struct Point {
    x: i32,
}

fn main() {}
