#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use arithcheck::{Validator, ValidatorOptions, tokenize};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const MAX_GROUPS: usize = 256;

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Mostly defer to libFuzzer, but every tenth run sprinkle spaces through the
/// input, since neither validator may care about them.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size == 0 || seed % 10 != 0 {
        return fuzzer_mutate(data, size, max_size);
    }

    let mut out = Vec::with_capacity(max_size);
    with_rng(|rng| {
        for &b in &data[..size] {
            while out.len() < max_size && rng.random_ratio(1, 4) {
                out.push(b' ');
            }
            if out.len() < max_size {
                out.push(b);
            }
        }
    });
    data[..out.len()].copy_from_slice(&out);
    out.len()
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
enum Node {
    Number { int_part: u16, frac: Option<u16> },
    Group { negate: bool, first: Box<Node>, rest: Vec<(bool, Node)> },
}

/// Renders `node` as an expression both validators accept. A group is only
/// ever followed by `-`, because the scanner reads `)` `+` as two operators in
/// a row.
fn render(node: &Node, out: &mut String, groups: &mut usize) -> bool {
    match node {
        Node::Number { int_part, frac } => {
            out.push_str(&(int_part % 1000).to_string());
            if let Some(frac) = frac {
                out.push('.');
                out.push_str(&(frac % 1000).to_string());
            }
            false
        }
        Node::Group { negate, first, rest } if *groups < MAX_GROUPS => {
            *groups += 1;
            out.push('(');
            if *negate {
                out.push('-');
            }
            let mut after_group = render(first, out, groups);
            for (plus, child) in rest {
                out.push(if *plus && !after_group { '+' } else { '-' });
                after_group = render(child, out, groups);
            }
            out.push(')');
            true
        }
        Node::Group { .. } => {
            out.push('1');
            false
        }
    }
}

fn validators(data: &[u8]) {
    let validator = Validator::new(ValidatorOptions {
        max_nesting_depth: MAX_GROUPS,
    });

    // Raw input: anything goes, nothing may panic.
    let input = String::from_utf8_lossy(data);
    let comparison = validator.compare(&input);
    if let Err(err) = tokenize(&input) {
        assert_eq!(comparison.recursive, Err(err), "{input:?}");
    }

    // Structured input: always an expression, which both must accept.
    if let Ok(node) = Node::arbitrary(&mut Unstructured::new(data)) {
        let mut expr = String::new();
        render(&node, &mut expr, &mut 0);
        let comparison = validator.compare(&expr);
        assert!(comparison.both_valid(), "{expr}: {comparison:?}");
    }
}

fuzz_target!(|data: &[u8]| validators(data));
