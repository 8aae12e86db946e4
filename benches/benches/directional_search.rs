// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_element_tree::{ElementKind, ElementNode, FocusOptions, NodeId, Tree};
use understory_spatial_focus::select::{find_candidate, handle_key};
use understory_spatial_focus::types::Direction;

const CELL: f64 = 40.0;

fn cell(x: usize, y: usize) -> ElementNode {
    let x0 = x as f64 * CELL;
    let y0 = y as f64 * CELL;
    let kind = if (x + y) % 7 == 0 {
        ElementKind::Anchor
    } else if (x + y) % 5 == 0 {
        ElementKind::Button
    } else {
        ElementKind::TextInput
    };
    ElementNode::new(kind, Rect::new(x0, y0, x0 + CELL - 4.0, y0 + CELL - 4.0))
}

/// An `n` by `n` grid of controls, one row wrapper per row.
fn gen_rows(n: usize) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new();
    let body = tree.insert(None, ElementNode::default());
    tree.set_body(Some(body));
    let mut ids = Vec::with_capacity(n * n);
    for y in 0..n {
        let row = tree.insert(Some(body), ElementNode::default());
        for x in 0..n {
            ids.push(tree.insert(Some(row), cell(x, y)));
        }
    }
    (tree, ids)
}

/// An `n` by `n` grid where every control sits alone in a wrapper, so no sibling shortcut
/// applies and every lookup walks the body.
fn gen_isolated(n: usize) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new();
    let body = tree.insert(None, ElementNode::default());
    tree.set_body(Some(body));
    let mut ids = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let wrapper = tree.insert(Some(body), ElementNode::default());
            ids.push(tree.insert(Some(wrapper), cell(x, y)));
        }
    }
    (tree, ids)
}

fn bench_find_candidate(c: &mut Criterion) {
    for (label, generate) in [
        ("rows", gen_rows as fn(usize) -> (Tree, Vec<NodeId>)),
        ("isolated", gen_isolated),
    ] {
        let mut group = c.benchmark_group(format!("find_candidate_{label}"));
        for &n in &[8_usize, 32, 64] {
            let (tree, ids) = generate(n);
            let base = ids[ids.len() / 2];
            group.throughput(Throughput::Elements((n * n) as u64));
            for direction in Direction::ALL {
                group.bench_function(format!("{direction:?}_n{n}"), |b| {
                    b.iter(|| black_box(find_candidate(&tree, black_box(base), direction)));
                });
            }
        }
        group.finish();
    }
}

/// A body with `n` wrapped inputs stacked top to bottom.
fn gen_wide_body(n: usize) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new();
    let body = tree.insert(None, ElementNode::default());
    tree.set_body(Some(body));
    let ids = (0..n)
        .map(|i| {
            let wrapper = tree.insert(Some(body), ElementNode::default());
            tree.insert(Some(wrapper), cell(0, i))
        })
        .collect();
    (tree, ids)
}

fn bench_wide_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_body");
    for &n in &[5_000_usize, 10_000, 20_000] {
        let (tree, ids) = gen_wide_body(n);
        let last = ids[n - 1];
        group.throughput(Throughput::Elements(n as u64));
        // Nothing lies right of and below the last row, so the whole body is walked.
        group.bench_function(format!("right_no_match_n{n}"), |b| {
            b.iter(|| black_box(find_candidate(&tree, black_box(last), Direction::Right)));
        });
        group.bench_function(format!("up_from_last_n{n}"), |b| {
            b.iter(|| black_box(find_candidate(&tree, black_box(last), Direction::Up)));
        });
    }
    group.finish();
}

fn bench_handle_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_key");
    for &n in &[8_usize, 32, 64] {
        let (mut tree, ids) = gen_isolated(n);
        let base = ids[ids.len() / 2];
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("arrow_down_n{n}"), |b| {
            b.iter(|| {
                tree.focus(base, FocusOptions::default());
                black_box(handle_key(&mut tree, black_box("ArrowDown")))
            });
        });
        group.bench_function(format!("no_reference_n{n}"), |b| {
            b.iter(|| {
                tree.blur();
                black_box(handle_key(&mut tree, black_box("ArrowDown")))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_find_candidate,
    bench_wide_body,
    bench_handle_key
);
criterion_main!(benches);
