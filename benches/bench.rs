use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordtree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Without rebalancing this is a single
/// chain leaning right.
fn get_unbalanced_tree(num_levels: usize) -> Tree {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by inserting values so that the result has `num_levels` levels, all full.
fn get_balanced_tree(num_levels: usize) -> Tree {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        let _ = tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets a fresh clone so mutations
/// don't leak between iterations.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree, i32)) {
    let mut group = c.benchmark_group(name);

    // The unbalanced shape is a chain, so it stops at sizes where building it stays quick.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (shape, tree) in tree_tests {
            let Some(largest_element_in_tree) = tree.max() else {
                continue;
            };
            let id = BenchmarkId::new(shape, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(i));
    });
    bench_helper(c, "delete", |tree, i| {
        let _ = tree.delete(i);
    });

    bench_helper(c, "insert", |tree, i| {
        let _ = tree.insert(i + 1);
    });

    bench_helper(c, "contains-miss", |tree, i| {
        let _found = black_box(tree.contains(i + 1));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        let _ = tree.delete(i + 1);
    });
    bench_helper(c, "delete-root", |tree, _| {
        if let Some(root) = tree.preorder().first() {
            let _ = tree.delete(*root);
        }
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
