//! Measures word acceptance on unions of word automata, before and after determinization.
//!
//! Run: `cargo bench --bench acceptance`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rationals::Automaton;
use rationals::transformations::{BinaryTransformation, Determinize, Union, UnaryTransformation};

/// The union of `count` words of `length` labels each, all sharing their first label.
fn union_of_words(count: u32, length: u32) -> (Automaton<u32>, Vec<u32>) {
    let word = |seed: u32| -> Vec<u32> { (0..length).map(|position| if position == 0 { 0 } else { seed * length + position }).collect() };
    let mut automaton = Automaton::word_automaton(&word(0));
    for seed in 1..count {
        automaton = Union.transform(&automaton, &Automaton::word_automaton(&word(seed)));
    }
    (automaton, word(count - 1))
}

fn bench_accept(c: &mut Criterion) {
    let mut group = c.benchmark_group("accept");
    for count in [4, 16, 64] {
        let (nfa, word) = union_of_words(count, 8);
        let dfa = Determinize.transform(&nfa);
        group.bench_with_input(BenchmarkId::new("nfa", count), &word, |b, word| {
            b.iter(|| black_box(nfa.accept(black_box(word))))
        });
        group.bench_with_input(BenchmarkId::new("dfa", count), &word, |b, word| {
            b.iter(|| black_box(dfa.accept(black_box(word))))
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let (nfa, _) = union_of_words(16, 4);
    c.bench_function("enumerate_4", |b| {
        b.iter(|| black_box(nfa.enumerate(black_box(4))))
    });
}

criterion_group!(benches, bench_accept, bench_enumerate);
criterion_main!(benches);
