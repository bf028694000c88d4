use criterion::{black_box, criterion_group, criterion_main, Criterion};

use molgraph::smiles::{normalize, parse_smiles};
use molgraph::{add_hydrogens_with, BondOrderTyper};

const METHANE: &str = "C";
const IBUPROFEN: &str = "CC(C)Cc1ccc(cc1)[C@@H](C)C(=O)O";
const CAFFEINE: &str = "Cn1cnc2c1c(=O)n(C)c(=O)n2C";
const CHOLESTEROL: &str = "CC(C)CCC[C@@H](C)[C@H]1CC[C@@H]2[C@@]1(CC[C@H]3[C@H]2CC=C4[C@@]3(CC[C@@H](C4)O)C)C";

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("ibuprofen", |b| {
        b.iter(|| black_box(normalize(black_box(IBUPROFEN))))
    });
    group.bench_function("cholesterol", |b| {
        b.iter(|| black_box(normalize(black_box(CHOLESTEROL))))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("methane", |b| {
        b.iter(|| black_box(parse_smiles(black_box(METHANE))))
    });
    group.bench_function("ibuprofen", |b| {
        b.iter(|| black_box(parse_smiles(black_box(IBUPROFEN))))
    });
    group.bench_function("caffeine", |b| {
        b.iter(|| black_box(parse_smiles(black_box(CAFFEINE))))
    });
    group.bench_function("cholesterol", |b| {
        b.iter(|| black_box(parse_smiles(black_box(CHOLESTEROL))))
    });

    group.finish();
}

fn bench_hydrogens(c: &mut Criterion) {
    let ibuprofen = parse_smiles(IBUPROFEN);
    let cholesterol = parse_smiles(CHOLESTEROL);

    let mut group = c.benchmark_group("add_hydrogens");

    group.bench_function("ibuprofen", |b| {
        b.iter(|| black_box(add_hydrogens_with(black_box(&ibuprofen), &BondOrderTyper)))
    });
    group.bench_function("cholesterol", |b| {
        b.iter(|| black_box(add_hydrogens_with(black_box(&cholesterol), &BondOrderTyper)))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_parse, bench_hydrogens);
criterion_main!(benches);
