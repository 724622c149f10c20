// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use branch_preview::{AliasStrategy, SeededEntropy, parse_previews};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn benchmark_alias_short_branch(c: &mut Criterion,)
{
    let entropy = SeededEntropy::new(1,);

    c.bench_function("alias_short_branch", |b| {
        b.iter(|| AliasStrategy::builder(black_box("Feature/ABC-123",),).build(&entropy,),)
    },);
}

fn benchmark_alias_long_branch(c: &mut Criterion,)
{
    let entropy = SeededEntropy::new(1,);
    let branch = "feature/".repeat(16,);

    c.bench_function("alias_long_branch", |b| {
        b.iter(|| AliasStrategy::builder(black_box(&branch,),).build(&entropy,),)
    },);
}

fn benchmark_alias_fallback(c: &mut Criterion,)
{
    let entropy = SeededEntropy::new(1,);

    c.bench_function("alias_fallback", |b| {
        b.iter(|| AliasStrategy::builder(black_box("-----",),).build(&entropy,),)
    },);
}

fn benchmark_parse_large_batch(c: &mut Criterion,)
{
    let entropy = SeededEntropy::new(1,);
    let mut yaml = String::from("template_url: https://abcd1234.myproj.pages.dev\nbranches:\n",);
    for i in 0..100 {
        yaml.push_str(&format!("  - feature/branch-{i}\n"),);
    }

    c.bench_function("parse_100_branches", |b| {
        b.iter(|| parse_previews(black_box(&yaml,), &entropy,).expect("parse failed",),)
    },);
}

criterion_group!(
    benches,
    benchmark_alias_short_branch,
    benchmark_alias_long_branch,
    benchmark_alias_fallback,
    benchmark_parse_large_batch
);
criterion_main!(benches);
