//! 输入校验性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linksnip::utils::alias::normalize_alias;
use linksnip::utils::generate_random_code;
use linksnip::utils::url_validator::normalize_url;

// ============== normalize_url 基准测试 ==============

fn bench_normalize_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation/normalize_url");

    // 已带 scheme 的 URL
    group.bench_function("qualified_https", |b| {
        b.iter(|| {
            assert!(normalize_url("https://example.com/path?query=1").is_ok());
        });
    });

    // 裸域名需要补全 scheme 后再解析
    group.bench_function("bare_domain", |b| {
        b.iter(|| {
            assert_eq!(
                normalize_url("example.com/article").unwrap(),
                "https://example.com/article"
            );
        });
    });

    group.bench_function("bare_domain_with_port", |b| {
        b.iter(|| {
            assert!(normalize_url("localhost:8080/api").is_ok());
        });
    });

    // 无效输入
    group.bench_function("invalid_scheme", |b| {
        b.iter(|| {
            assert!(normalize_url("ftp://example.com").is_err());
        });
    });

    group.bench_function("invalid_empty", |b| {
        b.iter(|| {
            assert!(normalize_url("   ").is_err());
        });
    });

    group.bench_function("invalid_no_host", |b| {
        b.iter(|| {
            assert!(normalize_url("https://").is_err());
        });
    });

    // 长 URL
    let long_url = format!("https://example.com/{}", "a".repeat(1000));
    group.bench_function("qualified_long_url", |b| {
        b.iter(|| {
            assert!(normalize_url(&long_url).is_ok());
        });
    });

    group.finish();
}

// ============== normalize_alias 基准测试 ==============

fn bench_normalize_alias(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation/normalize_alias");

    group.bench_function("valid", |b| {
        b.iter(|| {
            assert!(normalize_alias("weekly-report_2026").unwrap().is_some());
        });
    });

    group.bench_function("blank_means_none", |b| {
        b.iter(|| {
            assert!(normalize_alias("   ").unwrap().is_none());
        });
    });

    group.bench_function("invalid_character", |b| {
        b.iter(|| {
            assert!(normalize_alias("my alias!").is_err());
        });
    });

    group.bench_function("too_short", |b| {
        b.iter(|| {
            assert!(normalize_alias("ab").is_err());
        });
    });

    group.finish();
}

// ============== generate_random_code 基准测试 ==============

fn bench_generate_random_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation/generate_random_code");

    for length in [4, 6, 8, 12] {
        group.bench_with_input(BenchmarkId::new("length", length), &length, |b, &length| {
            b.iter(|| {
                let code = generate_random_code(length);
                assert_eq!(code.len(), length);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize_url,
    bench_normalize_alias,
    bench_generate_random_code,
);
criterion_main!(benches);
