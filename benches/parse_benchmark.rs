use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repometrics::csv::CsvParser;
use repometrics::RepoRef;

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1000, 10000].iter() {
        let mut text = String::from("repository,description,stars,forks\n");
        for i in 0..*size {
            text.push_str(&format!(
                "owner/repo_{},\"description, with a comma {}\",{},{}\n",
                i,
                i,
                i,
                i * 2
            ));
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let parser = CsvParser::new(b',', b'"');
                black_box(parser.parse(&text));
            });
        });
    }

    group.finish();
}

fn benchmark_normalize(c: &mut Criterion) {
    c.bench_function("normalize_owner_repo", |b| {
        b.iter(|| black_box(RepoRef::normalize("OSeMOSYS/MUIO")));
    });

    c.bench_function("normalize_url_form", |b| {
        b.iter(|| black_box(RepoRef::normalize("https://github.com/foo/bar.git/")));
    });
}

criterion_group!(benches, benchmark_parse, benchmark_normalize);
criterion_main!(benches);
