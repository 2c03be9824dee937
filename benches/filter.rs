use chrono::{FixedOffset, TimeZone};
use criterion::{criterion_group, criterion_main, Criterion};
use syslog_relay::{Filter, Header, LegacyRecord, Record};

fn passes(c: &mut Criterion) {
    let ts = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2023, 4, 7, 12, 52, 0)
        .unwrap();
    let record = Record::from(LegacyRecord::new(
        Header::new(14, ts).with_appname("web.1"),
        "at=info method=GET path=\"/\" status=200 bytes=1024",
    ));

    let contains = Filter::contains("Message", "status=200");
    let pattern = Filter::matches_pattern("Message", r"status=[45]\d\d").unwrap();
    let combined = Filter::all_of([
        Filter::contains("AppName", "web"),
        contains.clone(),
        pattern.clone(),
    ]);

    let mut group = c.benchmark_group("passes");

    group.bench_function("contains", |b| b.iter(|| contains.passes(&record)));

    group.bench_function("pattern", |b| b.iter(|| pattern.passes(&record)));

    group.bench_function("all_of", |b| b.iter(|| combined.passes(&record)));

    group.finish();
}

criterion_group!(benches, passes);
criterion_main!(benches);
