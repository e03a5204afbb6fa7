use callsink::domain::{CallWebhook, ReportEntry};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

fn make_webhook_payload(n_turns: usize) -> Value {
    let turns: Vec<Value> = (0..n_turns)
        .map(|i| {
            json!({
                "role": if i % 2 == 0 { "agent" } else { "user" },
                "content": format!("utterance number {i} in a reasonably long sentence"),
            })
        })
        .collect();

    json!({
        "event": "call_analyzed",
        "call": {
            "call_id": "call_bench",
            "start_timestamp": 1_700_000_000_000i64,
            "end_timestamp": 1_700_000_300_000i64,
            "recording_url": "https://example.com/rec.wav",
            "transcript_object": turns,
        }
    })
}

fn bench_webhook_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("webhook_render");
    for n_turns in [1usize, 10, 100] {
        let payload = make_webhook_payload(n_turns);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_turns),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let webhook = CallWebhook::from_payload(
                        black_box(payload),
                        "2026-08-06T12:00:00+00:00".to_string(),
                    );
                    black_box(webhook.render())
                })
            },
        );
    }
    group.finish();
}

fn bench_report_render(c: &mut Criterion) {
    let payload = json!({
        "issue": "agent talked over the caller",
        "severity": "medium",
        "call_id": "call_bench",
        "metadata": {"attempt": 1},
    });

    c.bench_function("report_render", |b| {
        b.iter(|| {
            let entry = ReportEntry::from_payload(
                black_box(&payload),
                "2026-08-06T12:00:00+00:00".to_string(),
            );
            black_box(entry.render())
        })
    });
}

criterion_group!(benches, bench_webhook_render, bench_report_render);
criterion_main!(benches);
