// Benchmark for grid painting and drag commits
// Measures per-cell lookups over a full week and a complete drag gesture

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use surgery_calendar::models::event::Event;
use surgery_calendar::models::grid::{day_cells, CellAddress, VisibleWeek};
use surgery_calendar::services::drag::DragEngine;
use surgery_calendar::services::event::{EventStore, InMemoryEventStore};

fn populated_store(week: &VisibleWeek, per_day: i64) -> InMemoryEventStore {
    let mut store = InMemoryEventStore::new();
    let mut id = 0;
    for day in week.days() {
        for slot in 0..per_day {
            id += 1;
            let start = *day + Duration::minutes(15 * slot);
            let event = Event::new(id, format!("Case {}", id), start, start + Duration::minutes(45))
                .expect("valid bench event");
            store.insert(event).expect("unique bench id");
        }
    }
    store
}

fn bench_paint_week(c: &mut Criterion) {
    let week = VisibleWeek::starting(NaiveDate::from_ymd_opt(2025, 10, 14).unwrap());
    let mut group = c.benchmark_group("paint_week");

    for per_day in [1i64, 16, 96] {
        let store = populated_store(&week, per_day);
        group.bench_with_input(BenchmarkId::from_parameter(per_day), &store, |b, store| {
            b.iter(|| {
                let mut painted = 0;
                for day in week.dates() {
                    for cell in day_cells(day) {
                        painted += store.events_at(black_box(cell.timestamp())).len();
                    }
                }
                painted
            });
        });
    }

    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    let week = VisibleWeek::starting(NaiveDate::from_ymd_opt(2025, 10, 14).unwrap());
    let target = CellAddress::new(week.last(), 14, 0).unwrap();

    c.bench_function("drag_across_week", |b| {
        b.iter_batched(
            || populated_store(&week, 16),
            |mut store| {
                let mut engine = DragEngine::new();
                let mut session = engine.begin_drag(&store, 1).expect("event 1 exists");
                for day in week.dates() {
                    engine.on_hover_cell(&mut session, day);
                }
                engine
                    .end_drag(&mut store, session, Some(black_box(target)))
                    .expect("commit succeeds")
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_paint_week, bench_drag_gesture);
criterion_main!(benches);
