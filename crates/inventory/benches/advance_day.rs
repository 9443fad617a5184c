use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, Inventory, Item, SULFURAS};

/// Mixed stock cycling through every policy.
fn mixed_stock(len: usize) -> Vec<Item> {
    let templates = [
        ("+5 Dexterity Vest", 10, 20),
        (AGED_BRIE, 2, 0),
        (SULFURAS, 0, 80),
        (BACKSTAGE_PASSES, 15, 20),
        ("Conjured Mana Cake", 3, 6),
    ];
    templates
        .iter()
        .cycle()
        .take(len)
        .map(|&t| Item::from(t))
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for len in [10usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut items = mixed_stock(len);
            b.iter(|| {
                let mut inventory = Inventory::new(black_box(&mut items));
                inventory.advance_day();
            });
        });
    }

    group.finish();
}

fn bench_advance_thirty_days(c: &mut Criterion) {
    c.bench_function("advance_days/30x1000", |b| {
        b.iter_with_setup(
            || mixed_stock(1_000),
            |mut items| {
                Inventory::new(&mut items).advance_days(black_box(30));
                items
            },
        );
    });
}

criterion_group!(benches, bench_advance_day, bench_advance_thirty_days);
criterion_main!(benches);
