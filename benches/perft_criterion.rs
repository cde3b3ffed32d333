use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_board::game_state::game_state::GameState;
use plum_board::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_board::move_generation::perft::{perft, perft_multi_threaded};

/// Published leaf counts per depth, shallowest first. Set `PLUM_PERFT_DEEP=1`
/// to include the last depth of each row.
const POSITIONS: &[(&str, &str, &[u64])] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[20, 400, 8902, 197_281],
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[48, 2039, 97_862],
    ),
    (
        "rook_endgame",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[14, 191, 2812, 43_238],
    ),
];

fn bench_perft(c: &mut Criterion) {
    let deep = std::env::var("PLUM_PERFT_DEEP").is_ok_and(|value| value == "1");

    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for &(name, fen, counts) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        let depths = if deep { counts.len() } else { counts.len() - 1 };

        for (depth, &nodes) in (1u8..).zip(&counts[..depths]) {
            assert_eq!(
                perft(&LegalMoveGenerator, &game, depth),
                nodes,
                "{name} disagrees with the published count at depth {depth}"
            );

            group.throughput(Throughput::Elements(nodes));
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                b.iter(|| perft(&LegalMoveGenerator, black_box(&game), depth));
            });
        }

        let depth = depths as u8;
        group.bench_with_input(
            BenchmarkId::new(format!("{name}_threaded"), depth),
            &depth,
            |b, &depth| {
                b.iter(|| perft_multi_threaded(&LegalMoveGenerator, black_box(&game), depth));
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
